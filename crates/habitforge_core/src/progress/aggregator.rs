//! Completion statistics derived from a habit snapshot.
//!
//! # Responsibility
//! - Compute per-category and overall completion for dashboards and rings.
//! - Provide streak summaries for progress stat cards.
//!
//! # Invariants
//! - Every function is pure: identical input yields identical output.
//! - `percentage` is always within `0..=100`; empty input yields `0`.
//! - Category iteration follows `Category::ALL` order.

use crate::model::category::Category;
use crate::model::habit::Habit;
use serde::Serialize;

/// Derived completion statistic for one category or for all habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub completed_count: usize,
    pub total_count: usize,
    /// Rounded completion ratio in `0..=100`.
    pub percentage: u8,
}

impl CategoryProgress {
    /// Builds progress from raw counts.
    ///
    /// `completed_count` is clamped to `total_count`.
    pub fn from_counts(completed_count: usize, total_count: usize) -> Self {
        let completed_count = completed_count.min(total_count);
        Self {
            completed_count,
            total_count,
            percentage: rounded_percentage(completed_count, total_count),
        }
    }
}

/// Progress for all four categories in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryProgressMap {
    entries: [CategoryProgress; 4],
}

impl CategoryProgressMap {
    pub fn get(&self, category: Category) -> CategoryProgress {
        self.entries[category.index()]
    }

    /// Iterates `(category, progress)` pairs in `Category::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryProgress)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.entries[category.index()]))
    }

    /// Percentages keyed by category position, as consumed by the helix view.
    pub fn percentages(&self) -> [u8; 4] {
        self.entries.map(|entry| entry.percentage)
    }
}

/// Computes completion for one category.
pub fn category_progress(habits: &[Habit], category: Category) -> CategoryProgress {
    let (completed, total) = habits
        .iter()
        .filter(|habit| habit.category == category)
        .fold((0, 0), |(completed, total), habit| {
            (completed + usize::from(habit.completed), total + 1)
        });
    CategoryProgress::from_counts(completed, total)
}

/// Computes completion for every category in one pass.
pub fn all_category_progress(habits: &[Habit]) -> CategoryProgressMap {
    let mut counts = [(0usize, 0usize); 4];
    for habit in habits {
        let slot = &mut counts[habit.category.index()];
        slot.0 += usize::from(habit.completed);
        slot.1 += 1;
    }

    CategoryProgressMap {
        entries: counts.map(|(completed, total)| CategoryProgress::from_counts(completed, total)),
    }
}

/// Computes completion across all habits combined.
pub fn overall_completion(habits: &[Habit]) -> CategoryProgress {
    let completed = habits.iter().filter(|habit| habit.completed).count();
    CategoryProgress::from_counts(completed, habits.len())
}

/// Highest streak across habits, `0` when there are none.
pub fn longest_streak(habits: &[Habit]) -> u32 {
    habits.iter().map(|habit| habit.streak).max().unwrap_or(0)
}

/// Sum of all streak credits.
pub fn total_streak_days(habits: &[Habit]) -> u64 {
    habits.iter().map(|habit| u64::from(habit.streak)).sum()
}

// round(100 * completed / total), half away from zero, without floats.
fn rounded_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    let value = (200 * completed + total) / (2 * total);
    u8::try_from(value).unwrap_or(100)
}
