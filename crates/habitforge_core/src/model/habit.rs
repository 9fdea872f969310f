//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical record for one user-tracked recurring action.
//! - Own the completion/streak transition rule.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reused for another habit.
//! - `name` is trimmed and never blank.
//! - `streak` only grows; undoing a completion keeps the earned credit.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every habit.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type HabitId = Uuid;

/// Validation errors for habit domain invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
    /// `Uuid::nil()` is reserved and cannot identify a habit.
    NilId,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "habit name is required"),
            Self::NilId => write!(f, "habit id must not be nil"),
        }
    }
}

impl Error for HabitValidationError {}

/// Canonical domain record for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HabitRecord")]
pub struct Habit {
    /// Stable ID assigned at creation.
    pub id: HabitId,
    /// Trimmed display text.
    pub name: String,
    /// Fixed at creation; reassignment is not modeled.
    pub category: Category,
    /// Consecutive completions credited to this habit.
    pub streak: u32,
    /// Whether the habit is done for the current period.
    pub completed: bool,
}

/// Unvalidated wire shape used to re-check invariants on deserialize.
#[derive(Deserialize)]
struct HabitRecord {
    id: HabitId,
    name: String,
    category: Category,
    streak: u32,
    completed: bool,
}

impl TryFrom<HabitRecord> for Habit {
    type Error = HabitValidationError;

    fn try_from(value: HabitRecord) -> Result<Self, Self::Error> {
        Habit::with_state(
            value.id,
            value.name,
            value.category,
            value.streak,
            value.completed,
        )
    }
}

impl Habit {
    /// Creates a new habit with a generated stable ID.
    ///
    /// # Invariants
    /// - `streak` starts at `0` and `completed` at `false`.
    ///
    /// # Errors
    /// - Returns `EmptyName` when `name` is blank after trimming.
    pub fn new(name: &str, category: Category) -> Result<Self, HabitValidationError> {
        Self::with_state(Uuid::new_v4(), name, category, 0, false)
    }

    /// Creates a habit with caller-provided identity and progress state.
    ///
    /// Used by seed and restore paths where the record already exists.
    ///
    /// # Errors
    /// - Returns `NilId` for `Uuid::nil()`.
    /// - Returns `EmptyName` when `name` is blank after trimming.
    pub fn with_state(
        id: HabitId,
        name: impl AsRef<str>,
        category: Category,
        streak: u32,
        completed: bool,
    ) -> Result<Self, HabitValidationError> {
        if id.is_nil() {
            return Err(HabitValidationError::NilId);
        }
        let name = normalize_habit_name(name.as_ref())?;

        Ok(Self {
            id,
            name,
            category,
            streak,
            completed,
        })
    }

    /// Flips completion for the current period and returns the new value.
    ///
    /// Marking done credits one streak day. Un-marking keeps the streak as is.
    pub fn toggle_completion(&mut self) -> bool {
        if self.completed {
            self.completed = false;
        } else {
            self.completed = true;
            self.streak = self.streak.saturating_add(1);
        }
        self.completed
    }

    /// Re-checks invariants for records built field-by-field.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.id.is_nil() {
            return Err(HabitValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Trims a habit name and rejects blank input.
pub fn normalize_habit_name(name: &str) -> Result<String, HabitValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(HabitValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_habit_name, Habit, HabitValidationError};
    use crate::model::category::Category;

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_habit_name("  Stretch \n").unwrap(), "Stretch");
        assert_eq!(
            normalize_habit_name(" \t "),
            Err(HabitValidationError::EmptyName)
        );
    }

    #[test]
    fn toggle_credits_streak_only_on_completion() {
        let mut habit = Habit::new("Journaling", Category::Mental).unwrap();

        assert!(habit.toggle_completion());
        assert_eq!(habit.streak, 1);
        assert!(!habit.toggle_completion());
        assert_eq!(habit.streak, 1);
        assert!(habit.toggle_completion());
        assert_eq!(habit.streak, 2);
    }

    #[test]
    fn toggle_saturates_at_max_streak() {
        let mut habit = Habit::new("Read", Category::Mental).unwrap();
        habit.streak = u32::MAX;
        habit.toggle_completion();
        assert_eq!(habit.streak, u32::MAX);
    }
}
