//! Habit store use-case service.
//!
//! # Responsibility
//! - Provide create/toggle/delete/list entry points for core callers.
//! - Enforce name validation and the streak transition rule.
//! - Bundle derived progress into dashboard snapshots.
//!
//! # Invariants
//! - Failed operations leave the collection untouched.
//! - `delete` is idempotent; missing ids are not an error.
//! - Streak credit is kept when a completion is undone.
//! - Log events carry ids and categories only, never habit names.

use crate::model::category::Category;
use crate::model::habit::{Habit, HabitId, HabitValidationError};
use crate::progress::aggregator::{
    all_category_progress, longest_streak, overall_completion, CategoryProgress,
    CategoryProgressMap,
};
use crate::repo::habit_repo::{
    HabitListQuery, HabitRepository, InMemoryHabitRepository, RepoError,
};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for habit store use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitStoreError {
    /// Input failed domain validation.
    Validation(HabitValidationError),
    /// Target habit does not exist.
    NotFound(HabitId),
    /// Restored records contain the same id twice.
    DuplicateId(HabitId),
}

impl Display for HabitStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "habit not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate habit id: {id}"),
        }
    }
}

impl Error for HabitStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HabitValidationError> for HabitStoreError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for HabitStoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::DuplicateId(id) => Self::DuplicateId(id),
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

pub type HabitStoreResult<T> = Result<T, HabitStoreError>;

/// One consistent read of habits plus everything derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Habits in insertion order.
    pub habits: Vec<Habit>,
    pub by_category: CategoryProgressMap,
    pub overall: CategoryProgress,
    pub longest_streak: u32,
}

/// Habit store facade over repository implementations.
#[derive(Debug, Clone, Default)]
pub struct HabitStore<R: HabitRepository = InMemoryHabitRepository> {
    repo: R,
}

impl HabitStore<InMemoryHabitRepository> {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryHabitRepository::new())
    }

    /// Rebuilds a session store from existing records, keeping their order.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id.
    /// - `Validation` when a record breaks habit invariants.
    pub fn restore(habits: impl IntoIterator<Item = Habit>) -> HabitStoreResult<Self> {
        let mut repo = InMemoryHabitRepository::new();
        for habit in habits {
            repo.insert_habit(habit)?;
        }
        info!(
            "event=store_restore module=store status=ok count={}",
            repo.count()
        );
        Ok(Self::with_repository(repo))
    }

    /// Creates a store holding the starter dashboard shown to new users.
    pub fn with_demo_habits() -> Self {
        let mut store = Self::new();
        for (name, category, streak, completed) in DEMO_HABITS {
            let seeded = Habit::with_state(Uuid::new_v4(), name, category, streak, completed)
                .map_err(RepoError::from)
                .and_then(|habit| store.repo.insert_habit(habit));
            if let Err(err) = seeded {
                warn!(
                    "event=store_seed module=store status=error category={} error={}",
                    category, err
                );
            }
        }
        store
    }
}

const DEMO_HABITS: [(&str, Category, u32, bool); 5] = [
    ("Morning meditation", Category::Spiritual, 7, true),
    ("Read 20 pages", Category::Mental, 3, false),
    ("30-min workout", Category::Physical, 5, true),
    ("Track expenses", Category::Financial, 2, false),
    ("Journaling", Category::Mental, 4, false),
];

impl<R: HabitRepository> HabitStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and appends a new habit.
    ///
    /// # Contract
    /// - `name` is trimmed; blank input fails with `Validation(EmptyName)`.
    /// - New habits start with `streak = 0` and `completed = false`.
    pub fn create(&mut self, name: &str, category: Category) -> HabitStoreResult<Habit> {
        let habit = match Habit::new(name, category) {
            Ok(habit) => habit,
            Err(err) => {
                warn!(
                    "event=habit_create module=store status=rejected category={} error={}",
                    category, err
                );
                return Err(err.into());
            }
        };

        self.repo.insert_habit(habit.clone())?;
        info!(
            "event=habit_create module=store status=ok habit_id={} category={} count={}",
            habit.id,
            category,
            self.repo.count()
        );
        Ok(habit)
    }

    /// Flips completion for one habit and returns the updated record.
    ///
    /// # Contract
    /// - Incomplete -> complete adds exactly one streak day.
    /// - Complete -> incomplete leaves the streak unchanged.
    /// - Missing id fails with `NotFound` and changes nothing.
    pub fn toggle(&mut self, id: HabitId) -> HabitStoreResult<Habit> {
        let mut habit = match self.repo.get_habit(id) {
            Some(habit) => habit.clone(),
            None => {
                debug!(
                    "event=habit_toggle module=store status=not_found habit_id={}",
                    id
                );
                return Err(HabitStoreError::NotFound(id));
            }
        };

        let completed = habit.toggle_completion();
        self.repo.replace_habit(habit.clone())?;
        info!(
            "event=habit_toggle module=store status=ok habit_id={} completed={} streak={}",
            id, completed, habit.streak
        );
        Ok(habit)
    }

    /// Removes one habit permanently.
    ///
    /// Returns `true` when a habit was removed and `false` when the id was
    /// already absent.
    pub fn delete(&mut self, id: HabitId) -> bool {
        let removed = self.repo.remove_habit(id).is_some();
        info!(
            "event=habit_delete module=store status=ok habit_id={} removed={} count={}",
            id,
            removed,
            self.repo.count()
        );
        removed
    }

    /// Lists habits in insertion order, optionally filtered by category.
    pub fn list(&self, filter: Option<Category>) -> Vec<Habit> {
        self.repo.list_habits(&HabitListQuery { category: filter })
    }

    /// Returns one habit by id, or `None` when absent.
    pub fn get(&self, id: HabitId) -> Option<Habit> {
        self.repo.get_habit(id).cloned()
    }

    /// Number of habits currently held.
    pub fn len(&self) -> usize {
        self.repo.count()
    }

    /// Whether the store holds no habits.
    pub fn is_empty(&self) -> bool {
        self.repo.count() == 0
    }

    /// Reads habits once and derives every dashboard metric from that read.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let habits = self.list(None);
        DashboardSnapshot {
            by_category: all_category_progress(&habits),
            overall: overall_completion(&habits),
            longest_streak: longest_streak(&habits),
            habits,
        }
    }
}
