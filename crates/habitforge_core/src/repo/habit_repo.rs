//! Habit repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable storage primitives over the session habit collection.
//! - Keep collection layout details out of the store service.
//!
//! # Invariants
//! - Write paths must call `Habit::validate()` before mutating storage.
//! - Ids are unique within one repository.
//! - `list_habits` returns records in insertion order.

use crate::model::category::Category;
use crate::model::habit::{Habit, HabitId, HabitValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for habit storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(HabitValidationError),
    DuplicateId(HabitId),
    NotFound(HabitId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "habit id already exists: {id}"),
            Self::NotFound(id) => write!(f, "habit not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<HabitValidationError> for RepoError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitListQuery {
    /// Optional single-category filter.
    pub category: Option<Category>,
}

/// Repository interface for habit storage.
pub trait HabitRepository {
    /// Appends one habit; rejects duplicate ids.
    fn insert_habit(&mut self, habit: Habit) -> RepoResult<HabitId>;
    /// Replaces an existing habit in place, keeping its position.
    fn replace_habit(&mut self, habit: Habit) -> RepoResult<()>;
    fn get_habit(&self, id: HabitId) -> Option<&Habit>;
    /// Lists habits in insertion order.
    fn list_habits(&self, query: &HabitListQuery) -> Vec<Habit>;
    /// Removes one habit and returns it when present.
    fn remove_habit(&mut self, id: HabitId) -> Option<Habit>;
    fn count(&self) -> usize;
}

/// Session-scoped habit storage backed by an insertion-ordered `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHabitRepository {
    habits: Vec<Habit>,
}

impl InMemoryHabitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: HabitId) -> Option<usize> {
        self.habits.iter().position(|habit| habit.id == id)
    }
}

impl HabitRepository for InMemoryHabitRepository {
    fn insert_habit(&mut self, habit: Habit) -> RepoResult<HabitId> {
        habit.validate()?;
        if self.position(habit.id).is_some() {
            return Err(RepoError::DuplicateId(habit.id));
        }

        let id = habit.id;
        self.habits.push(habit);
        Ok(id)
    }

    fn replace_habit(&mut self, habit: Habit) -> RepoResult<()> {
        habit.validate()?;
        let index = self
            .position(habit.id)
            .ok_or(RepoError::NotFound(habit.id))?;
        self.habits[index] = habit;
        Ok(())
    }

    fn get_habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    fn list_habits(&self, query: &HabitListQuery) -> Vec<Habit> {
        self.habits
            .iter()
            .filter(|habit| match query.category {
                Some(category) => habit.category == category,
                None => true,
            })
            .cloned()
            .collect()
    }

    fn remove_habit(&mut self, id: HabitId) -> Option<Habit> {
        let index = self.position(id)?;
        Some(self.habits.remove(index))
    }

    fn count(&self) -> usize {
        self.habits.len()
    }
}
