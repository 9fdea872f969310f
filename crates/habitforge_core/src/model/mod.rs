//! Habit domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the category set closed so invalid groupings never enter the store.
//!
//! # Invariants
//! - Every habit is identified by a stable `HabitId`.
//! - Deletion is a hard delete; no tombstones are kept.

pub mod category;
pub mod habit;
