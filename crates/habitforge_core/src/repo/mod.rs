//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate collection details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Habit::validate()` before storing.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod habit_repo;
