//! Core domain logic for HabitForge.
//! This crate is the single source of truth for habit, streak and progress rules.

pub mod logging;
pub mod model;
pub mod progress;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogConfig, LogLevel,
    LoggingError,
};
pub use model::category::{parse_category, Category, CategoryParseError};
pub use model::habit::{normalize_habit_name, Habit, HabitId, HabitValidationError};
pub use progress::aggregator::{
    all_category_progress, category_progress, longest_streak, overall_completion,
    total_streak_days, CategoryProgress, CategoryProgressMap,
};
pub use progress::visual::{
    helix_strands, ring_geometry, HelixPoint, HelixSize, HelixStrand, RingGeometry,
    DEFAULT_RING_SIZE, DEFAULT_RING_STROKE,
};
pub use repo::habit_repo::{
    HabitListQuery, HabitRepository, InMemoryHabitRepository, RepoError, RepoResult,
};
pub use service::habit_store::{
    DashboardSnapshot, HabitStore, HabitStoreError, HabitStoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
