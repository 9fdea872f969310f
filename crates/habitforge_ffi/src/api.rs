//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level habit functions to Dart via FRB.
//! - Own the single session habit store for the running process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids and categories cross the boundary as UTF-8 strings.
//! - Every call observes a fully applied store state.

use habitforge_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_category,
    ping as ping_inner, CategoryProgress, Habit, HabitId, HabitStore,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const OVERALL_PROGRESS_KEY: &str = "overall";

static SESSION_STORE: Lazy<Mutex<HabitStore>> =
    Lazy::new(|| Mutex::new(HabitStore::with_demo_habits()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Habit row returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItem {
    /// Stable habit ID in string form.
    pub habit_id: String,
    pub name: String,
    /// Category wire id (`mental|physical|spiritual|financial`).
    pub category: String,
    pub streak: u32,
    pub completed: bool,
}

/// Action response envelope for habit mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Habit state after the operation, when one exists.
    pub habit: Option<HabitItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl HabitActionResponse {
    fn success(message: impl Into<String>, habit: Option<HabitItem>) -> Self {
        Self {
            ok: true,
            habit,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            habit: None,
            message: message.into(),
        }
    }
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitListResponse {
    pub ok: bool,
    /// Habits in insertion order.
    pub items: Vec<HabitItem>,
    pub message: String,
}

/// Progress row for one category or the `overall` aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgressItem {
    pub category: String,
    pub completed_count: u32,
    pub total_count: u32,
    pub percentage: u8,
}

/// Creates a habit in the session store.
///
/// # FFI contract
/// - Blank names and unknown categories return `ok=false` without mutation.
/// - Returns the created habit on success.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_create(name: String, category: String) -> HabitActionResponse {
    let category = match parse_category(&category) {
        Ok(category) => category,
        Err(err) => return HabitActionResponse::failure(format!("habit_create failed: {err}")),
    };

    match lock_store().create(&name, category) {
        Ok(habit) => HabitActionResponse::success("Habit created.", Some(to_habit_item(&habit))),
        Err(err) => HabitActionResponse::failure(format!("habit_create failed: {err}")),
    }
}

/// Toggles completion for one habit.
///
/// # FFI contract
/// - Unknown or malformed ids return `ok=false`.
/// - Returns the updated habit on success.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_toggle(habit_id: String) -> HabitActionResponse {
    let id = match parse_habit_id(&habit_id) {
        Ok(id) => id,
        Err(message) => {
            return HabitActionResponse::failure(format!("habit_toggle failed: {message}"));
        }
    };

    match lock_store().toggle(id) {
        Ok(habit) => {
            let message = if habit.completed {
                "Habit completed."
            } else {
                "Habit marked incomplete."
            };
            HabitActionResponse::success(message, Some(to_habit_item(&habit)))
        }
        Err(err) => HabitActionResponse::failure(format!("habit_toggle failed: {err}")),
    }
}

/// Deletes one habit.
///
/// # FFI contract
/// - Idempotent: deleting an absent id still returns `ok=true`.
/// - Malformed ids return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_delete(habit_id: String) -> HabitActionResponse {
    let id = match parse_habit_id(&habit_id) {
        Ok(id) => id,
        Err(message) => {
            return HabitActionResponse::failure(format!("habit_delete failed: {message}"));
        }
    };

    if lock_store().delete(id) {
        HabitActionResponse::success("Habit deleted.", None)
    } else {
        HabitActionResponse::success("Habit already removed.", None)
    }
}

/// Lists habits, optionally restricted to one category.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_list(category: Option<String>) -> HabitListResponse {
    let filter = match category.as_deref().map(parse_category).transpose() {
        Ok(filter) => filter,
        Err(err) => {
            return HabitListResponse {
                ok: false,
                items: Vec::new(),
                message: format!("habit_list failed: {err}"),
            };
        }
    };

    let items = lock_store()
        .list(filter)
        .iter()
        .map(to_habit_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No habits.".to_string()
    } else {
        format!("Found {} habit(s).", items.len())
    };
    HabitListResponse {
        ok: true,
        items,
        message,
    }
}

/// Returns progress for all four categories in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn progress_by_category() -> Vec<CategoryProgressItem> {
    lock_store()
        .snapshot()
        .by_category
        .iter()
        .map(|(category, progress)| to_progress_item(category.as_str(), progress))
        .collect()
}

/// Returns completion across all habits combined.
#[flutter_rust_bridge::frb(sync)]
pub fn progress_overall() -> CategoryProgressItem {
    to_progress_item(OVERALL_PROGRESS_KEY, lock_store().snapshot().overall)
}

/// Replaces the session store with the starter dashboard.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_reset_demo() -> HabitListResponse {
    let mut store = lock_store();
    *store = HabitStore::with_demo_habits();
    let items = store.list(None).iter().map(to_habit_item).collect::<Vec<_>>();
    HabitListResponse {
        ok: true,
        message: format!("Loaded {} demo habit(s).", items.len()),
        items,
    }
}

// Each store call is atomic, so state behind a poisoned lock is still whole.
fn lock_store() -> MutexGuard<'static, HabitStore> {
    SESSION_STORE.lock().unwrap_or_else(|poisoned| {
        warn!("event=store_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn parse_habit_id(value: &str) -> Result<HabitId, String> {
    let trimmed = value.trim();
    match Uuid::parse_str(trimmed) {
        Ok(id) if !id.is_nil() => Ok(id),
        _ => Err(format!("invalid habit id `{trimmed}`")),
    }
}

fn to_habit_item(habit: &Habit) -> HabitItem {
    HabitItem {
        habit_id: habit.id.to_string(),
        name: habit.name.clone(),
        category: habit.category.as_str().to_string(),
        streak: habit.streak,
        completed: habit.completed,
    }
}

fn to_progress_item(key: &str, progress: CategoryProgress) -> CategoryProgressItem {
    CategoryProgressItem {
        category: key.to_string(),
        completed_count: u32::try_from(progress.completed_count).unwrap_or(u32::MAX),
        total_count: u32::try_from(progress.total_count).unwrap_or(u32::MAX),
        percentage: progress.percentage,
    }
}
