//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitforge_core` linkage.
//! - Print the starter dashboard's derived progress deterministically.

use habitforge_core::{default_log_level, init_logging, HabitStore};
use log::info;

const LOG_DIR_ENV: &str = "HABITFORGE_LOG_DIR";

fn main() {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level().as_str(), &log_dir) {
            eprintln!("habitforge logging disabled: {err}");
        }
    }

    println!("habitforge_core ping={}", habitforge_core::ping());
    println!("habitforge_core version={}", habitforge_core::core_version());

    let snapshot = HabitStore::with_demo_habits().snapshot();
    info!(
        "event=cli_probe module=cli status=ok habits={}",
        snapshot.habits.len()
    );
    for (category, progress) in snapshot.by_category.iter() {
        println!(
            "{:<10} {}/{} {:>3}%",
            category.display_name(),
            progress.completed_count,
            progress.total_count,
            progress.percentage
        );
    }
    println!(
        "{:<10} {}/{} {:>3}% longest_streak={}",
        "Overall",
        snapshot.overall.completed_count,
        snapshot.overall.total_count,
        snapshot.overall.percentage,
        snapshot.longest_streak
    );
}
