//! Flutter-facing bindings for HabitForge core.

pub mod api;
