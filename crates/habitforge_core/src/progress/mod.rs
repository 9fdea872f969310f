//! Derived progress metrics and visualization geometry.
//!
//! # Responsibility
//! - Turn a habit snapshot into completion statistics.
//! - Turn completion statistics into ring/helix geometry for renderers.
//!
//! # Invariants
//! - Nothing in this module mutates habit state.

pub mod aggregator;
pub mod visual;
