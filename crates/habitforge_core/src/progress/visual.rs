//! Geometry for progress rings and the four-strand helix.
//!
//! Renderers draw these shapes; core only computes coordinates so every
//! surface shows the same numbers.

use crate::model::category::Category;
use crate::progress::aggregator::CategoryProgressMap;
use std::f64::consts::PI;

pub const DEFAULT_RING_SIZE: f64 = 120.0;
pub const DEFAULT_RING_STROKE: f64 = 8.0;

const HELIX_POINTS: u32 = 100;
const HELIX_FREQUENCY: f64 = 0.02;
const HELIX_NODE_STEP: usize = 15;

/// Stroke geometry for one circular progress ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    /// Dash offset that leaves `progress` percent of the ring visible.
    pub dash_offset: f64,
    /// Center label, e.g. `"67%"`.
    pub label: String,
}

/// Computes ring geometry for a `0..=100` progress value.
///
/// Out-of-range progress is clamped. A stroke wider than the ring yields a
/// zero radius.
pub fn ring_geometry(progress: f64, size: f64, stroke_width: f64) -> RingGeometry {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    };
    let radius = ((size - stroke_width) / 2.0).max(0.0);
    let circumference = radius * 2.0 * PI;
    let dash_offset = circumference - (progress / 100.0) * circumference;

    RingGeometry {
        radius,
        circumference,
        dash_offset,
        label: format!("{}%", progress.round() as u32),
    }
}

/// Canvas presets for the helix view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HelixSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl HelixSize {
    /// `(width, height)` in canvas units.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Small => (200.0, 300.0),
            Self::Medium => (300.0, 400.0),
            Self::Large => (400.0, 500.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixPoint {
    /// Sample index along the strand, `0..=100`.
    pub index: u32,
    pub x: f64,
    pub y: f64,
}

/// One category strand of the helix.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixStrand {
    pub category: Category,
    pub percentage: u8,
    /// Polyline samples; empty progress still draws the origin point.
    pub points: Vec<HelixPoint>,
    /// Connection nodes, every 15th sample of `points`.
    pub nodes: Vec<HelixPoint>,
}

/// Builds the four strands in `Category::ALL` order.
pub fn helix_strands(progress: &CategoryProgressMap, size: HelixSize) -> Vec<HelixStrand> {
    let (width, height) = size.dimensions();
    let center_x = width / 2.0;
    let amplitude = width / 4.0;

    progress
        .iter()
        .map(|(category, entry)| {
            let visible = visible_points(entry.percentage);
            let offset = category.helix_offset();
            let points = (0..=visible)
                .map(|index| {
                    let step = f64::from(index);
                    HelixPoint {
                        index,
                        x: center_x + amplitude * (HELIX_FREQUENCY * step * PI + offset).sin(),
                        y: step / f64::from(HELIX_POINTS) * height,
                    }
                })
                .collect::<Vec<_>>();
            let nodes = points.iter().step_by(HELIX_NODE_STEP).copied().collect();

            HelixStrand {
                category,
                percentage: entry.percentage,
                points,
                nodes,
            }
        })
        .collect()
}

fn visible_points(percentage: u8) -> u32 {
    HELIX_POINTS * u32::from(percentage.min(100)) / 100
}
