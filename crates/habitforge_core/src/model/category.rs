//! Life category enumeration and display metadata.
//!
//! # Responsibility
//! - Define the fixed set of four life categories.
//! - Provide stable wire ids and renderer metadata (names, colors, offsets).
//!
//! # Invariants
//! - The set is closed; parsing rejects anything outside it.
//! - `Category::ALL` order is the canonical display order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

/// One of the four fixed life dimensions a habit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Mind and focus.
    Mental,
    /// Body and health.
    Physical,
    /// Soul and purpose.
    Spiritual,
    /// Wealth and growth.
    Financial,
}

/// Wire value for the mental category.
pub const CATEGORY_MENTAL: &str = "mental";
/// Wire value for the physical category.
pub const CATEGORY_PHYSICAL: &str = "physical";
/// Wire value for the spiritual category.
pub const CATEGORY_SPIRITUAL: &str = "spiritual";
/// Wire value for the financial category.
pub const CATEGORY_FINANCIAL: &str = "financial";

impl Category {
    /// All categories in canonical display order.
    pub const ALL: [Category; 4] = [
        Category::Mental,
        Category::Physical,
        Category::Spiritual,
        Category::Financial,
    ];

    /// Stable string id used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mental => CATEGORY_MENTAL,
            Self::Physical => CATEGORY_PHYSICAL,
            Self::Spiritual => CATEGORY_SPIRITUAL,
            Self::Financial => CATEGORY_FINANCIAL,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Mental => "Mental",
            Self::Physical => "Physical",
            Self::Spiritual => "Spiritual",
            Self::Financial => "Financial",
        }
    }

    /// Short onboarding tagline.
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Mental => "Mind & focus",
            Self::Physical => "Body & health",
            Self::Spiritual => "Soul & purpose",
            Self::Financial => "Wealth & growth",
        }
    }

    /// Accent color as `#RRGGBB`.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Mental => "#6366F1",
            Self::Physical => "#10B981",
            Self::Spiritual => "#8B5CF6",
            Self::Financial => "#0D9488",
        }
    }

    /// Phase offset (radians) of this category's strand in the helix view.
    ///
    /// Strands are spaced a quarter turn apart following `ALL` order.
    pub fn helix_offset(self) -> f64 {
        match self {
            Self::Mental => 0.0,
            Self::Physical => PI / 2.0,
            Self::Spiritual => PI,
            Self::Financial => 3.0 * PI / 2.0,
        }
    }

    /// Position of this category inside `ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::Mental => 0,
            Self::Physical => 1,
            Self::Spiritual => 2,
            Self::Financial => 3,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one category from its wire id.
///
/// Input is trimmed and matched case-insensitively.
pub fn parse_category(value: &str) -> Result<Category, CategoryParseError> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(CategoryParseError::Empty);
    }

    match normalized.as_str() {
        CATEGORY_MENTAL => Ok(Category::Mental),
        CATEGORY_PHYSICAL => Ok(Category::Physical),
        CATEGORY_SPIRITUAL => Ok(Category::Spiritual),
        CATEGORY_FINANCIAL => Ok(Category::Financial),
        _ => Err(CategoryParseError::Unknown(value.trim().to_string())),
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s)
    }
}

/// Category parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unknown(String),
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "category value must not be empty"),
            Self::Unknown(value) => write!(
                f,
                "unknown category `{value}`; expected mental|physical|spiritual|financial"
            ),
        }
    }
}

impl Error for CategoryParseError {}
