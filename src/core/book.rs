//! # Book Summary
//!
//! The one display record the featured view knows about. Nothing here is
//! transactional: prices are shown, never computed with.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type BookId = u32;

/// Upper bound of the rating scale (inclusive).
pub const MAX_RATING: f32 = 5.0;
/// Number of stars drawn per card.
pub const STAR_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub rating: f32,
    pub review_count: u32,
    pub category: String,
    pub format: Format,
    #[serde(default)]
    pub cover_color: CoverColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl BookSummary {
    /// Number of filled stars: `floor(rating)` clamped to `[0, 5]`.
    pub fn filled_stars(&self) -> usize {
        if self.rating.is_nan() {
            return 0;
        }
        self.rating.floor().clamp(0.0, MAX_RATING) as usize
    }

    /// True when a strike-through original price should be shown.
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some()
    }
}

// ============================================================================
// Price
// ============================================================================

/// A currency amount in whole cents.
///
/// On the wire it is a plain decimal (`29.99`), matching how catalog files are
/// written by hand. Internally it is an integer so display never shows float noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("invalid price: {amount}"));
        }
        let cents = (amount * 100.0).round();
        if cents > f64::from(u32::MAX) {
            return Err(format!("price too large: {amount}"));
        }
        Ok(Self(cents as u32))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        f64::from(price.0) / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Format / CoverColor
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Paperback,
    #[serde(rename = "eBook")]
    EBook,
    Hardcover,
}

impl Format {
    pub fn label(self) -> &'static str {
        match self {
            Format::Paperback => "Paperback",
            Format::EBook => "eBook",
            Format::Hardcover => "Hardcover",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cosmetic cover color. The TUI maps each token to a terminal color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverColor {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Cyan,
    Magenta,
    #[default]
    Gray,
}
