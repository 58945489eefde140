// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used by the components, the server functions and the
// test suite. Nothing in here depends on Leptos, so the whole module
// compiles with default features.
//
// Structure:
// - mod.rs: Business, Category, star math, detail-view types
// - directory.rs: DirectoryState (root state) and the pure filter functions
// - review.rs: ReviewDraft, Review and submit validation

pub mod directory;
pub mod review;

pub use directory::*;
pub use review::*;

use serde::{Deserialize, Serialize};

/// Number of glyphs in every rendered star row
pub const MAX_STARS: u8 = 5;

/// Business category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Restaurant,
    Service,
    Shop,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Restaurant, Category::Service, Category::Shop];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Restaurant => write!(f, "Restaurant"),
            Category::Service => write!(f, "Service"),
            Category::Shop => write!(f, "Shop"),
        }
    }
}

/// A directory entry (immutable sample data)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub location: String,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub description: String,
    pub address: String,
}

impl Business {
    /// Case-insensitive substring match against name, description or location.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }

    /// "Category • Location" subtitle used by the review form header
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.category, self.location)
    }
}

/// Glyph counts for a read-only star row
///
/// A rating with any fractional part gets exactly one half star, and the
/// empty count is `5 - ceil(rating)`, so the three counts always add up to 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarCounts {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarCounts {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(MAX_STARS))
        };
        let full = rating.floor() as usize;
        let half = usize::from(rating.fract() != 0.0);
        let empty = usize::from(MAX_STARS) - rating.ceil() as usize;

        Self { full, half, empty }
    }

    pub fn total(&self) -> usize {
        self.full + self.half + self.empty
    }
}

/// Tabs of the business detail view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    #[default]
    Overview,
    Reviews,
    HoursContact,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Reviews, DetailTab::HoursContact];
}

impl std::fmt::Display for DetailTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailTab::Overview => write!(f, "Overview"),
            DetailTab::Reviews => write!(f, "Reviews"),
            DetailTab::HoursContact => write!(f, "Hours & Contact"),
        }
    }
}

/// A hard-coded review shown on the detail view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleReview {
    pub id: u32,
    pub author: String,
    pub rating: u8,
    pub date: String,
    pub text: String,
}

/// Opening hours for one weekday
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

impl OpeningHours {
    pub fn is_closed(&self) -> bool {
        self.hours == "Closed"
    }
}

/// Static contact block shown next to the opening hours
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub website: String,
}
