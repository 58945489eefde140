// common/mod.rs - Shared test helpers
//
// Builders for the states and drafts most tests start from. Each test
// binary only uses part of this module.
#![allow(dead_code)]

use business_directory::fixtures;
use business_directory::web_app::model::{Business, Category, DirectoryState, ReviewDraft};

/// Directory state over the bundled sample set
pub fn sample_state() -> DirectoryState {
    DirectoryState::new(fixtures::sample_businesses())
}

/// A business with the given name and category and neutral other fields
pub fn business(id: u32, name: &str, category: Category) -> Business {
    Business {
        id,
        name: name.to_string(),
        category,
        location: "Somewhere".to_string(),
        rating: 3.0,
        review_count: 1,
        image: format!("https://example.com/{id}.jpg"),
        description: format!("{name} description"),
        address: format!("{id} Test St"),
    }
}

/// Draft that passes validation
pub fn valid_draft(rating: u8, name: &str, text: &str) -> ReviewDraft {
    ReviewDraft {
        overall_rating: rating,
        reviewer_name: name.to_string(),
        review_text: text.to_string(),
        ..ReviewDraft::default()
    }
}

pub fn ids(businesses: &[Business]) -> Vec<u32> {
    businesses.iter().map(|b| b.id).collect()
}
