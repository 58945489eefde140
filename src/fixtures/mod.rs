// fixtures/mod.rs - Static sample data
//
// The directory has no data source: every page renders from the records
// defined here. They are plain functions returning owned values so the
// directory state and the tests can each take their own copy.
//
// - businesses.rs: the five directory entries
// - details.rs: hard-coded content of the business detail view

pub mod businesses;
pub mod details;

pub use businesses::sample_businesses;
pub use details::{business_hours, contact_info, popular_services, sample_reviews};

use crate::web_app::model::Business;

/// Look up a sample business by id
pub fn find_business(id: u32) -> Option<Business> {
    sample_businesses().into_iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_business() {
        assert_eq!(find_business(1).map(|b| b.name), Some("Mario's Pizzeria".to_string()));
        assert!(find_business(0).is_none());
        assert!(find_business(99).is_none());
    }
}
