// tests/fixtures_tests.rs - Bundled sample data

use std::collections::HashSet;

use business_directory::fixtures;
use business_directory::web_app::model::{Category, CategoryFilter};

#[test]
fn test_sample_set_shape() {
    let businesses = fixtures::sample_businesses();
    assert_eq!(businesses.len(), 5);

    let restaurants = businesses.iter().filter(|b| b.category == Category::Restaurant).count();
    assert_eq!(restaurants, 2);

    let ids: HashSet<u32> = businesses.iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), businesses.len(), "Ids must be unique");
}

#[test]
fn test_sample_ratings_in_range() {
    for business in fixtures::sample_businesses() {
        assert!(
            (0.0..=5.0).contains(&business.rating),
            "{} has rating {}",
            business.name,
            business.rating
        );
    }
}

#[test]
fn test_every_category_is_represented() {
    let options = CategoryFilter::options(&fixtures::sample_businesses());
    assert_eq!(options[0], CategoryFilter::All);
    for category in Category::ALL {
        assert!(options.contains(&CategoryFilter::Only(category)));
    }
}

#[test]
fn test_find_business() {
    let found = fixtures::find_business(3).expect("id 3 exists");
    assert_eq!(found.name, "Bloom & Blossom");
    assert!(fixtures::find_business(0).is_none());
    assert!(fixtures::find_business(99).is_none());
}

#[test]
fn test_detail_fixtures() {
    let hours = fixtures::business_hours();
    assert_eq!(hours.len(), 7);
    assert_eq!(hours[0].day, "Monday");
    assert!(hours[6].is_closed(), "Sunday is closed");
    assert_eq!(hours.iter().filter(|h| h.is_closed()).count(), 1);

    let reviews = fixtures::sample_reviews();
    assert_eq!(reviews.len(), 3);
    assert!(reviews.iter().all(|r| (1..=5).contains(&r.rating)));

    assert_eq!(fixtures::contact_info().phone, "(555) 123-4567");
    assert_eq!(fixtures::popular_services().len(), 4);
}
