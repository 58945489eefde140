// tests/directory_state_tests.rs - Search, category filter and modal state
//
// Exercises DirectoryState the same way the directory page does: one
// method call per user event, then read the derived visible list.

mod common;

use business_directory::web_app::model::{
    filter_by_category, search_businesses, Category, CategoryFilter, DirectoryState, ModalState,
};
use common::{business, ids, sample_state, valid_draft};

#[test]
fn test_initial_state_shows_everything() {
    let state = sample_state();
    assert_eq!(state.visible_businesses().len(), 5);
    assert_eq!(state.visible_count(), 5);
    assert!(!state.modal().is_open());
}

#[test]
fn test_empty_search_restores_full_set() {
    let mut state = sample_state();
    state.search("salon");
    assert_eq!(ids(state.businesses()), vec![5]);

    state.search("");
    assert_eq!(state.businesses(), state.sample());
}

#[test]
fn test_empty_search_restores_after_no_match() {
    let mut state = sample_state();
    state.search("zzz-no-such-business");
    assert!(state.visible_businesses().is_empty());
    assert_eq!(state.visible_count(), 0);

    state.search("");
    assert_eq!(state.visible_count(), 5);
}

#[test]
fn test_search_unique_name_returns_singleton() {
    let mut state = sample_state();
    state.search("Bloom");
    let visible = state.visible_businesses();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Bloom & Blossom");
}

#[test]
fn test_search_is_case_insensitive() {
    let mut state = sample_state();
    state.search("TECHFIX");
    assert_eq!(ids(state.businesses()), vec![2]);

    state.search("downtown");
    assert_eq!(ids(state.businesses()), vec![1, 4]);
}

#[test]
fn test_search_matches_description_and_location() {
    let sample = sample_state().sample().to_vec();

    // "pastries" only occurs in The Coffee Corner's description
    assert_eq!(ids(&search_businesses(&sample, "pastries")), vec![4]);
    // "district" occurs in two locations
    assert_eq!(ids(&search_businesses(&sample, "District")), vec![2, 5]);
}

#[test]
fn test_search_does_not_match_address_or_category() {
    let sample = sample_state().sample().to_vec();
    // Street names only appear in addresses
    assert!(search_businesses(&sample, "Brew Ave").is_empty());
    // Category names are not searched either
    assert!(search_businesses(&sample, "Restaurant").is_empty());
}

#[test]
fn test_search_keeps_surrounding_whitespace() {
    let mut state = sample_state();
    state.search("pizzeria");
    assert_eq!(ids(state.businesses()), vec![1]);

    // The trailing space is part of the term
    state.search("pizzeria ");
    assert!(state.businesses().is_empty());
    assert_eq!(state.visible_count(), 0);
}

#[test]
fn test_visible_count_follows_category() {
    let mut state = sample_state();
    for filter in state.category_options() {
        state.set_category(filter);
        assert_eq!(state.visible_count(), state.visible_businesses().len(), "Filter {}", filter);
    }
}

#[test]
fn test_search_is_not_cumulative() {
    let mut state = sample_state();
    state.search("Downtown");
    assert_eq!(state.businesses().len(), 2);

    // Second search runs against the full sample, not the previous result
    state.search("flowers");
    assert_eq!(ids(state.businesses()), vec![3]);
}

#[test]
fn test_all_category_returns_working_set() {
    let mut state = sample_state();
    state.search("Downtown");
    state.set_category(CategoryFilter::All);
    assert_eq!(state.visible_businesses(), state.businesses().to_vec());
}

#[test]
fn test_category_filter_exact_match() {
    let mut state = sample_state();
    for category in Category::ALL {
        state.set_category(CategoryFilter::Only(category));
        let visible = state.visible_businesses();
        assert!(!visible.is_empty(), "{} should have entries", category);
        assert!(
            visible.iter().all(|b| b.category == category),
            "Only {} entries expected",
            category
        );
    }
}

#[test]
fn test_category_filter_survives_search() {
    let mut state = sample_state();
    state.set_category(CategoryFilter::Only(Category::Service));
    state.search("");
    assert_eq!(state.selected_category(), CategoryFilter::Only(Category::Service));
    assert_eq!(ids(&state.visible_businesses()), vec![2, 5]);
}

#[test]
fn test_restaurant_then_coffee_scenario() {
    let mut state = sample_state();
    let restaurants = state
        .sample()
        .iter()
        .filter(|b| b.category == Category::Restaurant)
        .count();
    assert_eq!(state.sample().len(), 5);
    assert_eq!(restaurants, 2);

    state.set_category(CategoryFilter::Only(Category::Restaurant));
    state.search("coffee");

    let visible = state.visible_businesses();
    assert_eq!(ids(&visible), vec![4]);
    assert_eq!(visible[0].name, "The Coffee Corner");
    assert_eq!(state.visible_count(), visible.len());
}

#[test]
fn test_filter_by_category_on_custom_set() {
    let set = vec![
        business(10, "Alpha", Category::Shop),
        business(11, "Beta", Category::Restaurant),
        business(12, "Gamma", Category::Shop),
    ];
    assert_eq!(ids(&filter_by_category(&set, CategoryFilter::Only(Category::Shop))), vec![10, 12]);
    assert!(filter_by_category(&set, CategoryFilter::Only(Category::Service)).is_empty());
    assert_eq!(filter_by_category(&set, CategoryFilter::All).len(), 3);
}

#[test]
fn test_open_and_close_review() {
    let mut state = sample_state();
    let business = state.sample()[2].clone();

    state.open_review(business.clone());
    assert_eq!(state.modal(), &ModalState::ReviewOpen(business));

    state.close_review();
    assert_eq!(state.modal(), &ModalState::Closed);
}

#[test]
fn test_submit_review_closes_modal() {
    let mut state = sample_state();
    let business = state.sample()[0].clone();
    state.open_review(business.clone());

    let review = valid_draft(5, "Luca", "Best margherita in town.")
        .finalize(&business, chrono::Utc::now())
        .unwrap();
    let forwarded = state.submit_review(review.clone());

    assert_eq!(forwarded, review);
    assert!(!state.modal().is_open());
    // Submitting does not touch the data
    assert_eq!(state.businesses().len(), 5);
}

#[test]
fn test_state_serializes() {
    let mut state = sample_state();
    state.set_category(CategoryFilter::Only(Category::Shop));
    let shop = state.sample()[2].clone();
    state.open_review(shop);

    let json = serde_json::to_string(&state).unwrap();
    let restored: DirectoryState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}
