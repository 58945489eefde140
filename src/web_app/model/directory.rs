// web_app/model/directory.rs - Root directory state
//
// DirectoryState is the single owned state object behind the directory page.
// The page keeps it in one signal and every handler goes through the methods
// below, so the filtering rules can be tested without a reactive runtime.

use serde::{Deserialize, Serialize};

use super::{Business, Category, Review};
use crate::fixtures;

/// Category filter selected in the button row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// "All" followed by every category present in `businesses`
    pub fn options(businesses: &[Business]) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        options.extend(
            Category::ALL
                .into_iter()
                .filter(|category| businesses.iter().any(|b| b.category == *category))
                .map(CategoryFilter::Only),
        );
        options
    }

    pub fn accepts(&self, business: &Business) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => business.category == *category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// What the modal layer currently shows
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    ReviewOpen(Business),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::ReviewOpen(_))
    }

    pub fn business(&self) -> Option<&Business> {
        match self {
            ModalState::Closed => None,
            ModalState::ReviewOpen(business) => Some(business),
        }
    }
}

/// Entries of `sample` whose name, description or location contain `term`.
///
/// An empty or whitespace-only term returns the whole sample set. The term
/// itself is matched verbatim (surrounding whitespace included).
pub fn search_businesses(sample: &[Business], term: &str) -> Vec<Business> {
    if term.trim().is_empty() {
        return sample.to_vec();
    }

    let needle = term.to_lowercase();
    sample
        .iter()
        .filter(|business| business.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Second, view-time pass over the working set
pub fn filter_by_category(businesses: &[Business], filter: CategoryFilter) -> Vec<Business> {
    businesses
        .iter()
        .filter(|business| filter.accepts(business))
        .cloned()
        .collect()
}

/// Everything the directory page owns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryState {
    /// Full sample set, never modified
    sample: Vec<Business>,
    /// Working set, replaced by every search
    businesses: Vec<Business>,
    selected_category: CategoryFilter,
    modal: ModalState,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(fixtures::sample_businesses())
    }
}

impl DirectoryState {
    pub fn new(sample: Vec<Business>) -> Self {
        Self {
            businesses: sample.clone(),
            sample,
            selected_category: CategoryFilter::All,
            modal: ModalState::Closed,
        }
    }

    pub fn sample(&self) -> &[Business] {
        &self.sample
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Buttons for the category row, derived from the sample set
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options(&self.sample)
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!("Category filter set to {}", category);
        self.selected_category = category;
    }

    /// Replace the working set with the sample entries matching `term`
    pub fn search(&mut self, term: &str) {
        self.businesses = search_businesses(&self.sample, term);
        tracing::debug!("Search '{}' matched {} businesses", term, self.businesses.len());
    }

    pub fn visible_businesses(&self) -> Vec<Business> {
        filter_by_category(&self.businesses, self.selected_category)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_businesses().len()
    }

    pub fn open_review(&mut self, business: Business) {
        self.modal = ModalState::ReviewOpen(business);
    }

    pub fn close_review(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Log the finalized review, close the modal and hand the review back
    /// so the caller can forward it to the review sink.
    pub fn submit_review(&mut self, review: Review) -> Review {
        tracing::info!(
            business_id = review.business_id,
            rating = review.rating,
            "Review submitted for {} by {}",
            review.business_name,
            review.reviewer_name
        );
        self.close_review();
        review
    }
}

/// "Showing N businesses" counter text
pub fn showing_label(count: usize) -> String {
    format!("Showing {} businesses", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_uses_sample_data() {
        let state = DirectoryState::default();
        assert_eq!(state.businesses().len(), state.sample().len());
        assert_eq!(state.selected_category(), CategoryFilter::All);
        assert_eq!(state.modal(), &ModalState::Closed);
    }

    #[test]
    fn test_category_filter_display() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::Only(Category::Shop).to_string(), "Shop");
    }

    #[test]
    fn test_category_options_start_with_all() {
        let state = DirectoryState::default();
        let options = state.category_options();
        assert_eq!(options.first(), Some(&CategoryFilter::All));
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_category_options_skip_absent_categories() {
        let only_shops: Vec<Business> = fixtures::sample_businesses()
            .into_iter()
            .filter(|b| b.category == Category::Shop)
            .collect();
        let options = CategoryFilter::options(&only_shops);
        assert_eq!(options, vec![CategoryFilter::All, CategoryFilter::Only(Category::Shop)]);
    }

    #[test]
    fn test_whitespace_search_resets() {
        let mut state = DirectoryState::default();
        state.search("pizza");
        assert_eq!(state.businesses().len(), 1);

        state.search("   ");
        assert_eq!(state.businesses().len(), state.sample().len());
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let mut state = DirectoryState::default();
        state.search("pizzeria");
        assert_eq!(state.businesses().len(), 1);

        // Nothing has "pizzeria" followed by a space
        state.search("pizzeria ");
        assert!(state.businesses().is_empty());
    }

    #[test]
    fn test_visible_count_matches_visible_list() {
        let mut state = DirectoryState::default();
        state.set_category(CategoryFilter::Only(Category::Service));
        assert_eq!(state.visible_count(), state.visible_businesses().len());
    }

    #[test]
    fn test_modal_state_accessors() {
        let business = fixtures::sample_businesses().remove(0);
        let modal = ModalState::ReviewOpen(business.clone());
        assert!(modal.is_open());
        assert_eq!(modal.business(), Some(&business));
        assert!(!ModalState::Closed.is_open());
        assert_eq!(ModalState::Closed.business(), None);
    }

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label(0), "Showing 0 businesses");
        assert_eq!(showing_label(5), "Showing 5 businesses");
    }
}
