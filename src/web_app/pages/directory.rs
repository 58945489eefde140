// web_app/pages/directory.rs - Directory page component
//
// The root view. All mutable state lives in one DirectoryState signal;
// child components report events through callbacks and the visible list
// is re-derived from the state on every change.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::SubmitReview;

/// Main directory page
///
/// Composes:
/// - Hero header with the search bar
/// - Category buttons and result counter
/// - Business grid (or empty state)
/// - Review modal when a card requested one
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let state = RwSignal::new(DirectoryState::default());
    let category_options = state.with_untracked(|s| s.category_options());

    let visible = Signal::derive(move || state.with(|s| s.visible_businesses()));
    let visible_count = Signal::derive(move || state.with(|s| s.visible_count()));
    let selected_category = Signal::derive(move || state.with(|s| s.selected_category()));

    // Only re-render the modal when it opens or closes, not on other state
    // changes, so the form keeps its draft.
    let modal = Memo::new(move |_| state.with(|s| s.modal().clone()));

    let submit_action = ServerAction::<SubmitReview>::new();

    Effect::new(move |_| {
        match submit_action.value().get() {
            Some(Ok(seq)) => tracing::debug!("Review sink accepted review #{}", seq),
            Some(Err(e)) => tracing::warn!("Review sink failed: {}", e),
            None => {}
        }
    });

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.search(&term));
    });

    let on_select_category = Callback::new(move |category: CategoryFilter| {
        state.update(|s| s.set_category(category));
    });

    let on_review = Callback::new(move |business: Business| {
        state.update(|s| s.open_review(business));
    });

    let on_close_review = Callback::new(move |()| {
        state.update(|s| s.close_review());
    });

    let on_submit_review = Callback::new(move |review: Review| {
        let mut forwarded = None;
        state.update(|s| forwarded = Some(s.submit_review(review)));
        if let Some(review) = forwarded {
            submit_action.dispatch(SubmitReview { review });
        }
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-orange-50">
            // Hero section
            <div class="bg-gradient-to-r from-blue-600 to-blue-800 text-white">
                <div class="container mx-auto px-4 py-16">
                    <div class="text-center mb-8">
                        <h1 class="text-5xl font-bold mb-4 animate-fade-in">
                            "Discover & Review Local Businesses"
                        </h1>
                        <p class="text-xl text-blue-100 mb-8 animate-fade-in">
                            "Find the best restaurants, shops, and services in your area"
                        </p>
                    </div>
                    <div class="max-w-2xl mx-auto">
                        <SearchBar on_search=on_search />
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-4 py-8">
                <div class="flex flex-wrap items-center justify-between gap-4 mb-8">
                    <CategoryButtons
                        options=category_options
                        selected=selected_category
                        on_select=on_select_category
                    />
                    <ResultsCount count=visible_count />
                </div>

                <BusinessGrid businesses=visible on_review=on_review />

                <CallToAction />
            </div>

            {move || modal.get().business().cloned().map(|business| view! {
                <ModalWrapper title="Write a Review" on_close=on_close_review>
                    <ReviewForm
                        business=business
                        on_submit=on_submit_review
                        on_cancel=on_close_review
                    />
                </ModalWrapper>
            })}
        </div>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg p-8 text-center">
            <div class="text-orange-500 text-5xl mb-4">"★"</div>
            <h2 class="text-2xl font-bold text-gray-800 mb-4">
                "Help Others Discover Great Businesses"
            </h2>
            <p class="text-gray-600 mb-6">
                "Share your experiences and help build a trusted community of reviews"
            </p>
            <Button class="px-8 py-3 text-lg">"Write Your First Review"</Button>
        </div>
    }
}
