// web_app/components/search.rs - Search-related UI components
//
// - SearchBar: query and location inputs plus the search button
// - CategoryButtons: "All" plus one button per category
// - ResultsCount: the "Showing N businesses" counter

use leptos::prelude::*;

use super::common::TextInput;
use crate::web_app::model::{showing_label, CategoryFilter};

/// Search bar component
///
/// Keeps the typed text locally and only reports it upward on submit
/// (button click or Enter in either field). The location text is captured
/// but not used by any filter.
#[component]
pub fn SearchBar(
    /// Called with the raw query text
    on_search: Callback<String>,
) -> impl IntoView {
    let search_term = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(search_term.get_untracked());
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-lg shadow-lg p-4">
            <div class="flex flex-col md:flex-row gap-4">
                <div class="flex-1 relative">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">"🔍"</span>
                    <TextInput
                        value=search_term
                        on_input=Callback::new(move |text: String| search_term.set(text))
                        placeholder="Search for restaurants, shops, services..."
                        class="pl-10 h-12 text-lg text-gray-900"
                    />
                </div>

                <div class="flex-1 relative">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">"📍"</span>
                    <TextInput
                        value=location
                        on_input=Callback::new(move |text: String| location.set(text))
                        placeholder="Location..."
                        class="pl-10 h-12 text-lg text-gray-900"
                    />
                </div>

                <button
                    type="submit"
                    class="h-12 px-8 bg-orange-500 hover:bg-orange-600 text-white font-medium rounded-lg transition-colors"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}

/// Category filter row
#[component]
pub fn CategoryButtons(
    /// Buttons to show, in order
    options: Vec<CategoryFilter>,
    /// Currently selected category
    #[prop(into)]
    selected: Signal<CategoryFilter>,
    on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="text-gray-600">"▼"</span>
            <span class="font-medium text-gray-700">"Filter by category:"</span>
            <div class="flex gap-2">
                {options.into_iter().map(|option| {
                    view! {
                        <button
                            type="button"
                            class=move || category_button_class(selected.get() == option)
                            on:click=move |_| on_select.run(option)
                        >
                            {option.to_string()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

fn category_button_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1.5 rounded-md text-sm font-medium bg-gray-900 text-white shadow-sm transition-all"
    } else {
        "px-3 py-1.5 rounded-md text-sm font-medium bg-white border border-gray-300 \
         text-gray-700 hover:bg-gray-50 transition-all"
    }
}

/// Visible-results counter
#[component]
pub fn ResultsCount(
    #[prop(into)]
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="text-sm text-gray-600">
            {move || showing_label(count.get())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_button_class() {
        assert!(category_button_class(true).contains("bg-gray-900"));
        assert!(category_button_class(false).contains("border-gray-300"));
    }
}
