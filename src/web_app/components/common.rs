// web_app/components/common.rs - Reusable UI components
//
// Small, composable building blocks used by the directory, the detail view
// and the review form. They hold no state of their own: values come in as
// props and changes go out through callbacks.

use leptos::ev;
use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::StarCounts;

/// Error display component
///
/// Used for the blocking message of a rejected review.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-700 text-sm self-center">{error}</p>
        </div>
    }
}

/// Primary (orange) button
#[component]
pub fn Button(
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-orange-500 text-white rounded-lg hover:bg-orange-600 \
                      transition-colors font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Outline button for secondary actions
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                      transition-colors border border-gray-300 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Backdrop, header with close button and a scrollable body. Whether the
/// modal is shown at all is decided by the parent.
#[component]
pub fn ModalWrapper(
    children: Children,
    /// Callback when modal should close (Escape, backdrop, close button)
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    // Listen on the window: focus stays on whatever opened the modal
    let keydown = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        close_on_key(&ev.key(), || on_close.run(()));
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            role="dialog"
            aria-modal="true"
        >
            <div
                class="absolute inset-0 bg-black/50 transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-lg shadow-2xl w-full max-w-md max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100">
                    <h2 class="text-2xl font-bold text-gray-800">{title}</h2>
                    <button
                        type="button"
                        class="text-gray-400 hover:text-gray-600 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

pub(crate) fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

/// Run `close` if `key` dismisses the modal. Returns whether it did.
pub(crate) fn close_on_key(key: &str, close: impl FnOnce()) -> bool {
    let matched = is_close_key(key);
    if matched {
        close();
    }
    matched
}

/// Read-only star row
///
/// Full stars for the integer part, one half star for any fractional part,
/// empty stars for the rest.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Whether to show the numeric value after the stars
    #[prop(default = true)]
    show_value: bool,
) -> impl IntoView {
    let stars = StarCounts::from_rating(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {}", rating_label(rating))>
            {(0..stars.full).map(|_| view! {
                <span class="text-yellow-400">"★"</span>
            }).collect_view()}

            {(stars.half > 0).then(|| view! {
                <span class="relative inline-block">
                    <span class="text-gray-300">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </span>
            })}

            {(0..stars.empty).map(|_| view! {
                <span class="text-gray-300">"★"</span>
            }).collect_view()}

            {show_value.then(|| view! {
                <span class="ml-2 font-medium text-gray-700">{rating_label(rating)}</span>
            })}
        </div>
    }
}

/// Rating as shown next to the stars ("4.5", "4.0")
pub fn rating_label(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Badge component
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("{} {}", badge_class(variant), class)>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-600 text-white",
        "outline" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-white text-gray-700 border border-gray-300",
        "secondary" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Text input component
///
/// Controlled input: shows `value` and reports every keystroke.
#[component]
pub fn TextInput(
    /// The current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every input event
    on_input: Callback<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "")]
    id: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-orange-400 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type="text"
            id=id
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Multi-line text input
#[component]
pub fn TextArea(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "")]
    id: &'static str,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            placeholder=placeholder
            class="w-full min-h-[120px] px-4 py-2 border border-gray-300 rounded-lg resize-y \
                   focus:ring-2 focus:ring-orange-400 focus:border-transparent outline-none shadow-sm"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
    }
}
