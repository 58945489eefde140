// web_app/components/review.rs - Review form components
//
// - StarPicker: clickable 1-5 star input
// - ReviewForm: the draft review, validated on submit

use chrono::Utc;
use leptos::prelude::*;

use super::common::{Button, ErrorDisplay, SecondaryButton, TextArea, TextInput};
use crate::web_app::model::{
    Business, FormOutcome, RatingField, Review, ReviewDraft, ReviewFormState, MAX_STARS,
    REVIEW_TEXT_SOFT_LIMIT,
};

/// Clickable star row
///
/// With `hover_preview`, hovering shows the rating that a click would set.
#[component]
pub fn StarPicker(
    #[prop(into)]
    value: Signal<u8>,
    on_rate: Callback<u8>,
    #[prop(default = false)]
    hover_preview: bool,
) -> impl IntoView {
    let hover = RwSignal::new(0_u8);
    let shown = move || displayed_rating(value.get(), hover.get(), hover_preview);

    view! {
        <div class="flex gap-1" on:mouseleave=move |_| hover.set(0)>
            {(1..=MAX_STARS).map(|star| view! {
                <button
                    type="button"
                    class=move || star_class(star <= shown())
                    on:click=move |_| on_rate.run(star)
                    on:mouseenter=move |_| {
                        if hover_preview {
                            hover.set(star);
                        }
                    }
                    title=format!("{} star{}", star, if star == 1 { "" } else { "s" })
                >
                    "★"
                </button>
            }).collect_view()}
        </div>
    }
}

/// Stars lit by the picker: the hovered value while hovering, else the set value
fn displayed_rating(value: u8, hover: u8, hover_preview: bool) -> u8 {
    if hover_preview && hover > 0 {
        hover
    } else {
        value
    }
}

fn star_class(lit: bool) -> &'static str {
    if lit {
        "text-2xl text-yellow-400 cursor-pointer transition-colors duration-150"
    } else {
        "text-2xl text-gray-300 hover:text-yellow-400 cursor-pointer transition-colors duration-150"
    }
}

/// "37/500 characters"
pub fn character_counter(length: usize) -> String {
    format!("{}/{} characters", length, REVIEW_TEXT_SOFT_LIMIT)
}

/// Review form
///
/// Owns the draft for its whole lifetime. A rejected submit keeps the draft
/// and shows the blocking message; a valid one hands the finalized review
/// to `on_submit`. Cancelling never emits a review.
#[component]
pub fn ReviewForm(
    business: Business,
    on_submit: Callback<Review>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ReviewFormState::new());
    let draft = Memo::new(move |_| form.with(|f| f.draft().cloned().unwrap_or_default()));

    let rating_of = move |field: RatingField| Signal::derive(move || draft.with(|d| d.rating(field)));
    let rate = move |field: RatingField| {
        Callback::new(move |stars: u8| form.update(|f| f.edit(|d| d.set_rating(field, stars))))
    };

    let reviewer_name = Signal::derive(move || draft.with(|d| d.reviewer_name.clone()));
    let review_text = Signal::derive(move || draft.with(|d| d.review_text.clone()));
    let error = move || form.with(|f| f.error().map(|e| e.user_message().to_string()));

    let subtitle = business.subtitle();
    let name = business.name.clone();

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = None;
        form.update(|f| outcome = f.submit(&business, Utc::now()));
        if let Some(FormOutcome::Submitted(review)) = outcome {
            on_submit.run(review);
        }
    };

    let handle_cancel = Callback::new(move |()| {
        form.update(|f| {
            f.cancel();
        });
        on_cancel.run(());
    });

    view! {
        <div>
            <div class="mb-6 p-4 bg-gray-50 rounded-lg">
                <h3 class="font-semibold text-gray-800">{name}</h3>
                <p class="text-gray-600 text-sm">{subtitle}</p>
            </div>

            <form on:submit=handle_submit class="space-y-6">
                {move || error().map(|message| view! { <ErrorDisplay error=message /> })}

                <div>
                    <label class="text-base font-medium text-gray-700 mb-2 block">"Overall Rating *"</label>
                    <StarPicker
                        value=rating_of(RatingField::Overall)
                        on_rate=rate(RatingField::Overall)
                        hover_preview=true
                    />
                    <p class="text-sm text-gray-500 mt-1">"Click to rate"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {RatingField::SUB_RATINGS.into_iter().map(|field| view! {
                        <div>
                            <label class="text-sm font-medium text-gray-700 mb-2 block">{field.to_string()}</label>
                            <StarPicker value=rating_of(field) on_rate=rate(field) />
                        </div>
                    }).collect_view()}
                </div>

                <div>
                    <label for="reviewerName" class="text-base font-medium text-gray-700 mb-2 block">
                        "Your Name *"
                    </label>
                    <TextInput
                        id="reviewerName"
                        value=reviewer_name
                        on_input=Callback::new(move |text: String| {
                            form.update(|f| f.edit(|d| d.reviewer_name = text))
                        })
                        placeholder="Enter your name"
                    />
                </div>

                <div>
                    <label for="reviewText" class="text-base font-medium text-gray-700 mb-2 block">
                        "Your Review *"
                    </label>
                    <TextArea
                        id="reviewText"
                        value=review_text
                        on_input=Callback::new(move |text: String| {
                            form.update(|f| f.edit(|d| d.review_text = text))
                        })
                        placeholder="Share your experience with this business..."
                    />
                    <p class=move || counter_class(draft.with(ReviewDraft::over_soft_limit))>
                        {move || character_counter(draft.with(ReviewDraft::text_length))}
                    </p>
                </div>

                <div class="flex gap-3 pt-4">
                    <SecondaryButton on_click=handle_cancel class="flex-1">"Cancel"</SecondaryButton>
                    <Button button_type="submit" class="flex-1">"Submit Review"</Button>
                </div>
            </form>
        </div>
    }
}

fn counter_class(over_limit: bool) -> &'static str {
    if over_limit {
        "text-sm text-red-500 mt-1"
    } else {
        "text-sm text-gray-500 mt-1"
    }
}
