// web_app/components/business.rs - Business display components
//
// - BusinessCard: grid card with the "Write Review" affordance
// - BusinessGrid: grid of cards with the empty state
// - BusinessDetail: tabbed, read-only detail panel

use leptos::prelude::*;

use super::common::{Badge, SecondaryButton, StarRating};
use crate::fixtures;
use crate::web_app::model::{Business, DetailTab, OpeningHours, SampleReview};

/// Business card for the directory grid
///
/// The only event is "review requested"; the parent already knows which
/// business the card shows.
#[component]
pub fn BusinessCard(
    business: Business,
    on_review: Callback<()>,
) -> impl IntoView {
    let details_href = details_path(business.id);

    view! {
        <div class="bg-white rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition-all duration-300 flex flex-col">
            <div class="relative">
                <img
                    src=business.image.clone()
                    alt=business.name.clone()
                    class="w-full h-48 object-cover"
                />
                <div class="absolute top-2 right-2">
                    <Badge variant="blue">{business.category.to_string()}</Badge>
                </div>
            </div>

            <div class="p-6 flex flex-col flex-1">
                <h3 class="text-xl font-bold text-gray-800 mb-3 line-clamp-1">
                    {business.name.clone()}
                </h3>

                <div class="flex items-center gap-2 mb-3">
                    <StarRating rating=business.rating />
                    <span class="text-gray-500">{review_count_label(business.review_count)}</span>
                </div>

                <div class="flex items-center gap-2 mb-4 text-gray-600">
                    <span>"📍"</span>
                    <span class="text-sm">{business.address.clone()}</span>
                </div>

                <p class="text-gray-600 text-sm mb-4 line-clamp-2 flex-1">
                    {business.description.clone()}
                </p>

                <div class="flex gap-2">
                    <a
                        href=details_href
                        class="flex-1 text-center px-3 py-1.5 text-sm bg-white text-gray-700 rounded-lg \
                               border border-gray-300 hover:bg-gray-50 transition-colors font-medium"
                    >
                        "View Details"
                    </a>
                    <button
                        type="button"
                        class="flex-1 px-3 py-1.5 text-sm bg-orange-500 hover:bg-orange-600 text-white \
                               rounded-lg font-medium transition-colors"
                        on:click=move |_| on_review.run(())
                    >
                        "💬 Write Review"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// "(128 reviews)"
pub fn review_count_label(count: u32) -> String {
    format!("({} reviews)", count)
}

/// Route of the standalone detail page for a business
pub fn details_path(id: u32) -> String {
    format!("/business/{}", id)
}

/// Grid of business cards
///
/// Shows an explicit empty state when nothing is visible.
#[component]
pub fn BusinessGrid(
    #[prop(into)]
    businesses: Signal<Vec<Business>>,
    /// Called with the business whose card requested a review
    on_review: Callback<Business>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !businesses.with(|b| b.is_empty())
            fallback=|| view! { <EmptyState /> }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-12">
                <For
                    each=move || businesses.get()
                    key=|b: &Business| b.id
                    children=move |business| {
                        let requested = business.clone();
                        view! {
                            <div class="animate-fade-in">
                                <BusinessCard
                                    business=business
                                    on_review=Callback::new(move |()| on_review.run(requested.clone()))
                                />
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

/// Empty-state panel for a search or filter with no matches
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-gray-400 text-5xl mb-4">"📍"</div>
            <h3 class="text-xl font-medium text-gray-600 mb-2">"No businesses found"</h3>
            <p class="text-gray-500">"Try adjusting your search or filter criteria"</p>
        </div>
    }
}

/// Full business detail panel
///
/// Renders nothing when `business` is None. Apart from the header, the
/// content is the same for every business.
#[component]
pub fn BusinessDetail(
    business: Option<Business>,
    on_close: Callback<()>,
) -> impl IntoView {
    let tab = RwSignal::new(DetailTab::default());

    business.map(|business| {
        let address = business.address.clone();
        view! {
            <div class="bg-white rounded-lg max-w-4xl w-full mx-auto shadow-xl overflow-hidden">
                <div class="relative">
                    <img
                        src=business.image.clone()
                        alt=business.name.clone()
                        class="w-full h-64 object-cover"
                    />
                    <button
                        type="button"
                        class="absolute top-4 right-4 bg-white/90 hover:bg-white rounded-full p-2 transition-all text-gray-600"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    <div class="absolute bottom-4 left-4">
                        <Badge variant="blue">{business.category.to_string()}</Badge>
                    </div>
                </div>

                <div class="p-6">
                    <div class="mb-6">
                        <h1 class="text-3xl font-bold text-gray-800 mb-2">{business.name.clone()}</h1>
                        <div class="flex items-center gap-2 mb-4">
                            <StarRating rating=business.rating />
                            <span class="text-gray-500">{review_count_label(business.review_count)}</span>
                        </div>
                        <div class="flex items-center gap-2 mb-4 text-gray-600">
                            <span>"📍"</span>
                            <span>{business.address.clone()}</span>
                        </div>
                        <p class="text-gray-600 text-lg leading-relaxed">{business.description.clone()}</p>
                    </div>

                    <DetailTabs tab=tab />

                    <div class="mt-6">
                        {move || match tab.get() {
                            DetailTab::Overview => view! { <OverviewTab /> }.into_any(),
                            DetailTab::Reviews => view! { <ReviewsTab reviews=fixtures::sample_reviews() /> }.into_any(),
                            DetailTab::HoursContact => view! {
                                <HoursContactTab hours=fixtures::business_hours() address=address.clone() />
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        }
    })
}

#[component]
fn DetailTabs(tab: RwSignal<DetailTab>) -> impl IntoView {
    view! {
        <div class="grid w-full grid-cols-3 bg-gray-100 rounded-lg p-1">
            {DetailTab::ALL.into_iter().map(|value| view! {
                <button
                    type="button"
                    class=move || tab_class(tab.get() == value)
                    on:click=move |_| tab.set(value)
                >
                    {value.to_string()}
                </button>
            }).collect_view()}
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "py-1.5 text-sm font-medium rounded-md bg-white text-gray-900 shadow-sm"
    } else {
        "py-1.5 text-sm font-medium rounded-md text-gray-500 hover:text-gray-700"
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 shadow-sm">
            <div class="px-6 pt-6 pb-2">
                <h3 class="text-lg font-semibold text-gray-800">{title}</h3>
            </div>
            <div class="px-6 pb-6">{children()}</div>
        </div>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <Card title="About This Business">
                <p class="text-gray-600 mb-4">
                    "We are committed to providing exceptional service and quality products to our customers. \
                     Our experienced team ensures that every interaction exceeds expectations."
                </p>
                <div class="space-y-2 text-sm text-gray-600">
                    <div>"📅 Established in 2018"</div>
                    <Badge variant="outline">"Locally Owned"</Badge>
                </div>
            </Card>

            <Card title="Popular Services">
                <div class="grid grid-cols-2 gap-2">
                    {fixtures::popular_services().into_iter().map(|service| view! {
                        <Badge variant="secondary" class="text-center py-2">{service}</Badge>
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn ReviewsTab(reviews: Vec<SampleReview>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-xl font-semibold">"Customer Reviews"</h3>
                <SecondaryButton class="text-sm">"Write a Review"</SecondaryButton>
            </div>

            {reviews.into_iter().map(|review| view! {
                <div class="rounded-lg border border-gray-200 shadow-sm p-4">
                    <h4 class="font-medium text-gray-800">{review.author}</h4>
                    <div class="flex items-center gap-2 mt-1 mb-3">
                        <StarRating rating=f64::from(review.rating) show_value=false />
                        <span class="text-sm text-gray-500">{review.date}</span>
                    </div>
                    <p class="text-gray-600">{review.text}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn HoursContactTab(hours: Vec<OpeningHours>, address: String) -> impl IntoView {
    let contact = fixtures::contact_info();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <Card title="🕒 Business Hours">
                <div class="space-y-2">
                    {hours.into_iter().map(|schedule| {
                        let class = hours_class(&schedule);
                        view! {
                            <div class="flex justify-between items-center py-1">
                                <span class="font-medium text-gray-700">{schedule.day}</span>
                                <span class=class>{schedule.hours}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Card>

            <Card title="Contact Information">
                <div class="space-y-4">
                    <ContactLine icon="📞" label="Phone" value=contact.phone />
                    <ContactLine icon="🌐" label="Website" value=contact.website />
                    <ContactLine icon="📍" label="Address" value=address />
                </div>
            </Card>
        </div>
    }
}

fn hours_class(schedule: &OpeningHours) -> &'static str {
    if schedule.is_closed() {
        "text-sm text-red-500"
    } else {
        "text-sm text-gray-600"
    }
}

#[component]
fn ContactLine(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <span class="text-gray-500">{icon}</span>
            <div>
                <p class="font-medium text-gray-700">{label}</p>
                <p class="text-sm text-gray-600">{value}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_count_label() {
        assert_eq!(review_count_label(0), "(0 reviews)");
        assert_eq!(review_count_label(128), "(128 reviews)");
    }

    #[test]
    fn test_details_path() {
        assert_eq!(details_path(3), "/business/3");
    }

    #[test]
    fn test_hours_class_highlights_closed() {
        let closed = OpeningHours { day: "Sunday".into(), hours: "Closed".into() };
        let open = OpeningHours { day: "Friday".into(), hours: "9:00 AM - 8:00 PM".into() };
        assert!(hours_class(&closed).contains("text-red-500"));
        assert!(hours_class(&open).contains("text-gray-600"));
    }

    #[test]
    fn test_tab_class() {
        assert!(tab_class(true).contains("bg-white"));
        assert!(!tab_class(false).contains("bg-white"));
    }
}
