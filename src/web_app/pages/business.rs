// web_app/pages/business.rs - Standalone business detail page
//
// Shows the detail panel for /business/:id outside the directory page.
// Closing it navigates back to the directory.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::fixtures;
use crate::web_app::components::BusinessDetail;

/// Parse the `:id` route segment
pub fn parse_business_id(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|id| id.trim().parse::<u32>().ok())
}

#[component]
pub fn BusinessPage() -> impl IntoView {
    let params = use_params_map();
    let business = move || {
        let id = params.with(|p| parse_business_id(p.get("id").as_deref()));
        id.and_then(fixtures::find_business)
    };

    let navigate = use_navigate();
    let on_close = Callback::new(move |()| {
        navigate("/", Default::default());
    });

    view! {
        <div class="min-h-screen bg-gray-50 py-8 px-4">
            {move || view! { <BusinessDetail business=business() on_close=on_close /> }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_business_id() {
        assert_eq!(parse_business_id(Some("3")), Some(3));
        assert_eq!(parse_business_id(Some(" 4 ")), Some(4));
        assert_eq!(parse_business_id(Some("abc")), None);
        assert_eq!(parse_business_id(Some("-1")), None);
        assert_eq!(parse_business_id(None), None);
    }
}
