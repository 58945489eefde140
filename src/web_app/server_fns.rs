// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// This file must be compiled for BOTH ssr and hydrate features.

use leptos::prelude::*;
use crate::web_app::model::*;

/// Hand a finalized review to the review sink
///
/// Returns the sink's sequence number for the review.
#[server(SubmitReview, "/api")]
pub async fn submit_review(review: Review) -> Result<u64, ServerFnError> {
    use crate::web_app::api::reviews::{review_log, ReviewLog};

    tracing::info!(
        "Submit request: business_id={}, rating={}",
        review.business_id,
        review.rating
    );

    // Prefer a sink provided through context (tests, custom hosts)
    let log = use_context::<ReviewLog>().unwrap_or_else(review_log);

    log.record(&review)
        .map_err(|e| ServerFnError::new(format!("Review rejected: {}", e)))
}
