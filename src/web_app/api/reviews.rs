// web_app/api/reviews.rs - Review sink
//
// Submitted reviews are not stored. The sink validates the payload again,
// emits it as a structured log event and counts what it has seen since the
// server started.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use crate::web_app::model::{Review, ReviewError};

static REVIEW_LOG: OnceLock<ReviewLog> = OnceLock::new();

/// Shared handle to the review sink
#[derive(Clone, Debug, Default)]
pub struct ReviewLog {
    received: Arc<AtomicU64>,
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reviews accepted so far
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    /// Validate and log one review. Returns its sequence number.
    pub fn record(&self, review: &Review) -> Result<u64, ReviewError> {
        if let Err(e) = review.validate() {
            tracing::warn!(
                business_id = review.business_id,
                "Rejected review payload: {}",
                e
            );
            return Err(e);
        }

        let seq = self.received.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            seq,
            business_id = review.business_id,
            business_name = %review.business_name,
            rating = review.rating,
            quality = review.quality_rating,
            service = review.service_rating,
            value = review.value_rating,
            reviewer = %review.reviewer_name,
            chars = review.review_text.chars().count(),
            date = %review.date.to_rfc3339(),
            "Review received"
        );
        Ok(seq)
    }
}

/// Initialize the global review sink
pub fn init_review_log(log: ReviewLog) {
    if REVIEW_LOG.set(log).is_err() {
        tracing::warn!("Review log already initialized");
    } else {
        tracing::info!("Review log initialized");
    }
}

/// The global review sink, created on first use if the server never set one
pub fn review_log() -> ReviewLog {
    REVIEW_LOG.get_or_init(ReviewLog::new).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn review() -> Review {
        Review {
            business_id: 3,
            business_name: "Bloom & Blossom".to_string(),
            rating: 5,
            quality_rating: 4,
            service_rating: 0,
            value_rating: 3,
            review_text: "Gorgeous peonies.".to_string(),
            reviewer_name: "Priya".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_record_counts_accepted_reviews() {
        let log = ReviewLog::new();
        assert_eq!(log.record(&review()), Ok(1));
        assert_eq!(log.record(&review()), Ok(2));
        assert_eq!(log.received(), 2);
    }

    #[test]
    fn test_record_rejects_invalid_payload() {
        let log = ReviewLog::new();
        let mut bad = review();
        bad.rating = 0;
        assert_eq!(log.record(&bad), Err(ReviewError::MissingRating));
        assert_eq!(log.received(), 0);
    }

    #[test]
    fn test_clones_share_counter() {
        let log = ReviewLog::new();
        let other = log.clone();
        other.record(&review()).unwrap();
        assert_eq!(log.received(), 1);
    }
}
