// web_app/model/review.rs - Review draft and finalized review payload
//
// The form edits a ReviewDraft. Submitting validates the draft and turns it
// into a Review, which is the payload handed to the directory page and then
// to the review sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Business, MAX_STARS};

/// Soft limit shown by the review text counter; text is never truncated
pub const REVIEW_TEXT_SOFT_LIMIT: usize = 500;

/// Blocking message shown when a submit is rejected
pub const REVIEW_REJECTED_MESSAGE: &str = "Please fill in all required fields and provide a rating.";

/// Reasons a review cannot be submitted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("an overall rating of at least one star is required")]
    MissingRating,

    #[error("reviewer name is required")]
    MissingReviewerName,

    #[error("review text is required")]
    MissingReviewText,

    #[error("{field} rating {value} is outside 0-5")]
    RatingOutOfRange { field: RatingField, value: u8 },
}

impl ReviewError {
    /// Text shown to the user; every rejection uses the same message
    pub fn user_message(&self) -> &'static str {
        REVIEW_REJECTED_MESSAGE
    }
}

/// The four star pickers on the review form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingField {
    Overall,
    Quality,
    Service,
    Value,
}

impl RatingField {
    /// Optional sub-ratings, in display order
    pub const SUB_RATINGS: [RatingField; 3] = [RatingField::Quality, RatingField::Service, RatingField::Value];
}

impl std::fmt::Display for RatingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingField::Overall => write!(f, "Overall"),
            RatingField::Quality => write!(f, "Quality"),
            RatingField::Service => write!(f, "Service"),
            RatingField::Value => write!(f, "Value"),
        }
    }
}

/// In-progress review owned by the form. Ratings use 0 for "unset".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub overall_rating: u8,
    pub quality_rating: u8,
    pub service_rating: u8,
    pub value_rating: u8,
    pub reviewer_name: String,
    pub review_text: String,
}

impl ReviewDraft {
    pub fn rating(&self, field: RatingField) -> u8 {
        match field {
            RatingField::Overall => self.overall_rating,
            RatingField::Quality => self.quality_rating,
            RatingField::Service => self.service_rating,
            RatingField::Value => self.value_rating,
        }
    }

    /// Set a star rating, clamped to 0-5
    pub fn set_rating(&mut self, field: RatingField, stars: u8) {
        let stars = stars.min(MAX_STARS);
        match field {
            RatingField::Overall => self.overall_rating = stars,
            RatingField::Quality => self.quality_rating = stars,
            RatingField::Service => self.service_rating = stars,
            RatingField::Value => self.value_rating = stars,
        }
    }

    /// Characters typed so far, for the `N/500 characters` counter
    pub fn text_length(&self) -> usize {
        self.review_text.chars().count()
    }

    pub fn over_soft_limit(&self) -> bool {
        self.text_length() > REVIEW_TEXT_SOFT_LIMIT
    }

    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.overall_rating == 0 {
            return Err(ReviewError::MissingRating);
        }
        if self.reviewer_name.trim().is_empty() {
            return Err(ReviewError::MissingReviewerName);
        }
        if self.review_text.trim().is_empty() {
            return Err(ReviewError::MissingReviewText);
        }
        Ok(())
    }

    /// Validate and build the payload for `business`, stamped with `date`.
    ///
    /// The draft is left untouched either way, so a rejected submit can be
    /// corrected and retried.
    pub fn finalize(&self, business: &Business, date: DateTime<Utc>) -> Result<Review, ReviewError> {
        self.validate()?;

        Ok(Review {
            business_id: business.id,
            business_name: business.name.clone(),
            rating: self.overall_rating,
            quality_rating: self.quality_rating,
            service_rating: self.service_rating,
            value_rating: self.value_rating,
            review_text: self.review_text.clone(),
            reviewer_name: self.reviewer_name.clone(),
            date,
        })
    }
}

/// Finalized review handed to the directory page and the review sink
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub business_id: u32,
    pub business_name: String,
    pub rating: u8,
    pub quality_rating: u8,
    pub service_rating: u8,
    pub value_rating: u8,
    pub review_text: String,
    pub reviewer_name: String,
    pub date: DateTime<Utc>,
}

impl Review {
    /// Re-check a payload that arrived from outside the form
    pub fn validate(&self) -> Result<(), ReviewError> {
        let ratings = [
            (RatingField::Overall, self.rating),
            (RatingField::Quality, self.quality_rating),
            (RatingField::Service, self.service_rating),
            (RatingField::Value, self.value_rating),
        ];
        if let Some((field, value)) = ratings.into_iter().find(|(_, value)| *value > MAX_STARS) {
            return Err(ReviewError::RatingOutOfRange { field, value });
        }

        ReviewDraft {
            overall_rating: self.rating,
            quality_rating: self.quality_rating,
            service_rating: self.service_rating,
            value_rating: self.value_rating,
            reviewer_name: self.reviewer_name.clone(),
            review_text: self.review_text.clone(),
        }
        .validate()
    }
}

/// What the form hands back to its parent when it exits
#[derive(Clone, Debug, PartialEq)]
pub enum FormOutcome {
    Submitted(Review),
    Cancelled,
}

impl FormOutcome {
    pub fn review(&self) -> Option<&Review> {
        match self {
            FormOutcome::Submitted(review) => Some(review),
            FormOutcome::Cancelled => None,
        }
    }
}

/// Form state machine: Editing until a valid submit or a cancel
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ReviewFormState {
    Editing {
        draft: ReviewDraft,
        error: Option<ReviewError>,
    },
    #[default]
    Closed,
}

impl ReviewFormState {
    pub fn new() -> Self {
        ReviewFormState::Editing {
            draft: ReviewDraft::default(),
            error: None,
        }
    }

    pub fn draft(&self) -> Option<&ReviewDraft> {
        match self {
            ReviewFormState::Editing { draft, .. } => Some(draft),
            ReviewFormState::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&ReviewError> {
        match self {
            ReviewFormState::Editing { error, .. } => error.as_ref(),
            ReviewFormState::Closed => None,
        }
    }

    /// Apply an edit to the draft; no-op once the form has exited
    pub fn edit(&mut self, f: impl FnOnce(&mut ReviewDraft)) {
        if let ReviewFormState::Editing { draft, .. } = self {
            f(draft);
        }
    }

    /// Try to submit. A rejection keeps the form in Editing with the draft
    /// unchanged and returns None.
    pub fn submit(&mut self, business: &Business, date: DateTime<Utc>) -> Option<FormOutcome> {
        let result = match self {
            ReviewFormState::Editing { draft, .. } => draft.finalize(business, date),
            ReviewFormState::Closed => return None,
        };

        match result {
            Ok(review) => {
                *self = ReviewFormState::Closed;
                Some(FormOutcome::Submitted(review))
            }
            Err(e) => {
                tracing::warn!("Review for {} rejected: {}", business.name, e);
                if let ReviewFormState::Editing { error, .. } = self {
                    *error = Some(e);
                }
                None
            }
        }
    }

    pub fn cancel(&mut self) -> FormOutcome {
        *self = ReviewFormState::Closed;
        FormOutcome::Cancelled
    }
}
