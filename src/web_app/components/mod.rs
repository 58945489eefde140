// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, StarRating, inputs)
// - search.rs: SearchBar, category buttons, result counter
// - business.rs: BusinessCard, BusinessGrid, BusinessDetail
// - review.rs: StarPicker, ReviewForm

pub mod common;
pub mod search;
pub mod business;
pub mod review;

pub use common::*;
pub use search::*;
pub use business::*;
pub use review::*;
