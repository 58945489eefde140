// web_app/api/mod.rs - Server-side logic
//
// Only the review sink lives here; the directory itself needs no server
// state.

pub mod reviews;
