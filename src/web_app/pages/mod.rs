// web_app/pages/mod.rs - Page components module
//
// - DirectoryPage: search, filter and review (route "/")
// - BusinessPage: standalone detail view (route "/business/:id")

pub mod business;
pub mod directory;

pub use business::BusinessPage;
pub use directory::DirectoryPage;
