pub mod home;
pub mod placeholder;

pub use home::HomePage;
pub use placeholder::{AdminSectionPage, PlaceholderPage};
