pub mod aggregate;

pub use aggregate::{FeaturedPackage, TourPackage};
