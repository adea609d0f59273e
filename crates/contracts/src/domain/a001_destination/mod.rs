pub mod aggregate;

pub use aggregate::{Destination, DestinationOption, FeaturedDestination};
