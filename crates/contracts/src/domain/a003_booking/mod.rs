pub mod aggregate;

pub use aggregate::{filter_bookings, Booking, StatusFilter, NO_BOOKINGS_MESSAGE};
