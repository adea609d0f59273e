pub mod a001_destination;
pub mod a002_tour_package;
pub mod a003_booking;
pub mod a004_notification;
pub mod a005_search_entry;
