pub mod aggregate;

pub use aggregate::{unread_count, Notification};
