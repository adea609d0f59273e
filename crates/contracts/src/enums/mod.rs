pub mod activity_kind;
pub mod alert_priority;
pub mod booking_status;
pub mod notification_kind;
pub mod search_entry_kind;

pub use activity_kind::ActivityKind;
pub use alert_priority::AlertPriority;
pub use booking_status::{classify_status, status_label, BookingStatus, StatusBadgeStyle};
pub use notification_kind::NotificationKind;
pub use search_entry_kind::SearchEntryKind;
