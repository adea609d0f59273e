pub mod dto;

pub use dto::{sort_alerts_by_priority, ActivityItem, AlertItem, DashboardStat, QuickAction, Trend};
