//! Демо-данные обзора админки.

use contracts::dashboards::d100_admin_overview::{
    sort_alerts_by_priority, ActivityItem, AlertItem, DashboardStat, QuickAction, Trend,
};
use contracts::enums::{ActivityKind, AlertPriority};

pub fn dashboard_stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat::new("Total Bookings", "2,547", "+12.5%", Trend::Up, "calendar"),
        DashboardStat::new("Active Customers", "1,892", "+8.2%", Trend::Up, "users"),
        DashboardStat::new("Revenue (USD)", "$147,520", "+15.8%", Trend::Up, "dollar-sign"),
        DashboardStat::new("Destinations", "24", "+3 new", Trend::Up, "map-pin"),
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Add New Package", "Create a new tour package", "plus"),
        QuickAction::new("View Inquiries", "Check new customer inquiries", "eye"),
        QuickAction::new("Export Reports", "Download booking reports", "download"),
        QuickAction::new("Manage Destinations", "Add or edit destinations", "map-pin"),
    ]
}

pub fn recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem::new("New booking received", "2 minutes ago", ActivityKind::Booking),
        ActivityItem::new("Customer inquiry from website", "15 minutes ago", ActivityKind::Inquiry),
        ActivityItem::new("Payment confirmed for BK-001", "1 hour ago", ActivityKind::Payment),
        ActivityItem::new("New review submitted", "3 hours ago", ActivityKind::Review),
        ActivityItem::new("Package updated: Mogadishu Tour", "5 hours ago", ActivityKind::Update),
    ]
}

/// Оповещения, отсортированные по убыванию приоритета
pub fn alerts() -> Vec<AlertItem> {
    let mut items = vec![
        AlertItem::new("Payment pending", "3 bookings awaiting payment confirmation", AlertPriority::High),
        AlertItem::new("Low inventory", "Mogadishu tour slots running low", AlertPriority::Medium),
        AlertItem::new("New message", "2 unread customer messages", AlertPriority::Low),
        AlertItem::new("Review requested", "Customer feedback needed for recent trip", AlertPriority::Low),
    ];
    sort_alerts_by_priority(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_sizes() {
        assert_eq!(dashboard_stats().len(), 4);
        assert_eq!(quick_actions().len(), 4);
        assert_eq!(recent_activity().len(), 5);
        assert_eq!(alerts().len(), 4);
    }

    #[test]
    fn test_alerts_high_first() {
        let items = alerts();
        assert_eq!(items[0].priority, AlertPriority::High);
        assert_eq!(items[3].title, "Review requested");
    }
}
