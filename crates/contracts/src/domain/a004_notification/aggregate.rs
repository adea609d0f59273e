use serde::{Deserialize, Serialize};

use crate::enums::NotificationKind;

/// Уведомление в выпадающем списке шапки админки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Относительное время как подпись, например "15 minutes ago"
    pub time: String,
}

/// Количество непрочитанных уведомлений
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: u32, read: bool) -> Notification {
        Notification {
            id,
            kind: NotificationKind::Booking,
            title: format!("n{}", id),
            message: String::new(),
            read,
            time: "2 minutes ago".into(),
        }
    }

    #[test]
    fn test_unread_count() {
        let items = vec![
            notification(1, false),
            notification(2, false),
            notification(3, true),
            notification(4, true),
        ];
        assert_eq!(unread_count(&items), 2);
        assert_eq!(unread_count(&items[2..]), 0);
        assert_eq!(unread_count(&[]), 0);
    }
}
