use serde::{Deserialize, Serialize};

/// Тип уведомления в шапке админки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Booking,
    Inquiry,
    Alert,
    Success,
}

impl NotificationKind {
    /// Имя иконки для `icon()` во фронтенде
    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Booking => "calendar",
            NotificationKind::Inquiry => "message-square",
            NotificationKind::Alert => "alert-circle",
            NotificationKind::Success => "check-circle",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            NotificationKind::Booking => "text-blue",
            NotificationKind::Inquiry => "text-green",
            NotificationKind::Alert => "text-orange",
            NotificationKind::Success => "text-green",
        }
    }
}
