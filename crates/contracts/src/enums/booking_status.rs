use serde::{Deserialize, Serialize};

/// Статус бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    /// Код статуса (как в исходных данных)
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Confirmed,
            BookingStatus::Pending,
            BookingStatus::Cancelled,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "confirmed" => Some(BookingStatus::Confirmed),
            "pending" => Some(BookingStatus::Pending),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn badge_style(&self) -> StatusBadgeStyle {
        classify_status(self.code())
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Status badge
// ============================================================================

/// Стиль бейджа статуса в таблице бронирований
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadgeStyle {
    Confirmed,
    Pending,
    Cancelled,
}

impl StatusBadgeStyle {
    /// Вариант общего компонента Badge
    pub fn variant(&self) -> &'static str {
        match self {
            StatusBadgeStyle::Confirmed => "success",
            StatusBadgeStyle::Pending => "warning",
            StatusBadgeStyle::Cancelled => "error",
        }
    }

    /// CSS-класс бейджа
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadgeStyle::Confirmed => "badge badge--status badge--status-confirmed",
            StatusBadgeStyle::Pending => "badge badge--status badge--status-pending",
            StatusBadgeStyle::Cancelled => "badge badge--status badge--status-cancelled",
        }
    }
}

/// Стиль бейджа по строковому статусу.
///
/// Неизвестный статус получает стиль "pending": ячейка статуса никогда
/// не остаётся без оформления.
pub fn classify_status(status: &str) -> StatusBadgeStyle {
    match BookingStatus::from_code(status) {
        Some(BookingStatus::Confirmed) => StatusBadgeStyle::Confirmed,
        Some(BookingStatus::Cancelled) => StatusBadgeStyle::Cancelled,
        Some(BookingStatus::Pending) | None => StatusBadgeStyle::Pending,
    }
}

/// Подпись бейджа: статус с заглавной первой буквой
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(classify_status("confirmed"), StatusBadgeStyle::Confirmed);
        assert_eq!(classify_status("pending"), StatusBadgeStyle::Pending);
        assert_eq!(classify_status("cancelled"), StatusBadgeStyle::Cancelled);
    }

    #[test]
    fn test_unknown_status_falls_back_to_pending() {
        assert_eq!(classify_status("unknown"), classify_status("pending"));
        assert_eq!(classify_status(""), StatusBadgeStyle::Pending);
        // регистр имеет значение: "Confirmed" не является кодом
        assert_eq!(classify_status("Confirmed"), StatusBadgeStyle::Pending);
    }

    #[test]
    fn test_enum_delegates_to_classifier() {
        for status in BookingStatus::all() {
            assert_eq!(status.badge_style(), classify_status(status.code()));
        }
        assert_eq!(BookingStatus::Confirmed.badge_style().variant(), "success");
        assert_eq!(BookingStatus::Cancelled.badge_style().variant(), "error");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("confirmed"), "Confirmed");
        assert_eq!(status_label("unknown"), "Unknown");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let parsed: BookingStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, BookingStatus::Pending);
    }
}
