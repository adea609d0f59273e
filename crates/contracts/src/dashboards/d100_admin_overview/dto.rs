use serde::{Deserialize, Serialize};

use crate::enums::{ActivityKind, AlertPriority};

/// Направление изменения показателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Имя иконки стрелки
    pub fn icon_name(&self) -> &'static str {
        match self {
            Trend::Up => "trending-up",
            Trend::Down => "trending-down",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "stat-card__change stat-card__change--up",
            Trend::Down => "stat-card__change stat-card__change--down",
        }
    }
}

/// Карточка показателя на обзоре админки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    /// Значение как подпись: "1,234", "$45,678"
    pub value: String,
    /// Изменение как подпись: "+12.5%"
    pub change: String,
    pub trend: Trend,
    pub icon: String,
}

impl DashboardStat {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        trend: Trend,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            trend,
            icon: icon.into(),
        }
    }
}

/// Кнопка быстрого действия; все действия пока открывают заглушку
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl QuickAction {
    pub const DIALOG_TITLE: &'static str = "Coming Soon";
    pub const DIALOG_MESSAGE: &'static str = "This feature is under development.";

    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub action: String,
    /// Относительное время: "2 minutes ago"
    pub time: String,
    pub kind: ActivityKind,
}

impl ActivityItem {
    pub fn new(action: impl Into<String>, time: impl Into<String>, kind: ActivityKind) -> Self {
        Self {
            action: action.into(),
            time: time.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertItem {
    pub title: String,
    pub message: String,
    pub priority: AlertPriority,
}

impl AlertItem {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        priority: AlertPriority,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            priority,
        }
    }
}

/// Сортировка уведомлений: сначала высокий приоритет, порядок внутри сохраняется
pub fn sort_alerts_by_priority(alerts: &mut [AlertItem]) {
    alerts.sort_by(|a, b| b.priority.cmp(&a.priority));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_presentation() {
        assert_eq!(Trend::Up.icon_name(), "trending-up");
        assert!(Trend::Down.css_class().ends_with("--down"));
    }

    #[test]
    fn test_sort_alerts_is_stable() {
        let mut alerts = vec![
            AlertItem::new("a", "", AlertPriority::Low),
            AlertItem::new("b", "", AlertPriority::High),
            AlertItem::new("c", "", AlertPriority::Medium),
            AlertItem::new("d", "", AlertPriority::High),
        ];
        sort_alerts_by_priority(&mut alerts);
        let titles: Vec<&str> = alerts.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "d", "c", "a"]);
    }
}
