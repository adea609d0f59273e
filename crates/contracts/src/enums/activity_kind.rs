use serde::{Deserialize, Serialize};

/// Тип события в ленте "Recent Activity"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Booking,
    Inquiry,
    Payment,
    Review,
    Update,
}

impl ActivityKind {
    /// Класс цветной точки слева от события
    pub fn dot_class(&self) -> &'static str {
        match self {
            ActivityKind::Booking => "activity-dot activity-dot--blue",
            ActivityKind::Inquiry => "activity-dot activity-dot--yellow",
            ActivityKind::Payment => "activity-dot activity-dot--green",
            ActivityKind::Review => "activity-dot activity-dot--purple",
            ActivityKind::Update => "activity-dot activity-dot--gray",
        }
    }
}
