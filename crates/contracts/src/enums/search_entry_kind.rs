use serde::{Deserialize, Serialize};

/// Вид записи в быстром поиске админки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEntryKind {
    Booking,
    Customer,
    Package,
    Destination,
}

impl SearchEntryKind {
    pub fn icon_name(&self) -> &'static str {
        match self {
            SearchEntryKind::Booking => "calendar",
            SearchEntryKind::Customer => "user",
            SearchEntryKind::Package | SearchEntryKind::Destination => "globe",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEntryKind::Booking => "Booking",
            SearchEntryKind::Customer => "Customer",
            SearchEntryKind::Package => "Package",
            SearchEntryKind::Destination => "Destination",
        }
    }
}
