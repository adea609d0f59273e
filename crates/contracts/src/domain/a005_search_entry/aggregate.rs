use serde::{Deserialize, Serialize};

use crate::enums::SearchEntryKind;
use crate::shared::search::Searchable;

/// Запись быстрого поиска в шапке админки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSearchEntry {
    pub kind: SearchEntryKind,
    pub name: String,
    pub href: String,
}

impl AdminSearchEntry {
    pub fn new(kind: SearchEntryKind, name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            href: href.into(),
        }
    }
}

impl Searchable for AdminSearchEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter;

    #[test]
    fn test_matches_by_name_only() {
        let entries = vec![
            AdminSearchEntry::new(SearchEntryKind::Booking, "Booking BK-001", "/admin/bookings/1"),
            AdminSearchEntry::new(SearchEntryKind::Customer, "Ahmed Hassan", "/admin/customers/1"),
        ];
        assert!(filter(&entries, "customers").is_empty());
        assert_eq!(filter(&entries, "bk-0")[0].kind, SearchEntryKind::Booking);
        assert_eq!(filter(&entries, "").len(), 2);
    }
}
