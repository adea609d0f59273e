use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::BookingStatus;
use crate::shared::search::{FilteredView, Searchable};

/// Текст пустой таблицы бронирований
pub const NO_BOOKINGS_MESSAGE: &str = "No bookings found matching your criteria.";

// ============================================================================
// Aggregate
// ============================================================================

/// Бронирование тура (демо-данные дашборда)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Например "BK-001"
    pub id: String,
    pub customer: String,
    pub email: String,
    pub destination: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
    /// Сумма как подпись, например "$2,300"
    pub amount: String,
    pub guests: u32,
}

impl Searchable for Booking {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.customer.as_str(),
            self.destination.as_str(),
            self.email.as_str(),
        ]
    }
}

// ============================================================================
// Status filter
// ============================================================================

/// Фильтр по статусу в шапке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    /// Неизвестный код означает "все статусы"
    pub fn parse(code: &str) -> Self {
        BookingStatus::from_code(code)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn all_options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(BookingStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn accepts(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Текстовый поиск И фильтр по статусу; порядок исходного списка сохраняется
pub fn filter_bookings(
    bookings: &[Booking],
    query: &str,
    status_filter: StatusFilter,
) -> FilteredView<Booking> {
    let items = bookings
        .iter()
        .filter(|b| b.matches_query(query) && status_filter.accepts(b.status))
        .cloned()
        .collect();
    FilteredView::from_parts(items, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, customer: &str, destination: &str, status: BookingStatus) -> Booking {
        let email = format!("{}@email.com", customer.split(' ').next().unwrap_or("").to_lowercase());
        Booking {
            id: id.to_string(),
            customer: customer.to_string(),
            email,
            destination: destination.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            status,
            amount: "$980".to_string(),
            guests: 4,
        }
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("BK-001", "Ahmed Hassan", "Mogadishu City Tour", BookingStatus::Confirmed),
            booking("BK-002", "Sarah Johnson", "Somaliland Adventure", BookingStatus::Pending),
            booking("BK-003", "Mohamed Ali", "Kismayo Beach Package", BookingStatus::Confirmed),
            booking("BK-004", "Lisa Chen", "Puntland Cultural Tour", BookingStatus::Cancelled),
        ]
    }

    fn ids(view: &FilteredView<Booking>) -> Vec<&str> {
        view.items().iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_matches_customer_destination_or_email() {
        let all = sample();
        assert_eq!(ids(&filter_bookings(&all, "ahmed hassan", StatusFilter::All)), vec!["BK-001"]);
        assert_eq!(ids(&filter_bookings(&all, "hassan ahmed", StatusFilter::All)), Vec::<&str>::new());
        assert_eq!(ids(&filter_bookings(&all, "TOUR", StatusFilter::All)), vec!["BK-001", "BK-004"]);
        assert_eq!(ids(&filter_bookings(&all, "lisa@", StatusFilter::All)), vec!["BK-004"]);
    }

    #[test]
    fn test_id_is_not_searchable() {
        assert!(filter_bookings(&sample(), "BK-002", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_combines_with_query() {
        let all = sample();
        let confirmed = StatusFilter::Only(BookingStatus::Confirmed);
        assert_eq!(ids(&filter_bookings(&all, "", confirmed)), vec!["BK-001", "BK-003"]);
        assert_eq!(ids(&filter_bookings(&all, "kismayo", confirmed)), vec!["BK-003"]);
        assert!(filter_bookings(&all, "lisa", confirmed).is_empty());
        assert_eq!(filter_bookings(&all, "", StatusFilter::All).len(), 4);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("cancelled"),
            StatusFilter::Only(BookingStatus::Cancelled)
        );
        let codes: Vec<_> = StatusFilter::all_options().iter().map(|f| f.code()).collect();
        assert_eq!(codes, vec!["all", "confirmed", "pending", "cancelled"]);
    }
}
