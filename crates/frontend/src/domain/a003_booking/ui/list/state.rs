use contracts::domain::a003_booking::{filter_bookings, Booking, StatusFilter};
use contracts::shared::search::FilteredView;
use leptos::prelude::*;

/// Фильтры таблицы бронирований: строка поиска и код статуса из `Select`
#[derive(Clone, Copy, Debug)]
pub struct BookingListState {
    pub query: RwSignal<String>,
    pub status_code: RwSignal<String>,
}

impl BookingListState {
    pub fn status_filter(&self) -> StatusFilter {
        StatusFilter::parse(&self.status_code.get())
    }

    pub fn visible(&self, bookings: &[Booking]) -> FilteredView<Booking> {
        visible_bookings(bookings, &self.query.get(), &self.status_code.get())
    }
}

pub fn create_state() -> BookingListState {
    BookingListState {
        query: RwSignal::new(String::new()),
        status_code: RwSignal::new(StatusFilter::All.code().to_string()),
    }
}

/// Видимые строки: текстовый поиск И статус; неизвестный код статуса = все
pub fn visible_bookings(bookings: &[Booking], query: &str, status_code: &str) -> FilteredView<Booking> {
    filter_bookings(bookings, query, StatusFilter::parse(status_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_booking::ui::list::mock_bookings;

    fn ids(view: &FilteredView<Booking>) -> Vec<&str> {
        view.items().iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_all_statuses_and_empty_query_show_everything() {
        let bookings = mock_bookings();
        let view = visible_bookings(&bookings, "", "all");
        assert_eq!(ids(&view), vec!["BK-001", "BK-002", "BK-003", "BK-004"]);
    }

    #[test]
    fn test_query_and_status_are_combined() {
        let bookings = mock_bookings();
        assert_eq!(ids(&visible_bookings(&bookings, "", "confirmed")), vec!["BK-001", "BK-003"]);
        assert_eq!(ids(&visible_bookings(&bookings, "mo", "confirmed")), vec!["BK-001", "BK-003"]);
        assert_eq!(ids(&visible_bookings(&bookings, "kismayo", "confirmed")), vec!["BK-003"]);
        assert!(visible_bookings(&bookings, "kismayo", "pending").is_empty());
    }

    #[test]
    fn test_search_covers_customer_destination_and_email() {
        let bookings = mock_bookings();
        assert_eq!(ids(&visible_bookings(&bookings, "SARAH", "all")), vec!["BK-002"]);
        assert_eq!(ids(&visible_bookings(&bookings, "puntland", "all")), vec!["BK-004"]);
        assert_eq!(ids(&visible_bookings(&bookings, "lisa@", "all")), vec!["BK-004"]);
        // id не участвует в поиске
        assert!(visible_bookings(&bookings, "BK-001", "all").is_empty());
    }

    #[test]
    fn test_unknown_status_code_means_all() {
        let bookings = mock_bookings();
        assert_eq!(visible_bookings(&bookings, "", "archived").len(), 4);
    }
}
