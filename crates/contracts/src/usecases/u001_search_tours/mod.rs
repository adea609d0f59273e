pub mod form;
pub mod request;

pub use form::{parse_checkin, TripSearchForm, CHECKIN_INPUT_FORMAT};
pub use request::TripSearchRequest;

use crate::usecases::common::UseCaseMetadata;

pub struct SearchTours;

impl UseCaseMetadata for SearchTours {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "search_tours"
    }

    fn display_name() -> &'static str {
        "Search Tours"
    }

    fn description() -> &'static str {
        "Trip search from the home page: destination, duration, check-in, guests"
    }
}
