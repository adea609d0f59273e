/// Метаданные сценария для логов и подписей в UI
pub trait UseCaseMetadata {
    /// Индекс сценария, например "u001"
    fn usecase_index() -> &'static str;

    /// Техническое имя, например "search_tours"
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u001_search_tours"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u001_search_tours::SearchTours;

    #[test]
    fn test_full_name() {
        assert_eq!(SearchTours::full_name(), "u001_search_tours");
        assert_eq!(SearchTours::display_name(), "Search Tours");
    }
}
