use super::{no_results_message, FilteredView};
use crate::domain::a001_destination::Destination;
use crate::domain::a002_tour_package::TourPackage;
use crate::shared::navigation::QuickLink;

/// Выдача поиска навбара: три группы, отфильтрованные одним запросом
#[derive(Debug, Clone, PartialEq)]
pub struct NavSearchResults {
    pub destinations: FilteredView<Destination>,
    pub packages: FilteredView<TourPackage>,
    pub quick_links: FilteredView<QuickLink>,
}

impl NavSearchResults {
    pub fn produce(
        destinations: &[Destination],
        packages: &[TourPackage],
        quick_links: &[QuickLink],
        query: &str,
    ) -> Self {
        Self {
            destinations: FilteredView::produce(destinations, query),
            packages: FilteredView::produce(packages, query),
            quick_links: FilteredView::produce(quick_links, query),
        }
    }

    /// Хотя бы одна группа не пуста
    pub fn has_results(&self) -> bool {
        !self.destinations.is_empty() || !self.packages.is_empty() || !self.quick_links.is_empty()
    }

    pub fn query(&self) -> &str {
        self.destinations.query()
    }

    pub fn empty_message(&self) -> String {
        no_results_message(self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> (Vec<Destination>, Vec<TourPackage>, Vec<QuickLink>) {
        (
            vec![
                Destination::new("Mogadishu", "Somalia"),
                Destination::new("Hargeisa", "Somaliland"),
            ],
            vec![
                TourPackage::new("Coastal Adventure", "7 Days", "$899"),
                TourPackage::new("Cultural Heritage Tour", "5 Days", "$699"),
            ],
            vec![
                QuickLink::new("About Us", "/about"),
                QuickLink::new("Contact", "/contact"),
            ],
        )
    }

    #[test]
    fn test_groups_filtered_with_same_query() {
        let (d, p, q) = sources();
        let results = NavSearchResults::produce(&d, &p, &q, "cu");
        assert!(results.destinations.is_empty());
        assert_eq!(results.packages.len(), 1);
        assert!(results.quick_links.is_empty());
        assert!(results.has_results());
    }

    #[test]
    fn test_empty_query_shows_every_group() {
        let (d, p, q) = sources();
        let results = NavSearchResults::produce(&d, &p, &q, "");
        assert_eq!(results.destinations.len(), 2);
        assert_eq!(results.packages.len(), 2);
        assert_eq!(results.quick_links.len(), 2);
    }

    #[test]
    fn test_no_results_in_any_group() {
        let (d, p, q) = sources();
        let results = NavSearchResults::produce(&d, &p, &q, "zzz");
        assert!(!results.has_results());
        assert_eq!(results.empty_message(), "No results found for \"zzz\"");
    }
}
