use contracts::domain::a001_destination::DestinationOption;
use contracts::shared::search::{FilteredView, QueryState};
use contracts::shared::site_config::site_config;
use contracts::usecases::u001_search_tours::TripSearchForm;
use leptos::prelude::*;

/// Направления выпадающего списка формы
pub fn destination_options() -> Vec<DestinationOption> {
    vec![
        DestinationOption::new("djibouti", "Djibouti"),
        DestinationOption::new("eritrea", "Eritrea"),
        DestinationOption::new("kismayo", "Kismayo"),
        DestinationOption::new("mogadishu", "Mogadishu"),
        DestinationOption::new("puntland", "Puntland"),
        DestinationOption::new("somaliland", "Somaliland"),
        DestinationOption::new("south-sudan", "South Sudan"),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct TripSearchState {
    pub form: TripSearchForm,
    /// Фильтр внутри выпадающего списка направлений
    pub destination_query: QueryState,
    pub destination_open: bool,
}

impl Default for TripSearchState {
    fn default() -> Self {
        let config = site_config();
        Self {
            form: TripSearchForm::new(config.persons, config.duration_days),
            destination_query: QueryState::new(),
            destination_open: false,
        }
    }
}

impl TripSearchState {
    pub fn visible_destinations(&self, options: &[DestinationOption]) -> FilteredView<DestinationOption> {
        self.destination_query.apply(options)
    }

    pub fn toggle_destination_list(&mut self) {
        self.destination_open = !self.destination_open;
        if !self.destination_open {
            self.destination_query.clear();
        }
    }

    /// Выбор закрывает список и сбрасывает фильтр
    pub fn select_destination(&mut self, value: &str) {
        self.form.set_destination(value);
        self.destination_open = false;
        self.destination_query.clear();
    }
}

pub fn create_state() -> RwSignal<TripSearchState> {
    RwSignal::new(TripSearchState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(view: &FilteredView<DestinationOption>) -> Vec<&str> {
        view.items().iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_defaults_come_from_site_config() {
        let state = TripSearchState::default();
        assert_eq!(state.form.persons(), 2);
        assert_eq!(state.form.duration(), (3, 7));
        assert!(!state.destination_open);
    }

    #[test]
    fn test_type_to_filter_destinations() {
        let options = destination_options();
        let mut state = TripSearchState::default();
        assert_eq!(state.visible_destinations(&options).len(), 7);

        state.destination_query.set_query("so");
        assert_eq!(
            labels(&state.visible_destinations(&options)),
            vec!["Somaliland", "South Sudan"]
        );

        state.destination_query.set_query("xyz");
        let view = state.visible_destinations(&options);
        assert!(view.is_empty());
        assert_eq!(view.empty_message(), "No results found for \"xyz\"");
    }

    #[test]
    fn test_select_destination_closes_and_resets_filter() {
        let options = destination_options();
        let mut state = TripSearchState::default();
        state.toggle_destination_list();
        state.destination_query.set_query("pun");

        state.select_destination("puntland");
        assert!(!state.destination_open);
        assert!(state.destination_query.is_empty());
        assert_eq!(state.form.destination_label(&options), Some("Puntland"));
    }

    #[test]
    fn test_closing_list_clears_filter() {
        let mut state = TripSearchState::default();
        state.toggle_destination_list();
        state.destination_query.set_query("ki");
        state.toggle_destination_list();
        assert!(state.destination_query.is_empty());
    }
}
