use super::{FilteredView, Searchable};

/// Текущий поисковый запрос представления.
///
/// Значение заменяется целиком на каждое нажатие клавиши: без trim,
/// без debounce и без ограничения длины.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    value: String,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn query(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Пересчитывает выдачу по текущему значению
    pub fn apply<T: Searchable + Clone>(&self, candidates: &[T]) -> FilteredView<T> {
        FilteredView::produce(candidates, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Name(&'static str);

    impl Searchable for Name {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_initially_empty_and_shows_all() {
        let state = QueryState::new();
        let names = vec![Name("Berbera"), Name("Kismayo")];
        assert!(state.is_empty());
        assert_eq!(state.apply(&names).len(), 2);
    }

    #[test]
    fn test_last_set_wins_without_trimming() {
        let mut state = QueryState::new();
        state.set_query("ber");
        state.set_query("kis ");
        assert_eq!(state.query(), "kis ");

        let names = vec![Name("Berbera"), Name("Kismayo")];
        assert!(state.apply(&names).is_empty());

        state.set_query("kis");
        assert_eq!(state.apply(&names).items(), &[Name("Kismayo")]);

        state.clear();
        assert_eq!(state.apply(&names).len(), 2);
    }
}
