use super::{filter, Searchable};

/// Текст пустой выдачи; запрос выводится пользователю как есть
pub fn no_results_message(query: &str) -> String {
    format!("No results found for \"{}\"", query)
}

/// Видимая подпоследовательность кандидатов вместе с запросом,
/// который её породил.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<T> {
    items: Vec<T>,
    query: String,
}

impl<T: Searchable + Clone> FilteredView<T> {
    /// Полный пересчёт выдачи по текущему запросу
    pub fn produce(candidates: &[T], query: &str) -> Self {
        Self {
            items: filter(candidates, query),
            query: query.to_string(),
        }
    }
}

impl<T> FilteredView<T> {
    /// Выдача, уже отфильтрованная вызывающим кодом (например, с доп. условием)
    pub fn from_parts(items: Vec<T>, query: impl Into<String>) -> Self {
        Self {
            items,
            query: query.into(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Флаг пустой выдачи для отображения "ничего не найдено"
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn empty_message(&self) -> String {
        no_results_message(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Place(&'static str);

    impl Searchable for Place {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_empty_result_signals_and_echoes_query() {
        let candidates = vec![Place("Mogadishu"), Place("Hargeisa")];
        let view = FilteredView::produce(&candidates, "zzz");
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(view.empty_message().contains("\"zzz\""));
        assert_eq!(view.empty_message(), "No results found for \"zzz\"");
    }

    #[test]
    fn test_non_empty_result() {
        let candidates = vec![Place("Mogadishu"), Place("Hargeisa")];
        let view = FilteredView::produce(&candidates, "HAR");
        assert!(!view.is_empty());
        assert_eq!(view.items(), &[Place("Hargeisa")]);
        assert_eq!(view.query(), "HAR");
    }

    #[test]
    fn test_from_parts_keeps_query_verbatim() {
        let view: FilteredView<Place> = FilteredView::from_parts(Vec::new(), "  x ");
        assert_eq!(view.empty_message(), "No results found for \"  x \"");
    }
}
