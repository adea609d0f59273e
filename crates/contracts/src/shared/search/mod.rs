//! Инкрементальный фильтр по статическим спискам (поиск в навбаре,
//! поиск в шапке админки, фильтр таблицы бронирований, выбор направления).
//!
//! Запрос сравнивается как одна литеральная подстрока: без trim, без
//! разбиения на слова, без учёта регистра. Пустой запрос пропускает все записи.

mod filtered_view;
mod nav_results;
mod query_state;

pub use filtered_view::{no_results_message, FilteredView};
pub use nav_results::NavSearchResults;
pub use query_state::QueryState;

/// Запись, по которой можно искать.
///
/// Каждый тип сам перечисляет поля, участвующие в поиске; совпадение
/// хотя бы в одном поле включает запись в выдачу.
pub trait Searchable {
    /// Поля записи, участвующие в поиске
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли запись поисковому запросу
    fn matches_query(&self, query: &str) -> bool {
        fields_match(&self.search_fields(), query)
    }
}

/// Регистронезависимое вхождение `query` хотя бы в одно из полей
pub fn fields_match(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Предикат совпадения для одной записи
pub fn matches<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    record.matches_query(query)
}

/// Стабильная фильтрация: порядок совпавших записей сохраняется
pub fn filter<T: Searchable + Clone>(candidates: &[T], query: &str) -> Vec<T> {
    candidates
        .iter()
        .filter(|record| record.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct City {
        name: &'static str,
        country: &'static str,
    }

    impl Searchable for City {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.country]
        }
    }

    fn cities() -> Vec<City> {
        ["Mogadishu", "Hargeisa", "Berbera", "Kismayo"]
            .into_iter()
            .map(|name| City {
                name,
                country: "Somalia",
            })
            .collect()
    }

    fn names(items: &[City]) -> Vec<&'static str> {
        items.iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = cities();
        assert_eq!(filter(&all, ""), all);
    }

    #[test]
    fn test_substring_scenario_keeps_source_order() {
        let result = filter(&cities(), "is");
        assert_eq!(names(&result), vec!["Mogadishu", "Hargeisa", "Kismayo"]);

        // в "Mogadishu" нет подстроки "ha"
        let result = filter(&cities(), "ha");
        assert_eq!(names(&result), vec!["Hargeisa"]);
    }

    #[test]
    fn test_case_insensitive() {
        let all = cities();
        assert_eq!(filter(&all, "MOGADISHU"), filter(&all, "mogadishu"));
        assert_eq!(names(&filter(&all, "MOGADISHU")), vec!["Mogadishu"]);
    }

    #[test]
    fn test_idempotent() {
        let all = cities();
        for q in ["", "a", "ber", "SOM", "zzz"] {
            let once = filter(&all, q);
            assert_eq!(filter(&once, q), once, "query {:?}", q);
        }
    }

    #[test]
    fn test_included_records_contain_query() {
        let all = cities();
        for q in ["a", "ism", "Ali", "so"] {
            let needle = q.to_lowercase();
            for c in filter(&all, q) {
                assert!(c
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle)));
            }
        }
    }

    #[test]
    fn test_any_field_matches() {
        // "somalia" есть только в стране, но совпадают все города
        assert_eq!(filter(&cities(), "somalia").len(), 4);
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(filter(&cities(), "berbera ").is_empty());
        assert!(filter(&cities(), " ").is_empty());
    }

    #[test]
    fn test_multi_word_query_is_literal() {
        let fields = ["Ahmed Hassan"];
        assert!(fields_match(&fields, "ahmed hassan"));
        assert!(fields_match(&fields, "MED HAS"));
        assert!(!fields_match(&fields, "hassan ahmed"));
        assert!(!fields_match(&["Hassan Ahmed"], "ahmed hassan"));
    }

    #[test]
    fn test_matches_free_function() {
        let city = City {
            name: "Kismayo",
            country: "Somalia",
        };
        assert!(matches(&city, "KIS"));
        assert!(matches(&city, ""));
        assert!(!matches(&city, "kenya"));
    }
}
