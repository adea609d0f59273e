use serde::{Deserialize, Serialize};

use crate::shared::search::Searchable;

// ============================================================================
// Destination (глобальный поиск)
// ============================================================================

/// Направление в результатах поиска навбара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
}

impl Destination {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

impl Searchable for Destination {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.country.as_str()]
    }
}

// ============================================================================
// DestinationOption (выбор направления в форме поиска туров)
// ============================================================================

/// Пункт выпадающего списка направлений
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationOption {
    /// Slug, уходит в запрос поиска
    pub value: String,
    pub label: String,
}

impl DestinationOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Подпись по slug
    pub fn label_for<'a>(options: &'a [DestinationOption], value: &str) -> Option<&'a str> {
        options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

impl Searchable for DestinationOption {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.label.as_str()]
    }
}

// ============================================================================
// FeaturedDestination (карусель на главной)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedDestination {
    pub id: String,
    pub country: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl FeaturedDestination {
    /// Ссылка на страницу направления
    pub fn href(&self) -> String {
        format!("/destinations/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter;

    #[test]
    fn test_destination_matches_name_or_country() {
        let items = vec![
            Destination::new("Djibouti", "East Africa"),
            Destination::new("Kismayo", "Somalia"),
        ];
        assert_eq!(filter(&items, "africa"), vec![items[0].clone()]);
        assert_eq!(filter(&items, "KISM"), vec![items[1].clone()]);
        assert_eq!(filter(&items, "i").len(), 2);
    }

    #[test]
    fn test_option_matches_label_only() {
        let options = vec![
            DestinationOption::new("south-sudan", "South Sudan"),
            DestinationOption::new("puntland", "Puntland"),
        ];
        // slug не участвует в поиске
        assert!(filter(&options, "south-").is_empty());
        assert_eq!(filter(&options, "south ").len(), 1);
        assert_eq!(
            DestinationOption::label_for(&options, "puntland"),
            Some("Puntland")
        );
        assert_eq!(DestinationOption::label_for(&options, "kenya"), None);
    }

    #[test]
    fn test_featured_href() {
        let d = FeaturedDestination {
            id: "south-sudan".into(),
            country: "East Africa".into(),
            title: "South Sudan".into(),
            description: String::new(),
            image: String::new(),
        };
        assert_eq!(d.href(), "/destinations/south-sudan");
    }
}
