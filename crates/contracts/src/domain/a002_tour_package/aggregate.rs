use serde::{Deserialize, Serialize};

use crate::shared::search::Searchable;

// ============================================================================
// TourPackage (глобальный поиск)
// ============================================================================

/// Тур в результатах поиска навбара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPackage {
    pub name: String,
    /// Подпись длительности, например "7 Days"
    pub duration: String,
    /// Цена как подпись, например "$899"
    pub price: String,
}

impl TourPackage {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            price: price.into(),
        }
    }
}

impl Searchable for TourPackage {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

// ============================================================================
// FeaturedPackage (блок "Popular Packages" на главной)
// ============================================================================

pub const MAX_RATING_STARS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPackage {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Например "5D/4N"
    pub duration: String,
    pub description: String,
    /// Цена до скидки, USD
    pub original_price: u32,
    /// Текущая цена, USD
    pub current_price: u32,
    /// Скидка в процентах; 0 = без бейджа
    pub discount: u32,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
}

impl FeaturedPackage {
    /// Количество закрашенных звёзд (рейтинг округляется вниз)
    pub fn filled_stars(&self) -> u32 {
        (self.rating.max(0.0).floor() as u32).min(MAX_RATING_STARS)
    }

    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }

    pub fn booking_href(&self) -> String {
        format!("/packages/{}/book", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter;

    fn featured(rating: f32, discount: u32) -> FeaturedPackage {
        FeaturedPackage {
            id: "mogadishu-3days".into(),
            title: "EXPLORE MOGADISHU".into(),
            location: "MOGADISHU".into(),
            duration: "3D/2N".into(),
            description: String::new(),
            original_price: 1200,
            current_price: 980,
            discount,
            image: String::new(),
            rating,
            reviews: 25,
        }
    }

    #[test]
    fn test_package_matches_name_only() {
        let items = vec![
            TourPackage::new("Somali Coast Adventure", "7 Days", "$899"),
            TourPackage::new("Historical Somalia Tour", "5 Days", "$649"),
        ];
        assert!(filter(&items, "7 days").is_empty());
        assert!(filter(&items, "$899").is_empty());
        assert_eq!(filter(&items, "somali").len(), 2);
        assert_eq!(filter(&items, "COAST"), vec![items[0].clone()]);
    }

    #[test]
    fn test_filled_stars_round_down() {
        assert_eq!(featured(4.5, 18).filled_stars(), 4);
        assert_eq!(featured(4.8, 18).filled_stars(), 4);
        assert_eq!(featured(5.0, 18).filled_stars(), 5);
        assert_eq!(featured(7.0, 18).filled_stars(), 5);
        assert_eq!(featured(-1.0, 18).filled_stars(), 0);
    }

    #[test]
    fn test_discount_and_href() {
        assert!(featured(4.0, 18).has_discount());
        assert!(!featured(4.0, 0).has_discount());
        assert_eq!(featured(4.0, 0).booking_href(), "/packages/mogadishu-3days/book");
    }
}
