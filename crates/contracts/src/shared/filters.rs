//! Фильтры списочных запросов и их сериализация в query string

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 5000.0;
pub const MAX_RATING: f64 = 5.0;

/// Диапазон цены (min <= max, в пределах значений по умолчанию)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl PriceRange {
    /// Нормализует границы: меняет местами перевёрнутые и обрезает по умолчанию
    pub fn new(min: f64, max: f64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: lo.clamp(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
            max: hi.clamp(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Формат параметра `priceRange`: `"0,5000"`
impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// Набор фильтров списка объявлений
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub price_range: PriceRange,
    pub minimum_rating: f64,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Количество отличающихся от умолчания фильтров (для бейджа на кнопке)
    pub fn active_count(&self) -> usize {
        [
            !self.search_text.trim().is_empty(),
            !self.price_range.is_default(),
            self.minimum_rating > 0.0,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Query string для `GET /airbnb/getAllListings`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub page_no: usize,
    pub page_size: usize,
    pub search_text: String,
    pub price_range: String,
    pub minimum_rating: f64,
}

impl ListingQuery {
    pub fn new(page_no: usize, page_size: usize, filters: &FilterState) -> Self {
        Self {
            page_no,
            page_size,
            search_text: filters.search_text.trim().to_string(),
            price_range: filters.price_range.to_string(),
            minimum_rating: filters.minimum_rating,
        }
    }
}

/// Фильтр табличных списков (клиенты, продукты): только строка поиска
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    pub search_text: String,
}

impl SearchFilter {
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
        }
    }
}

/// Query string для `getAllCustomers` / `getProductDetails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub page_no: usize,
    pub page_size: usize,
    pub search_text: String,
}

impl SearchQuery {
    pub fn new(page_no: usize, page_size: usize, filter: &SearchFilter) -> Self {
        Self {
            page_no,
            page_size,
            search_text: filter.search_text.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filters = FilterState::default();
        assert_eq!(filters.search_text, "");
        assert_eq!(filters.price_range, PriceRange { min: 0.0, max: 5000.0 });
        assert_eq!(filters.minimum_rating, 0.0);
        assert!(filters.is_default());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_price_range_normalization() {
        assert_eq!(PriceRange::new(300.0, 100.0), PriceRange { min: 100.0, max: 300.0 });
        assert_eq!(PriceRange::new(-10.0, 9000.0), PriceRange::default());
    }

    #[test]
    fn test_price_range_query_value() {
        assert_eq!(PriceRange::default().to_string(), "0,5000");
        assert_eq!(PriceRange::new(50.5, 200.0).to_string(), "50.5,200");
    }

    #[test]
    fn test_listing_query_uses_given_filters() {
        let filters = FilterState {
            search_text: "  beach ".to_string(),
            price_range: PriceRange::new(100.0, 400.0),
            minimum_rating: 4.0,
        };
        let query = ListingQuery::new(3, 20, &filters);
        assert_eq!(query.page_no, 3);
        assert_eq!(query.search_text, "beach");
        assert_eq!(query.price_range, "100,400");
        assert_eq!(query.minimum_rating, 4.0);
        assert_eq!(filters.active_count(), 3);
    }
}
