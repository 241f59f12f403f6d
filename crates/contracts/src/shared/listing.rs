//! Страница списка и нормализация ответов списочных endpoint-ов
//!
//! Сервер отвечает по-разному: `{ "listings": [...], "totalCount": n }`,
//! `{ "listings": [...], "total": n }`, голым массивом или вообще пустым телом.
//! Все варианты сводятся к [`ListingPage`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::common::number_from_value;

/// Элемент списка с уникальным ключом в пределах всей выборки
pub trait ListingItem {
    fn key(&self) -> &str;
}

/// Одна страница результатов, полученная с сервера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    /// Общее количество записей; `None`, если сервер его не прислал
    pub total_count: Option<usize>,
    /// Номер страницы (с нуля)
    pub page_no: usize,
}

impl<T> ListingPage<T> {
    pub fn new(items: Vec<T>, total_count: Option<usize>, page_no: usize) -> Self {
        Self {
            items,
            total_count,
            page_no,
        }
    }

    pub fn empty(page_no: usize) -> Self {
        Self::new(Vec::new(), None, page_no)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: DeserializeOwned> ListingPage<T> {
    /// Ответ `GET /airbnb/getAllListings`
    pub fn from_listings_response(value: Value, page_no: usize) -> Result<Self, serde_json::Error> {
        Self::from_keyed_response(value, "listings", page_no)
    }

    /// Общая нормализация: объект с массивом под `items_key`, голый массив
    /// или что угодно ещё (пустая страница, не ошибка).
    pub fn from_keyed_response(
        value: Value,
        items_key: &str,
        page_no: usize,
    ) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(mut map) => match map.remove(items_key) {
                Some(Value::Array(raw)) => {
                    let items = decode_items(raw)?;
                    Ok(Self::new(items, total_from_fields(&map), page_no))
                }
                _ => Ok(Self::empty(page_no)),
            },
            Value::Array(raw) => Ok(Self::new(decode_items(raw)?, None, page_no)),
            _ => Ok(Self::empty(page_no)),
        }
    }
}

fn decode_items<T: DeserializeOwned>(raw: Vec<Value>) -> Result<Vec<T>, serde_json::Error> {
    raw.into_iter().map(serde_json::from_value).collect()
}

/// `totalCount`, затем `total`; ноль считается отсутствием значения
fn total_from_fields(map: &Map<String, Value>) -> Option<usize> {
    ["totalCount", "total"]
        .iter()
        .filter_map(|key| map.get(*key))
        .filter_map(number_from_value)
        .find(|n| *n >= 1.0)
        .map(|n| n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_object_with_total_count() {
        let page: ListingPage<Row> = ListingPage::from_listings_response(
            json!({"listings": [{"id": 1}, {"id": 2}], "totalCount": 45}),
            0,
        )
        .unwrap();
        assert_eq!(page.items, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total_count, Some(45));
    }

    #[test]
    fn test_total_fallback_field() {
        let page: ListingPage<Row> = ListingPage::from_listings_response(
            json!({"listings": [{"id": 1}], "totalCount": 0, "total": 7}),
            2,
        )
        .unwrap();
        assert_eq!(page.total_count, Some(7));
        assert_eq!(page.page_no, 2);
    }

    #[test]
    fn test_bare_array_has_no_total() {
        let page: ListingPage<Row> =
            ListingPage::from_listings_response(json!([{"id": 3}]), 1).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn test_empty_shapes_are_not_errors() {
        for value in [json!(null), json!({}), json!({"listings": null}), json!("")] {
            let page: ListingPage<Row> = ListingPage::from_listings_response(value, 0).unwrap();
            assert!(page.is_empty());
            assert_eq!(page.total_count, None);
        }
    }

    #[test]
    fn test_malformed_item_is_an_error() {
        let result: Result<ListingPage<Row>, _> =
            ListingPage::from_listings_response(json!({"listings": [{"id": "x"}]}), 0);
        assert!(result.is_err());
    }
}
