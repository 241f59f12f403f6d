use crate::domain::common::{de_flexible_count, de_flexible_string};
use crate::shared::listing::{ListingItem, ListingPage};
use serde::{Deserialize, Serialize};

/// Код успешного ответа `getProductDetails`
pub const STATUS_SUCCESS: &str = "S";

/// Продукт (счёт клиента) из `GET /dashboard/getProductDetails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "de_flexible_string")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "de_flexible_string")]
    pub product: Option<String>,
}

impl ListingItem for ProductDetails {
    fn key(&self) -> &str {
        self.account_id.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductDetails>,
    #[serde(default, deserialize_with = "de_flexible_count")]
    pub total_count: Option<usize>,
}

impl ProductsResponse {
    pub fn is_success(&self) -> bool {
        self.status_code.as_deref() == Some(STATUS_SUCCESS)
    }

    /// Неуспешный статус даёт пустую страница с нулевым итогом
    pub fn into_page(self, page_no: usize) -> ListingPage<ProductDetails> {
        if !self.is_success() {
            return ListingPage::new(Vec::new(), Some(0), page_no);
        }
        ListingPage::new(self.products, self.total_count, page_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let response: ProductsResponse = serde_json::from_value(json!({
            "statusCode": "S",
            "products": [{"name": "Leslie", "email": "l@x.com", "account_id": 443178, "product": "InvestmentStock"}],
            "totalCount": 1
        }))
        .unwrap();
        let page = response.into_page(0);
        assert_eq!(page.len(), 1);
        assert_eq!(page.items[0].key(), "443178");
        assert_eq!(page.total_count, Some(1));
    }

    #[test]
    fn test_total_count_lenient() {
        for total in [json!("45"), json!(45.0), json!({"$numberDecimal": "45"})] {
            let response: ProductsResponse = serde_json::from_value(json!({
                "statusCode": "S",
                "products": [],
                "totalCount": total
            }))
            .unwrap();
            assert_eq!(response.into_page(2).total_count, Some(45));
        }
    }

    #[test]
    fn test_failure_status_yields_empty_page() {
        let response: ProductsResponse = serde_json::from_value(json!({
            "statusCode": "E",
            "products": [{"name": "ignored"}]
        }))
        .unwrap();
        let page = response.into_page(0);
        assert!(page.is_empty());
        assert_eq!(page.total_count, Some(0));
    }
}
