use crate::domain::common::{de_flexible_count, de_flexible_id, de_flexible_id_list, de_flexible_string};
use crate::shared::listing::{ListingItem, ListingPage};
use serde::{Deserialize, Serialize};

/// Клиент из `GET /dashboard/getAllCustomers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id", default, deserialize_with = "de_flexible_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "de_flexible_string")]
    pub address: Option<String>,
    /// Номера счетов клиента (открывают выписку транзакций)
    #[serde(default, deserialize_with = "de_flexible_id_list")]
    pub accounts: Vec<String>,
}

impl Customer {
    /// Буква для аватара
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn address_label(&self) -> &str {
        self.address
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or("N/A")
    }
}

impl ListingItem for Customer {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Ответ списка клиентов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomersResponse {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(rename = "totalCount", default, deserialize_with = "de_flexible_count")]
    pub total_count: Option<usize>,
}

impl CustomersResponse {
    pub fn into_page(self, page_no: usize) -> ListingPage<Customer> {
        ListingPage::new(
            self.customers,
            self.total_count.filter(|n| *n > 0),
            page_no,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_from_wire() {
        let response: CustomersResponse = serde_json::from_value(json!({
            "customers": [{
                "_id": {"$oid": "5ca4bbcea2dd94ee58162a68"},
                "name": "elizabeth Ray",
                "username": "fmiller",
                "email": "arroyocolton@gmail.com",
                "address": "9286 Bethany Glens",
                "accounts": [371138, "324287"]
            }],
            "totalCount": 500
        }))
        .unwrap();

        let page = response.into_page(1);
        assert_eq!(page.total_count, Some(500));
        let customer = &page.items[0];
        assert_eq!(customer.key(), "5ca4bbcea2dd94ee58162a68");
        assert_eq!(customer.accounts, vec!["371138", "324287"]);
        assert_eq!(customer.initial(), "E");
    }

    #[test]
    fn test_total_count_lenient() {
        for total in [json!(45), json!("45"), json!(45.0), json!({"$numberDecimal": "45"})] {
            let response: CustomersResponse =
                serde_json::from_value(json!({"customers": [], "totalCount": total})).unwrap();
            assert_eq!(response.total_count, Some(45));
        }
        let response: CustomersResponse = serde_json::from_value(json!({"customers": []})).unwrap();
        assert_eq!(response.total_count, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let customer: Customer = serde_json::from_value(json!({"_id": "c1"})).unwrap();
        assert!(customer.accounts.is_empty());
        assert_eq!(customer.address_label(), "N/A");
        assert_eq!(customer.initial(), "?");
    }
}
