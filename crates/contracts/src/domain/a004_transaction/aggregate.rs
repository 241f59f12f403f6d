use crate::domain::common::{de_flexible_f64, de_flexible_string};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Операция по счёту из `GET /dashboard/getTransactionsByAccountNo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "de_flexible_string")]
    pub date: Option<String>,
    #[serde(default)]
    pub transaction_code: Option<String>,
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Направление операции по коду
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
    Other,
}

impl TransactionKind {
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code else {
            return TransactionKind::Other;
        };
        let code = code.to_lowercase();
        if code.contains("credit") || code.contains("deposit") {
            TransactionKind::Credit
        } else if code.contains("debit") || code.contains("withdraw") {
            TransactionKind::Debit
        } else {
            TransactionKind::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    }
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_code(self.transaction_code.as_deref())
    }

    /// Момент операции в миллисекундах; без даты или с нечитаемой датой считается эпохой
    pub fn timestamp_millis(&self) -> i64 {
        self.date.as_deref().and_then(parse_millis).unwrap_or(0)
    }
}

fn parse_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    // {"$date": {"$numberLong": "..."}} приходит строкой с миллисекундами
    raw.parse::<i64>().ok()
}

/// Стабильная сортировка по дате
pub fn sort_by_date(transactions: &mut [Transaction], order: SortOrder) {
    transactions.sort_by(|a, b| {
        let cmp = a.timestamp_millis().cmp(&b.timestamp_millis());
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(date: Option<&str>, code: &str) -> Transaction {
        Transaction {
            date: date.map(str::to_string),
            transaction_code: Some(code.to_string()),
            amount: None,
            symbol: None,
            price: None,
            total: None,
        }
    }

    #[test]
    fn test_sort_by_date() {
        let mut items = vec![
            tx(Some("2016-03-01T00:00:00.000Z"), "buy"),
            tx(None, "sell"),
            tx(Some("2017-01-15"), "buy"),
        ];

        sort_by_date(&mut items, SortOrder::Desc);
        assert_eq!(items[0].date.as_deref(), Some("2017-01-15"));
        assert_eq!(items[2].date, None);

        sort_by_date(&mut items, SortOrder::Asc);
        assert_eq!(items[0].date, None);
        assert_eq!(items[2].date.as_deref(), Some("2017-01-15"));
    }

    #[test]
    fn test_wire_formats() {
        let response: TransactionsResponse = serde_json::from_value(json!({
            "transactions": [
                {"date": {"$date": "2003-09-09T00:00:00Z"}, "amount": 7514, "transaction_code": "buy"},
                {"date": {"$date": {"$numberLong": "1000"}}, "amount": "12.5", "transaction_code": "Deposit"}
            ]
        }))
        .unwrap();
        let items = response.transactions;
        assert_eq!(items[0].timestamp_millis(), 1_063_065_600_000);
        assert_eq!(items[1].timestamp_millis(), 1000);
        assert_eq!(items[1].amount, Some(12.5));
        assert_eq!(items[1].kind(), TransactionKind::Credit);
    }

    #[test]
    fn test_transaction_kind() {
        assert_eq!(TransactionKind::from_code(Some("WITHDRAWAL")), TransactionKind::Debit);
        assert_eq!(TransactionKind::from_code(Some("buy")), TransactionKind::Other);
        assert_eq!(TransactionKind::from_code(None), TransactionKind::Other);
        assert_eq!(SortOrder::default().toggled(), SortOrder::Asc);
    }
}
