use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Обёртки расширенного JSON (выгрузки MongoDB), в которых приходят числа
const NUMBER_WRAPPERS: [&str; 4] = ["$numberDecimal", "$numberDouble", "$numberLong", "$numberInt"];

/// Обёртки для идентификаторов и дат
const STRING_WRAPPERS: [&str; 4] = ["$oid", "$date", "$numberLong", "$numberInt"];

/// Число из JSON: число, строка с числом или `{"$numberDecimal": "80.00"}`
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Object(map) => NUMBER_WRAPPERS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(number_from_value),
        _ => None,
    }
}

/// Строковое значение: строка, число или `{"$oid": "..."}` / `{"$date": "..."}`
pub fn string_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => STRING_WRAPPERS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(string_from_value),
        _ => None,
    }
}

pub fn de_flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Счётчик записей (`totalCount`): `45`, `45.0`, `"45"` или `{"$numberDecimal": "45"}`.
/// Отрицательное или нечисловое значение считается отсутствующим.
pub fn de_flexible_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as usize))
}

pub fn de_flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(string_from_value))
}

/// Идентификатор документа; `null` превращается в пустую строку
pub fn de_flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(string_from_value)
        .unwrap_or_default())
}

/// Список идентификаторов (номера счетов приходят то числами, то строками)
pub fn de_flexible_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(string_from_value).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_from_value() {
        assert_eq!(number_from_value(&json!(80)), Some(80.0));
        assert_eq!(number_from_value(&json!("80.50")), Some(80.5));
        assert_eq!(number_from_value(&json!({"$numberDecimal": "120.00"})), Some(120.0));
        assert_eq!(number_from_value(&json!({"$numberInt": "3"})), Some(3.0));
        assert_eq!(number_from_value(&json!("abc")), None);
        assert_eq!(number_from_value(&json!(null)), None);
    }

    #[test]
    fn test_flexible_count() {
        #[derive(Deserialize)]
        struct Total {
            #[serde(default, deserialize_with = "de_flexible_count")]
            total: Option<usize>,
        }
        let total = |value: Value| serde_json::from_value::<Total>(json!({ "total": value })).unwrap().total;

        assert_eq!(total(json!(45)), Some(45));
        assert_eq!(total(json!(45.0)), Some(45));
        assert_eq!(total(json!("45")), Some(45));
        assert_eq!(total(json!({"$numberDecimal": "45"})), Some(45));
        assert_eq!(total(json!(-1)), None);
        assert_eq!(total(json!("n/a")), None);
        assert_eq!(total(Value::Null), None);
        let missing: Total = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.total, None);
    }

    #[test]
    fn test_string_from_value() {
        assert_eq!(string_from_value(&json!("10006546")), Some("10006546".to_string()));
        assert_eq!(string_from_value(&json!(371138)), Some("371138".to_string()));
        assert_eq!(
            string_from_value(&json!({"$oid": "5ca4bbc7a2dd94ee5816238c"})),
            Some("5ca4bbc7a2dd94ee5816238c".to_string())
        );
        assert_eq!(string_from_value(&json!([1, 2])), None);
    }
}
