use contracts::domain::a004_transaction::aggregate::{Transaction, TransactionsResponse};
use serde::Serialize;

use crate::shared::api_utils::{ApiClient, FetchError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionsQuery<'a> {
    account_no: &'a str,
}

/// `GET /dashboard/getTransactionsByAccountNo?accountNo=...`
pub async fn fetch_transactions(
    client: &ApiClient,
    account_no: &str,
) -> Result<Vec<Transaction>, FetchError> {
    let url = client.url_with_query(
        "/dashboard/getTransactionsByAccountNo",
        &TransactionsQuery { account_no },
    )?;
    let response: TransactionsResponse = client.get_json(&url).await?;
    log::debug!(
        "account {}: {} transactions",
        account_no,
        response.transactions.len()
    );
    Ok(response.transactions)
}
