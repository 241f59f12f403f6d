use contracts::domain::a001_customer::aggregate::{Customer, CustomersResponse};
use contracts::shared::filters::{SearchFilter, SearchQuery};
use contracts::shared::listing::ListingPage;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::shared::api_utils::{ApiClient, FetchError};
use crate::shared::paginated_list::ListingSource;

const CUSTOMERS_PATH: &str = "/dashboard/getAllCustomers";

/// `GET /dashboard/getAllCustomers?pageNo&pageSize&searchText`
pub async fn fetch_customers(
    client: &ApiClient,
    query: &SearchQuery,
) -> Result<ListingPage<Customer>, FetchError> {
    let url = client.url_with_query(CUSTOMERS_PATH, query)?;
    let response: CustomersResponse = client.get_json(&url).await?;
    Ok(response.into_page(query.page_no))
}

#[derive(Clone, Debug)]
pub struct CustomersSource {
    client: ApiClient,
}

impl CustomersSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ListingSource for CustomersSource {
    type Item = Customer;
    type Filters = SearchFilter;

    fn fetch_page(
        &self,
        page_no: usize,
        page_size: usize,
        filters: &SearchFilter,
    ) -> LocalBoxFuture<'static, Result<ListingPage<Customer>, FetchError>> {
        let client = self.client.clone();
        let query = SearchQuery::new(page_no, page_size, filters);
        async move { fetch_customers(&client, &query).await }.boxed_local()
    }
}
