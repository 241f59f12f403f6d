use contracts::domain::a002_product::aggregate::{ProductDetails, ProductsResponse};
use contracts::shared::filters::{SearchFilter, SearchQuery};
use contracts::shared::listing::ListingPage;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::shared::api_utils::{ApiClient, FetchError};
use crate::shared::paginated_list::ListingSource;

const PRODUCTS_PATH: &str = "/dashboard/getProductDetails";

/// `GET /dashboard/getProductDetails`; a non-"S" status reads as an empty page
pub async fn fetch_products(
    client: &ApiClient,
    query: &SearchQuery,
) -> Result<ListingPage<ProductDetails>, FetchError> {
    let url = client.url_with_query(PRODUCTS_PATH, query)?;
    let response: ProductsResponse = client.get_json(&url).await?;
    if !response.is_success() {
        log::warn!(
            "product search returned status {:?}",
            response.status_code.as_deref().unwrap_or("")
        );
    }
    Ok(response.into_page(query.page_no))
}

#[derive(Clone, Debug)]
pub struct ProductsSource {
    client: ApiClient,
}

impl ProductsSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ListingSource for ProductsSource {
    type Item = ProductDetails;
    type Filters = SearchFilter;

    fn fetch_page(
        &self,
        page_no: usize,
        page_size: usize,
        filters: &SearchFilter,
    ) -> LocalBoxFuture<'static, Result<ListingPage<ProductDetails>, FetchError>> {
        let client = self.client.clone();
        let query = SearchQuery::new(page_no, page_size, filters);
        async move { fetch_products(&client, &query).await }.boxed_local()
    }
}
