use contracts::domain::a003_airbnb_listing::aggregate::AirbnbListing;
use contracts::shared::filters::{FilterState, ListingQuery};
use contracts::shared::listing::ListingPage;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::shared::api_utils::{ApiClient, FetchError};
use crate::shared::paginated_list::ListingSource;

const LISTINGS_PATH: &str = "/airbnb/getAllListings";

/// `GET /airbnb/getAllListings`. Accepts `{listings, totalCount|total}`,
/// a bare array or an empty body.
pub async fn fetch_listings(
    client: &ApiClient,
    query: &ListingQuery,
) -> Result<ListingPage<AirbnbListing>, FetchError> {
    let url = client.url_with_query(LISTINGS_PATH, query)?;
    let value = client.get_value(&url).await?;
    ListingPage::from_listings_response(value, query.page_no)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[derive(Clone, Debug)]
pub struct AirbnbListingsSource {
    client: ApiClient,
}

impl AirbnbListingsSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ListingSource for AirbnbListingsSource {
    type Item = AirbnbListing;
    type Filters = FilterState;

    fn fetch_page(
        &self,
        page_no: usize,
        page_size: usize,
        filters: &FilterState,
    ) -> LocalBoxFuture<'static, Result<ListingPage<AirbnbListing>, FetchError>> {
        let client = self.client.clone();
        let query = ListingQuery::new(page_no, page_size, filters);
        async move { fetch_listings(&client, &query).await }.boxed_local()
    }
}
