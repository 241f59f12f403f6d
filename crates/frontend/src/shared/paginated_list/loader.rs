//! Reactive list loader shared by every paginated view.
//!
//! `ListLoader` owns a `RwSignal<ListState>` and the data source. All entry
//! points are `async fn(self)` so a view can hand them to `spawn_local`
//! directly; the returned `LoadOutcome` is only interesting to tests.

use contracts::shared::listing::ListingPage;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::state::{ListState, LoadMode, LoadOutcome, LoadState};
use crate::shared::api_utils::FetchError;

/// Anything that can fetch one page of a listing.
///
/// HTTP sources hold an `ApiClient`; tests plug in scripted fakes.
pub trait ListingSource: Clone + Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;
    type Filters: Clone + Default + PartialEq + Send + Sync + 'static;

    fn fetch_page(
        &self,
        page_no: usize,
        page_size: usize,
        filters: &Self::Filters,
    ) -> LocalBoxFuture<'static, Result<ListingPage<Self::Item>, FetchError>>;
}

/// Runs a load from an event handler; the outcome only goes to the log
pub fn spawn_load(load: impl Future<Output = LoadOutcome> + 'static) {
    spawn_local(async move {
        let outcome = load.await;
        log::trace!("load finished: {:?}", outcome);
    });
}

pub struct ListLoader<S: ListingSource> {
    state: RwSignal<ListState<S::Item, S::Filters>>,
    source: StoredValue<S>,
    page_size: RwSignal<usize>,
}

impl<S: ListingSource> Clone for ListLoader<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ListingSource> Copy for ListLoader<S> {}

impl<S: ListingSource> ListLoader<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            source: StoredValue::new(source),
            page_size: RwSignal::new(page_size.max(1)),
        }
    }

    pub fn state(&self) -> ReadSignal<ListState<S::Item, S::Filters>> {
        self.state.read_only()
    }

    /// Issues one request. An Append while another request is in flight is
    /// dropped without touching the network.
    pub async fn load(
        self,
        page_no: usize,
        page_size: usize,
        filters: S::Filters,
        mode: LoadMode,
    ) -> LoadOutcome {
        let ticket = self
            .state
            .try_update(|state| state.begin(mode, page_no, &filters))
            .flatten();
        let Some(ticket) = ticket else {
            return LoadOutcome::Skipped;
        };

        let Some(request) = self
            .source
            .try_with_value(|source| source.fetch_page(page_no, page_size, &filters))
        else {
            // owner already disposed
            return LoadOutcome::Stale;
        };
        let result = request.await;

        self.state
            .try_update(|state| state.finish(&ticket, result))
            .unwrap_or(LoadOutcome::Stale)
    }

    /// First page with new applied filters
    pub async fn reload(self, filters: S::Filters) -> LoadOutcome {
        let page_size = self.page_size.get_untracked();
        self.load(0, page_size, filters, LoadMode::Replace).await
    }

    /// Replaces the list with `page_no` under the current filters (table paging)
    pub async fn load_page(self, page_no: usize) -> LoadOutcome {
        let filters = self.state.with_untracked(|state| state.filters().clone());
        let page_size = self.page_size.get_untracked();
        self.load(page_no, page_size, filters, LoadMode::Replace).await
    }

    /// Appends the page after the last loaded one
    pub async fn load_next(self) -> LoadOutcome {
        let next = self.state.with_untracked(|state| {
            state
                .has_more()
                .then(|| (state.page_no() + 1, state.filters().clone()))
        });
        let Some((page_no, filters)) = next else {
            return LoadOutcome::Skipped;
        };
        let page_size = self.page_size.get_untracked();
        self.load(page_no, page_size, filters, LoadMode::Append).await
    }

    /// Re-issues the last failed request
    pub async fn retry(self) -> LoadOutcome {
        let failed = self.state.with_untracked(|state| {
            state
                .failed_request()
                .map(|ticket| (ticket.mode, ticket.page_no, state.filters().clone()))
        });
        let Some((mode, page_no, filters)) = failed else {
            return LoadOutcome::Skipped;
        };
        log::info!("retrying page {}", page_no);
        let page_size = self.page_size.get_untracked();
        self.load(page_no, page_size, filters, mode).await
    }

    /// Changes rows per page and starts over from page 0
    pub async fn set_page_size(self, page_size: usize) -> LoadOutcome {
        self.page_size.set(page_size.max(1));
        let filters = self.state.with_untracked(|state| state.filters().clone());
        self.reload(filters).await
    }

    // ---- reactive accessors ----

    pub fn items(&self) -> Vec<S::Item> {
        self.state.with(|state| state.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.state.with(|state| state.len())
    }

    pub fn total_count(&self) -> usize {
        self.state.with(|state| state.total_count())
    }

    pub fn page_no(&self) -> usize {
        self.state.with(|state| state.page_no())
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn has_more(&self) -> bool {
        self.state.with(|state| state.has_more())
    }

    pub fn is_loading(&self) -> bool {
        self.state
            .with(|state| *state.load_state() == LoadState::Loading)
    }

    pub fn is_loading_more(&self) -> bool {
        self.state
            .with(|state| *state.load_state() == LoadState::LoadingMore)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error().map(str::to_string))
    }

    /// Error of a failed Append: data stays on screen
    pub fn append_error(&self) -> Option<String> {
        self.state.with(|state| {
            state
                .failed_request()
                .filter(|ticket| ticket.mode == LoadMode::Append)
                .and(state.error().map(str::to_string))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paginated_list::filters::FilterCoordinator;
    use contracts::shared::filters::FilterState;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::{join, FutureExt};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    type PageResult = Result<ListingPage<u32>, FetchError>;

    enum Reply {
        Now(PageResult),
        Later(oneshot::Receiver<PageResult>),
    }

    #[derive(Clone, Default)]
    struct FakeSource {
        script: Arc<Mutex<VecDeque<Reply>>>,
        calls: Arc<Mutex<Vec<(usize, usize, FilterState)>>>,
    }

    impl FakeSource {
        fn reply(&self, result: PageResult) {
            self.script.lock().unwrap().push_back(Reply::Now(result));
        }

        fn reply_later(&self) -> oneshot::Sender<PageResult> {
            let (tx, rx) = oneshot::channel();
            self.script.lock().unwrap().push_back(Reply::Later(rx));
            tx
        }

        fn calls(&self) -> Vec<(usize, usize, FilterState)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ListingSource for FakeSource {
        type Item = u32;
        type Filters = FilterState;

        fn fetch_page(
            &self,
            page_no: usize,
            page_size: usize,
            filters: &FilterState,
        ) -> LocalBoxFuture<'static, PageResult> {
            self.calls
                .lock()
                .unwrap()
                .push((page_no, page_size, filters.clone()));
            let reply = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request");
            match reply {
                Reply::Now(result) => futures::future::ready(result).boxed_local(),
                Reply::Later(rx) => async move {
                    rx.await
                        .unwrap_or_else(|_| Err(FetchError::Network("dropped".into())))
                }
                .boxed_local(),
            }
        }
    }

    fn page(range: std::ops::Range<u32>, total: usize, page_no: usize) -> PageResult {
        Ok(ListingPage::new(range.collect(), Some(total), page_no))
    }

    fn setup() -> (Owner, FakeSource, ListLoader<FakeSource>) {
        let owner = Owner::new();
        owner.set();
        let source = FakeSource::default();
        let loader = ListLoader::new(source.clone(), 20);
        (owner, source, loader)
    }

    fn snapshot(loader: &ListLoader<FakeSource>) -> (usize, usize, bool, LoadState) {
        loader.state().with_untracked(|s| {
            (s.len(), s.total_count(), s.has_more(), s.load_state().clone())
        })
    }

    #[test]
    fn test_three_pages_of_45() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 45, 0));
        source.reply(page(20..40, 45, 1));
        source.reply(page(40..45, 45, 2));

        block_on(loader.reload(FilterState::default()));
        assert_eq!(snapshot(&loader), (20, 45, true, LoadState::Idle));

        block_on(loader.load_next());
        assert_eq!(snapshot(&loader), (40, 45, true, LoadState::Idle));

        block_on(loader.load_next());
        assert_eq!(snapshot(&loader), (45, 45, false, LoadState::Idle));

        // nothing more to fetch
        assert_eq!(block_on(loader.load_next()), LoadOutcome::Skipped);
        let pages: Vec<usize> = source.calls().iter().map(|c| c.0).collect();
        assert_eq!(pages, vec![0, 1, 2]);
    }

    #[test]
    fn test_accumulation_is_monotonic() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 100, 0));
        source.reply(page(20..27, 100, 1));
        source.reply(page(27..40, 100, 2));

        block_on(loader.reload(FilterState::default()));
        let mut previous = loader.state().with_untracked(|s| s.items().to_vec());
        for _ in 0..2 {
            block_on(loader.load_next());
            let current = loader.state().with_untracked(|s| s.items().to_vec());
            assert!(current.starts_with(&previous));
            previous = current;
        }
        assert_eq!(previous, (0..40).collect::<Vec<u32>>());
    }

    #[test]
    fn test_replace_failure() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 45, 0));
        source.reply(Err(FetchError::Status(500)));

        block_on(loader.reload(FilterState::default()));
        let outcome = block_on(loader.reload(FilterState::default()));

        assert_eq!(outcome, LoadOutcome::Failed);
        let (len, _, has_more, load_state) = snapshot(&loader);
        assert_eq!(len, 0);
        assert!(!has_more);
        assert_eq!(load_state, LoadState::Error("Server error: 500".into()));
        assert!(!loader.state().with_untracked(|s| s.is_in_flight()));
    }

    #[test]
    fn test_append_failure_then_retry() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 45, 0));
        source.reply(Err(FetchError::Timeout(30000)));
        source.reply(page(20..40, 45, 1));

        block_on(loader.reload(FilterState::default()));
        assert_eq!(block_on(loader.load_next()), LoadOutcome::Failed);
        let (len, _, has_more, load_state) = snapshot(&loader);
        assert_eq!(len, 20);
        assert!(has_more);
        assert!(matches!(load_state, LoadState::Error(_)));
        assert!(loader.state().with_untracked(|s| !s.can_load_more()));

        assert_eq!(block_on(loader.retry()), LoadOutcome::Applied);
        assert_eq!(snapshot(&loader), (40, 45, true, LoadState::Idle));
        let pages: Vec<usize> = source.calls().iter().map(|c| c.0).collect();
        assert_eq!(pages, vec![0, 1, 1]);
    }

    #[test]
    fn test_second_append_in_flight_is_dropped() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 45, 0));
        block_on(loader.reload(FilterState::default()));

        let tx = source.reply_later();
        let (first, second) = block_on(async {
            join!(loader.load_next(), async {
                let outcome = loader.load_next().await;
                let _ = tx.send(page(20..40, 45, 1));
                outcome
            })
        });

        assert_eq!(first, LoadOutcome::Applied);
        assert_eq!(second, LoadOutcome::Skipped);
        assert_eq!(source.calls().len(), 2);
        assert_eq!(snapshot(&loader), (40, 45, true, LoadState::Idle));
    }

    #[test]
    fn test_append_resolving_after_replace_is_discarded() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 45, 0));
        block_on(loader.reload(FilterState::default()));

        let slow_append = source.reply_later();
        source.reply(page(100..103, 3, 0));
        let filtered = FilterState {
            search_text: "loft".into(),
            ..FilterState::default()
        };

        let (append, replace) = block_on(async {
            join!(loader.load_next(), async {
                let outcome = loader.reload(filtered.clone()).await;
                let _ = slow_append.send(page(20..40, 45, 1));
                outcome
            })
        });

        assert_eq!(replace, LoadOutcome::Applied);
        assert_eq!(append, LoadOutcome::Stale);
        assert_eq!(
            loader.state().with_untracked(|s| s.items().to_vec()),
            vec![100, 101, 102]
        );
        assert_eq!(loader.state().with_untracked(|s| s.filters().clone()), filtered);
    }

    #[test]
    fn test_apply_issues_one_replace_with_applied_filters() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..20, 45, 0));
        source.reply(page(20..40, 45, 1));
        block_on(loader.reload(FilterState::default()));
        block_on(loader.load_next());

        let mut coordinator = FilterCoordinator::default();
        coordinator.set_search_text("beach");
        coordinator.set_minimum_rating(4.0);

        let tx = source.reply_later();
        let applied = coordinator.apply();
        let (outcome, observed) = block_on(async {
            join!(loader.reload(applied.clone()), async {
                // request is in flight: list already empty
                let observed = snapshot(&loader);
                let _ = tx.send(page(0..4, 4, 0));
                observed
            })
        });

        assert_eq!(observed, (0, 0, false, LoadState::Loading));
        assert_eq!(outcome, LoadOutcome::Applied);
        let calls = source.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2], (0, 20, applied));
        assert_eq!(calls[2].2.search_text, "beach");
    }

    #[test]
    fn test_load_page_keeps_filters_and_page_size() {
        let (_owner, source, loader) = setup();
        source.reply(page(0..10, 30, 0));
        source.reply(page(20..30, 30, 2));
        source.reply(page(0..10, 30, 0));

        let filters = FilterState {
            search_text: "smith".into(),
            ..FilterState::default()
        };
        block_on(loader.reload(filters.clone()));
        block_on(loader.load_page(2));
        assert_eq!(loader.state().with_untracked(|s| s.page_no()), 2);
        assert_eq!(loader.state().with_untracked(|s| s.len()), 10);

        block_on(loader.set_page_size(10));
        let calls = source.calls();
        assert_eq!(calls[1], (2, 20, filters.clone()));
        assert_eq!(calls[2], (0, 10, filters));
    }
}
