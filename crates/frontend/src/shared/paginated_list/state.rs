//! State of a paginated list: accumulated items, derived flags and the
//! bookkeeping that keeps at most one request in flight.
//!
//! Every accepted request gets a [`RequestTicket`]. A Replace bumps the
//! generation, so results of requests issued before it are discarded when
//! they resolve. Results are also applied strictly in issue order (`seq`).

use contracts::shared::listing::ListingPage;

use crate::shared::api_utils::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Result overwrites the list (initial load, filter change, table page)
    Replace,
    /// Result is appended (infinite scroll)
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    LoadingMore,
    Error(String),
}

impl LoadState {
    pub fn is_busy(&self) -> bool {
        matches!(self, LoadState::Loading | LoadState::LoadingMore)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub generation: u64,
    pub mode: LoadMode,
    pub page_no: usize,
}

/// What happened to a load call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// Append dropped: another request was in flight
    Skipped,
    /// Result arrived after a newer Replace and was ignored
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListState<T, F> {
    items: Vec<T>,
    total_count: usize,
    page_no: usize,
    has_more: bool,
    load_state: LoadState,
    /// Filters of the current result set (set by every Replace)
    filters: F,
    in_flight: Option<RequestTicket>,
    failed: Option<RequestTicket>,
    next_seq: u64,
    last_applied_seq: u64,
    generation: u64,
}

impl<T, F: Default> Default for ListState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_no: 0,
            has_more: false,
            load_state: LoadState::Idle,
            filters: F::default(),
            in_flight: None,
            failed: None,
            next_seq: 0,
            last_applied_seq: 0,
            generation: 0,
        }
    }
}

impl<T, F: Clone> ListState<T, F> {
    /// Registers a request. Returns `None` for an Append while another
    /// request is in flight; a Replace is always accepted and clears the list.
    pub fn begin(&mut self, mode: LoadMode, page_no: usize, filters: &F) -> Option<RequestTicket> {
        if mode == LoadMode::Append {
            if let Some(current) = &self.in_flight {
                log::debug!(
                    "append of page {} skipped: request {} in flight",
                    page_no,
                    current.seq
                );
                return None;
            }
        }

        self.next_seq += 1;
        match mode {
            LoadMode::Replace => {
                self.generation += 1;
                self.filters = filters.clone();
                self.items.clear();
                self.total_count = 0;
                self.has_more = false;
                self.page_no = page_no;
                self.load_state = LoadState::Loading;
            }
            LoadMode::Append => {
                self.load_state = LoadState::LoadingMore;
            }
        }
        self.failed = None;

        let ticket = RequestTicket {
            seq: self.next_seq,
            generation: self.generation,
            mode,
            page_no,
        };
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    /// Applies the result of `ticket`. Clears the in-flight flag on every path
    /// of the current request, success or failure.
    pub fn finish(
        &mut self,
        ticket: &RequestTicket,
        result: Result<ListingPage<T>, FetchError>,
    ) -> LoadOutcome {
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|current| current.seq == ticket.seq);
        if is_current {
            self.in_flight = None;
        }

        if !is_current || ticket.generation != self.generation || ticket.seq <= self.last_applied_seq {
            log::debug!(
                "discarding stale result of request {} (generation {}, current {})",
                ticket.seq,
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }
        self.last_applied_seq = ticket.seq;

        match result {
            Ok(page) => {
                let received = page.items.len();
                match ticket.mode {
                    LoadMode::Replace => self.items = page.items,
                    LoadMode::Append => self.items.extend(page.items),
                }
                self.total_count = page.total_count.unwrap_or(self.items.len());
                self.has_more = self.items.len() < self.total_count;
                self.page_no = ticket.page_no;
                self.load_state = LoadState::Idle;
                log::debug!(
                    "page {} applied: +{} items, {}/{} loaded",
                    ticket.page_no,
                    received,
                    self.items.len(),
                    self.total_count
                );
                LoadOutcome::Applied
            }
            Err(error) => {
                log::warn!("loading page {} failed: {}", ticket.page_no, error);
                if ticket.mode == LoadMode::Replace {
                    self.items.clear();
                    self.total_count = 0;
                    self.has_more = false;
                }
                self.load_state = LoadState::Error(error.to_string());
                self.failed = Some(ticket.clone());
                LoadOutcome::Failed
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Last successfully loaded page (or the page a Replace is loading)
    pub fn page_no(&self) -> usize {
        self.page_no
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.load_state.error()
    }

    /// The request to re-issue on retry
    pub fn failed_request(&self) -> Option<&RequestTicket> {
        self.failed.as_ref()
    }

    /// Whether a scroll-driven Append may start now
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.is_in_flight() && !self.load_state.is_busy() && self.error().is_none()
    }
}
