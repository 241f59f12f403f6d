//! Pending vs applied filters.
//!
//! Form controls edit the pending copy; only `apply()`/`clear()` hand a
//! value to the loader.

use contracts::shared::filters::{FilterState, PriceRange, MAX_RATING};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCoordinator {
    pending: FilterState,
    applied: FilterState,
}

impl FilterCoordinator {
    pub fn pending(&self) -> &FilterState {
        &self.pending
    }

    pub fn applied(&self) -> &FilterState {
        &self.applied
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.pending.search_text = text.into();
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.pending.price_range = PriceRange::new(min, max);
    }

    pub fn set_minimum_rating(&mut self, rating: f64) {
        self.pending.minimum_rating = if rating.is_finite() {
            rating.clamp(0.0, MAX_RATING)
        } else {
            0.0
        };
    }

    /// Commits pending filters; the caller reloads page 0 with the result
    pub fn apply(&mut self) -> FilterState {
        self.applied = self.pending.clone();
        log::debug!("filters applied: {:?}", self.applied);
        self.applied.clone()
    }

    /// Resets pending and applied to defaults
    pub fn clear(&mut self) -> FilterState {
        self.pending = FilterState::default();
        self.applied = FilterState::default();
        self.applied.clone()
    }

    /// Drops unapplied edits (drawer closed without Apply)
    pub fn discard(&mut self) {
        self.pending = self.applied.clone();
    }

    pub fn is_dirty(&self) -> bool {
        self.pending != self.applied
    }

    pub fn active_filter_count(&self) -> usize {
        self.applied.active_count()
    }
}
