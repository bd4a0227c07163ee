// src/application/list_view.rs
//
// Holds a screen's latest source snapshot, filters and page, and re-derives
// the visible page after every mutation. Single-threaded; a newer snapshot
// always replaces the previous one.
use crate::application::filter::{self, FilterState, Filterable};
use crate::application::paginator::{self, PageLink, PageState};
use crate::constants::{ITEMS_PER_PAGE, PAGE_DELTA};
use serde::Serialize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use tracing::{debug, instrument};

/// Page size and strip width of a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub items_per_page: NonZeroUsize,
    pub page_delta: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            items_per_page: NonZeroUsize::new(ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN),
            page_delta: PAGE_DELTA,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceState<R> {
    Pending,
    Loaded(Vec<R>),
    Failed(String),
}

/// Which of the distinct list outcomes the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// Source not delivered yet.
    Loading,
    /// The last fetch failed.
    Failed,
    /// Source delivered, but the screen has no records at all.
    Empty,
    /// Records exist, none match the active filters.
    NoMatches,
    Ready,
}

/// Derived view handed to presenters.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<'a, R> {
    pub status: ListStatus,
    pub items: Vec<&'a R>,
    pub current_page: usize,
    pub start_item: usize,
    pub end_item: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<PageLink>,
}

#[derive(Debug, Clone)]
pub struct ListView<R: Filterable> {
    source: SourceState<R>,
    fixed: FilterState<R::Field>,
    filters: FilterState<R::Field>,
    page: PageState,
    page_delta: usize,
    base_len: usize,
    visible: Vec<usize>,
}

impl<R: Filterable> ListView<R> {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            source: SourceState::Pending,
            fixed: FilterState::new(),
            filters: FilterState::new(),
            page: PageState::new(settings.items_per_page),
            page_delta: settings.page_delta,
            base_len: 0,
            visible: Vec::new(),
        }
    }

    /// Add a constraint that user filter changes never clear, such as the
    /// question type of the question bank.
    pub fn with_fixed(mut self, field: R::Field, value: &str) -> Self {
        self.fixed.set(field, Some(value));
        self.recompute();
        self
    }

    pub fn on_source_update(&mut self, records: Vec<R>) {
        debug!(records = records.len(), "Source updated");
        self.source = SourceState::Loaded(records);
        self.recompute();
    }

    pub fn on_source_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "Source failed");
        self.source = SourceState::Failed(message);
        self.recompute();
    }

    /// Change one filter and go back to the first page.
    pub fn on_filter_change(&mut self, field: R::Field, value: Option<&str>) {
        debug!(?field, ?value, "Filter changed");
        self.filters.set(field, value);
        self.page = self.page.first();
        self.recompute();
    }

    /// Move to `target`; out of range requests are ignored.
    pub fn change_page(&mut self, target: usize) {
        let total_pages = self.page.total_pages(self.visible.len());
        self.page = self.page.change_page(target, total_pages);
        self.recompute();
    }

    #[instrument(level = "debug", skip(self))]
    pub fn recompute(&mut self) {
        let SourceState::Loaded(records) = &self.source else {
            self.base_len = 0;
            self.visible.clear();
            self.page = self.page.first();
            return;
        };

        let base = filter::matching_indices(records, &self.fixed);
        self.base_len = base.len();
        self.visible = base
            .into_iter()
            .filter(|&i| self.filters.matches(&records[i]))
            .collect();
        self.page = self.page.clamp(self.page.total_pages(self.visible.len()));
        debug!(
            base = self.base_len,
            visible = self.visible.len(),
            page = self.page.current_page(),
            "Recomputed list"
        );
    }

    pub fn derive(&self) -> ListPage<'_, R> {
        let visible: Vec<&R> = match &self.source {
            SourceState::Loaded(records) => self.visible.iter().map(|&i| &records[i]).collect(),
            _ => Vec::new(),
        };
        let page = paginator::page(&visible, &self.page);
        let current_page = self.page.current_page();

        ListPage {
            status: self.status(),
            items: page.items.to_vec(),
            current_page,
            start_item: page.start_item,
            end_item: page.end_item,
            total_items: page.total_items,
            total_pages: page.total_pages,
            page_numbers: paginator::renderable_page_numbers(
                current_page,
                page.total_pages,
                self.page_delta,
            ),
        }
    }

    pub fn status(&self) -> ListStatus {
        match &self.source {
            SourceState::Pending => ListStatus::Loading,
            SourceState::Failed(_) => ListStatus::Failed,
            SourceState::Loaded(_) if self.base_len == 0 => ListStatus::Empty,
            SourceState::Loaded(_) if self.visible.is_empty() => ListStatus::NoMatches,
            SourceState::Loaded(_) => ListStatus::Ready,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.source, SourceState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.source {
            SourceState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Raw record count of the last snapshot, `None` until one arrived.
    pub fn source_len(&self) -> Option<usize> {
        match &self.source {
            SourceState::Loaded(records) => Some(records.len()),
            _ => None,
        }
    }

    /// Records left after the fixed screen constraints.
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// Records left after all constraints.
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filters(&self) -> &FilterState<R::Field> {
        &self.filters
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Sorted unique values of `field` among records passing the fixed
    /// constraints, for populating filter dropdowns.
    pub fn distinct_values(&self, field: R::Field) -> Vec<String> {
        let SourceState::Loaded(records) = &self.source else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|r| self.fixed.matches(*r))
            .map(|r| r.field_value(field))
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
