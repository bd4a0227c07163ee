// src/application/paginator.rs
use crate::constants::{ELLIPSIS, ELLIPSIS_THRESHOLD, ITEMS_PER_PAGE};
use serde::{Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

/// Current page and page size of a list screen.
///
/// Invariant: `current_page >= 1`. The upper bound depends on the
/// collection and is enforced by [`PageState::change_page`] and
/// [`PageState::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: NonZeroUsize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl PageState {
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page()).max(1)
    }

    /// Move to `target`, or stay put when it is outside `1..=total_pages`.
    pub fn change_page(self, target: usize, total_pages: usize) -> Self {
        if target < 1 || target > total_pages {
            debug!(target, total_pages, "Ignoring out of range page");
            return self;
        }
        Self {
            current_page: target,
            ..self
        }
    }

    pub fn first(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    /// Pull the current page back into range after the collection shrank.
    pub fn clamp(self, total_pages: usize) -> Self {
        Self {
            current_page: self.current_page.clamp(1, total_pages.max(1)),
            ..self
        }
    }
}

/// One page of a collection plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub start_item: usize,
    pub end_item: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice out the page `state` points at.
///
/// `start_item` and `end_item` are 1-based and inclusive; both are 0 for an
/// empty collection.
pub fn page<'a, T>(records: &'a [T], state: &PageState) -> Page<'a, T> {
    let total_items = records.len();
    let total_pages = state.total_pages(total_items);
    let per_page = state.items_per_page();
    let current = state.current_page.min(total_pages);

    if total_items == 0 {
        return Page {
            items: &records[..0],
            start_item: 0,
            end_item: 0,
            total_items,
            total_pages,
        };
    }

    let offset = (current - 1) * per_page;
    let end = (current * per_page).min(total_items);
    Page {
        items: &records[offset..end],
        start_item: offset + 1,
        end_item: end,
        total_items,
        total_pages,
    }
}

/// Entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Number(n) => write!(f, "{}", n),
            PageLink::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Number(n) => serializer.serialize_u64(*n as u64),
            PageLink::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Compressed page-number strip around `current`.
///
/// Up to the ellipsis threshold every page is listed. Beyond it the strip
/// keeps the first and last page plus every page within `delta` of
/// `current`, and a single ellipsis replaces each run of skipped pages.
pub fn renderable_page_numbers(current: usize, total: usize, delta: usize) -> Vec<PageLink> {
    if total <= ELLIPSIS_THRESHOLD {
        return (1..=total).map(PageLink::Number).collect();
    }

    let mut links = Vec::new();
    let mut previous: Option<usize> = None;
    for page in 1..=total {
        let shown = page == 1 || page == total || page.abs_diff(current) <= delta;
        if !shown {
            continue;
        }
        if let Some(prev) = previous {
            if page - prev > 1 {
                links.push(PageLink::Ellipsis);
            }
        }
        links.push(PageLink::Number(page));
        previous = Some(page);
    }
    links
}
