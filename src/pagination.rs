//! Pager window computation and pagination metadata.

use serde::Serialize;
use thiserror::Error;

use crate::MAX_VISIBLE_PAGES;

/// Errors produced by malformed pagination inputs. These are programmer
/// errors and are reported instead of silently producing a broken pager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page numbers are 1-based, got 0")]
    ZeroPage,

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("max visible pages must be an odd number of at least 3, got {0}")]
    InvalidMaxVisible(usize),
}

/// A single pager control: a numbered button or an ellipsis gap.
///
/// Serializes as a number or `null`, so templates can keep treating the
/// window as a plain list of optional page numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Window arithmetic with already-validated inputs.
fn window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= max_visible {
        return (1..=total_pages).map(Page).collect();
    }

    let half = max_visible / 2;
    let mut pages = Vec::with_capacity(max_visible + 2);

    if current_page <= half + 1 {
        // Near the start: run from page 1, single gap before the last page.
        pages.extend((1..max_visible).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    } else if current_page >= total_pages - half {
        // Near the end: page 1, gap, then the closing run.
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((total_pages - max_visible + 2..=total_pages).map(Page));
    } else {
        // Middle: both anchors with a tight window around the current page.
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((current_page - 1..=current_page + 1).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    }

    pages
}

/// Computes the ordered pager markers for the given position.
///
/// An empty window is returned when there are no pages; the caller hides the
/// pager entirely in that case. `max_visible` must be an odd number of at
/// least three so the middle window stays centered on the current page.
pub fn page_window(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Result<Vec<PageMarker>, PaginationError> {
    if max_visible < 3 || max_visible % 2 == 0 {
        return Err(PaginationError::InvalidMaxVisible(max_visible));
    }
    if current_page == 0 {
        return Err(PaginationError::ZeroPage);
    }

    Ok(window(current_page, total_pages, max_visible))
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Moves forward one page, staying put when already on the last page.
pub fn next_page(current_page: usize, total_pages: usize) -> usize {
    if current_page < total_pages {
        current_page + 1
    } else {
        current_page
    }
}

/// Moves back one page, staying put when already on the first page.
pub fn previous_page(current_page: usize) -> usize {
    if current_page > 1 { current_page - 1 } else { current_page }
}

/// Jumps to the first page.
pub fn first_page() -> usize {
    1
}

/// Jumps to the last page.
pub fn last_page(total_pages: usize) -> usize {
    total_pages.max(1)
}

/// Position summary for the "showing X–Y of Z results" line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item on the current page.
    pub start_item: usize,
    /// 1-based index of the last item on the current page.
    pub end_item: usize,
}

impl PageInfo {
    pub fn new(
        current_page: usize,
        page_size: usize,
        total_items: usize,
    ) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        if current_page == 0 {
            return Err(PaginationError::ZeroPage);
        }

        // An empty result set still renders as "page 1 of 1, 0 results".
        let total_pages = total_items.div_ceil(page_size).max(1);

        Ok(Self {
            current_page,
            total_pages,
            total_items,
            start_item: (current_page - 1) * page_size + 1,
            end_item: (current_page * page_size).min(total_items),
        })
    }
}

/// A page of items together with ready-to-render pager markers.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageMarker>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = window(current_page, total_pages, MAX_VISIBLE_PAGES);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}
