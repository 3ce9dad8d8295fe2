//! Range-based pagination
//!
//! Clients ask for a window of a collection with `Range: items=START-END`
//! (0-based, both ends inclusive) and get back the slice plus a
//! `Content-Range: items START-END/TOTAL` describing what was actually
//! returned.

use serde::{Deserialize, Serialize};

/// Unit named in `Range`/`Content-Range` headers
pub const RANGE_UNIT: &str = "items";

/// A requested window, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRequest {
    start: usize,
    end: usize,
}

impl RangeRequest {
    /// `None` when `end < start`
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (end >= start).then_some(Self { start, end })
    }

    /// Parse a `Range` header value such as `items=0-9`.
    ///
    /// Anything that is not a well-formed, non-inverted items range yields
    /// `None`, which callers treat as "no range".
    pub fn parse_header(value: &str) -> Option<Self> {
        let spec = value.trim().strip_prefix(RANGE_UNIT)?.trim_start();
        let spec = spec.strip_prefix('=')?.trim();
        let (start, end) = spec.split_once('-')?;
        let start = start.trim().parse::<usize>().ok()?;
        let end = end.trim().parse::<usize>().ok()?;
        Self::new(start, end)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Maximum number of items the window can hold
    pub fn limit(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }
}

/// Offset/limit form handed to repositories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagingOptions {
    pub start: usize,
    pub limit: Option<usize>,
}

impl PagingOptions {
    /// Everything from index 0
    pub fn all() -> Self {
        Self::default()
    }
}

impl From<RangeRequest> for PagingOptions {
    fn from(range: RangeRequest) -> Self {
        Self {
            start: range.start(),
            limit: Some(range.limit()),
        }
    }
}

impl From<Option<RangeRequest>> for PagingOptions {
    fn from(range: Option<RangeRequest>) -> Self {
        range.map(Self::from).unwrap_or_else(Self::all)
    }
}

/// A slice of a collection together with the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub start: usize,
    pub total: usize,
}

impl<T> Page<T> {
    /// Apply `options` to an ordered collection
    pub fn slice(all: &[T], options: PagingOptions) -> Self
    where
        T: Clone,
    {
        let total = all.len();
        let start = options.start.min(total);
        let end = match options.limit {
            Some(limit) => start.saturating_add(limit).min(total),
            None => total,
        };
        Self {
            items: all[start..end].to_vec(),
            start: options.start,
            total,
        }
    }

    /// Bounds of what was actually returned
    pub fn window(&self) -> RangeWindow {
        RangeWindow {
            start: self.start,
            count: self.items.len(),
            total: self.total,
        }
    }
}

/// The returned window of a paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeWindow {
    pub start: usize,
    pub count: usize,
    pub total: usize,
}

impl RangeWindow {
    /// Inclusive index of the last returned item, `None` for an empty window
    pub fn end(&self) -> Option<usize> {
        self.count.checked_sub(1).map(|last| self.start + last)
    }

    /// `Content-Range` header value, `items */TOTAL` when nothing was returned
    pub fn content_range(&self) -> String {
        match self.end() {
            Some(end) => format!("{} {}-{}/{}", RANGE_UNIT, self.start, end, self.total),
            None => format!("{} */{}", RANGE_UNIT, self.total),
        }
    }
}
