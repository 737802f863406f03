//! Table state and the events that change it.
//!
//! The controller owns the current headers, rows, per-header sort state, and
//! filter term. Each event replaces that snapshot synchronously; the actual
//! work is delegated to [`flatten_records`], [`sort_rows`], and [`filter_rows`].

use tracing::{debug, info};

use tabview_model::{FlatRow, HeaderList, SortDirection, SortState, SourceRecord};

use crate::filter::filter_rows;
use crate::flatten::{FlattenPlan, flatten_records};
use crate::sort::sort_rows;

/// Placeholder shown in place of rows when nothing matches the filter.
pub const NO_MATCHING_DATA: &str = "No matching data";

/// A discrete user or data event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BatchLoaded(Vec<SourceRecord>),
    HeaderClicked(String),
    FilterChanged(String),
}

/// What the display layer renders for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub headers: &'a HeaderList,
    pub rows: Vec<&'a FlatRow>,
    /// Header and order most recently applied by a click.
    pub active_sort: Option<(&'a str, SortDirection)>,
}

impl TableView<'_> {
    /// True when the placeholder row should be shown instead of data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableController {
    plan: FlattenPlan,
    headers: HeaderList,
    rows: Vec<FlatRow>,
    sort_state: SortState,
    filter_term: String,
    active_sort: Option<(String, SortDirection)>,
}

impl TableController {
    pub fn new(plan: FlattenPlan) -> Self {
        Self {
            plan,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::BatchLoaded(records) => self.load_batch(&records),
            Event::HeaderClicked(header) => {
                self.click_header(&header);
            }
            Event::FilterChanged(term) => self.set_filter(term),
        }
    }

    /// Replace the batch: re-derive headers and rows, reset every header to `Unsorted`.
    ///
    /// The filter term survives a reload.
    pub fn load_batch(&mut self, records: &[SourceRecord]) {
        let batch = flatten_records(records, &self.plan);
        self.sort_state = SortState::for_headers(&batch.headers);
        self.headers = batch.headers;
        self.rows = batch.rows;
        self.active_sort = None;
        info!(
            row_count = self.rows.len(),
            header_count = self.headers.len(),
            "batch loaded"
        );
    }

    /// Sort by `header` using its current direction and advance its toggle.
    ///
    /// Returns the order that was applied. Other headers keep their state.
    pub fn click_header(&mut self, header: &str) -> SortDirection {
        let current = self.sort_state.direction(header);
        let (rows, next) = sort_rows(&self.rows, header, current);
        let applied = if current.sorts_ascending() {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        self.rows = rows;
        self.sort_state.set(header, next);
        self.active_sort = Some((header.to_string(), applied));
        debug!(header, %applied, %next, "header clicked");
        applied
    }

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter_term = term.into();
    }

    /// Current rows narrowed by the filter term, recomputed on every call.
    pub fn visible_rows(&self) -> Vec<&FlatRow> {
        filter_rows(&self.rows, &self.filter_term)
    }

    pub fn view(&self) -> TableView<'_> {
        TableView {
            headers: &self.headers,
            rows: self.visible_rows(),
            active_sort: self
                .active_sort
                .as_ref()
                .map(|(header, direction)| (header.as_str(), *direction)),
        }
    }

    pub fn plan(&self) -> &FlattenPlan {
        &self.plan
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    pub fn direction(&self, header: &str) -> SortDirection {
        self.sort_state.direction(header)
    }

    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }
}
