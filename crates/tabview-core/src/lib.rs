//! Transformation pipeline behind the tabview table.
//!
//! - [`keys`] derives the header list from a nested record.
//! - [`flatten`] turns nested records into flat rows.
//! - [`sort`] orders rows by one column and advances its toggle.
//! - [`filter`] narrows rows by a search term.
//! - [`controller`] holds the table state and applies events.

pub mod controller;
pub mod filter;
pub mod flatten;
pub mod keys;
pub mod sort;

pub use controller::{Event, NO_MATCHING_DATA, TableController, TableView};
pub use filter::{filter_rows, row_matches};
pub use flatten::{FlatBatch, FlattenPlan, Splice, flatten_record, flatten_records};
pub use keys::extract_keys;
pub use sort::{compare_rows, compare_scalars, sort_rows};
