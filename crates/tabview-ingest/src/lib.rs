pub mod config;
pub mod error;
pub mod fetch;
pub mod payload;

pub use config::{DEFAULT_ENDPOINT, DEFAULT_RESULTS, DEFAULT_SELECT, FetchConfig};
pub use error::{IngestError, Result};
pub use fetch::fetch_records;
pub use payload::{RESULTS_KEY, load_records, parse_payload, records_from_value, select_field};
