//! Batch source selection and loading.
//!
//! A failed fetch or file read never aborts the command: it is logged and
//! the table starts from an empty batch.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use tracing::{Level, enabled, error, trace};

use tabview_core::{FlattenPlan, TableController};
use tabview_ingest::{
    DEFAULT_ENDPOINT, DEFAULT_RESULTS, DEFAULT_SELECT, FetchConfig, IngestError, fetch_records,
    load_records,
};
use tabview_model::SourceRecord;

use crate::logging::redact_value;

/// Where the batch comes from and how it is flattened.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Read records from a JSON file instead of fetching them.
    #[arg(long = "input", value_name = "FILE", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Provider endpoint.
    #[arg(long = "url", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Number of records requested from the provider.
    #[arg(long = "results", value_name = "N", default_value_t = DEFAULT_RESULTS)]
    pub results: u32,

    /// Dotted field path projected out of every record.
    #[arg(long = "select", value_name = "PATH", default_value = DEFAULT_SELECT)]
    pub select: String,

    /// Use whole records instead of projecting `--select`.
    #[arg(long = "no-select")]
    pub no_select: bool,

    /// Record shape used to flatten nested fields.
    #[arg(long = "shape", value_enum, default_value = "location")]
    pub shape: ShapeArg,

    /// Request timeout in seconds (no timeout by default).
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            input: None,
            url: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
            select: DEFAULT_SELECT.to_string(),
            no_select: false,
            shape: ShapeArg::Location,
            timeout_secs: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// Lift street, coordinates, and timezone fields into named columns.
    Location,
    /// Expand every nested field in place.
    Generic,
}

impl SourceArgs {
    pub fn flatten_plan(&self) -> FlattenPlan {
        match self.shape {
            ShapeArg::Location => FlattenPlan::location(),
            ShapeArg::Generic => FlattenPlan::generic(),
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default()
            .with_endpoint(self.url.as_str())
            .with_results(self.results)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
            .with_select(self.selected_path().map(str::to_string))
    }

    fn selected_path(&self) -> Option<&str> {
        (!self.no_select).then_some(self.select.as_str())
    }
}

/// Read the batch from a file or the provider.
pub fn load_source(args: &SourceArgs) -> Result<Vec<SourceRecord>, IngestError> {
    match &args.input {
        Some(path) => load_records(path, args.selected_path()),
        None => fetch_records(&args.fetch_config()),
    }
}

/// Load the batch into a fresh controller.
///
/// A failed fetch or load is logged and leaves the batch empty.
pub fn load_controller(args: &SourceArgs) -> TableController {
    let mut controller = TableController::new(args.flatten_plan());
    let records = load_source(args).unwrap_or_else(|error| {
        error!(%error, "failed to load records; continuing with an empty batch");
        Vec::new()
    });
    controller.load_batch(&records);
    if enabled!(Level::TRACE) {
        for (index, row) in controller.rows().iter().enumerate() {
            for (header, value) in row.iter() {
                let text = value.to_search_text();
                trace!(row = index, header, value = redact_value(&text), "cell");
            }
        }
    }
    controller
}
