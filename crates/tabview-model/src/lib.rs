pub mod error;
pub mod record;
pub mod row;
pub mod sorting;
pub mod value;

pub use error::{ModelError, Result};
pub use record::{SourceRecord, SourceValue};
pub use row::{FlatRow, HeaderList};
pub use sorting::{SortDirection, SortState};
pub use value::Scalar;
