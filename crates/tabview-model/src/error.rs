use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("expected a JSON object or array for a record, found {found}")]
    NotARecord { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
