use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the bill engine and its storage boundary.
#[derive(Debug, Error)]
pub enum BillsError {
    #[error("one-time bills have no next due date")]
    CycleNotAdvanceable,
    #[error("bill `{0}` is already in a terminal paid state")]
    TerminalPayment(String),
    #[error("batch rejected at bill `{bill}`: {source}")]
    BatchRejected {
        bill: String,
        #[source]
        source: Box<BillsError>,
    },
    #[error("bill not found: {0}")]
    BillNotFound(Uuid),
    #[error("a bill named `{0}` already exists")]
    DuplicateName(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("persistence error: {0}")]
    Storage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BillsError>;
