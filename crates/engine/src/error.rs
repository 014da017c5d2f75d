//! Errors the engine can surface.
//!
//! Aggregation itself is total: filters, pricing and report building never
//! fail on well-typed input. Only the store adapter can error, on I/O or
//! when a persisted blob does not decode.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("malformed collection: {0}")]
    Serialization(#[from] serde_json::Error),
}
