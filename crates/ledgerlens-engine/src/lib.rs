pub mod analysis;
pub mod commands;
pub mod contracts;
pub mod error;
mod ingest;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{EngineError, EngineResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
