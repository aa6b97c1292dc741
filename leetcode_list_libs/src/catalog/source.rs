use crate::catalog::model::{ListOptions, ProblemMetadata};
use async_trait::async_trait;
use thiserror::Error;

type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run the listing command")]
    IoError(#[from] std::io::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("listing command exited with {status}: {stderr}")]
    CommandError { status: String, stderr: String },
    #[error("{0}")]
    UnexpectedError(String),
}

/// Upstream that produces the raw problem table and the metadata tables.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn list_problems(&self, options: &ListOptions) -> Result<String>;
    async fn companies_and_tags(&self) -> Result<ProblemMetadata>;
}
