use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No posts found for analysis")]
    NoPosts,

    #[error("Post with ID {0} not found")]
    PostNotFound(i64),

    /// The model reply could not be read as JSON; `raw` keeps the reply for inspection.
    #[error("Failed to parse response as JSON")]
    Parse { raw: String },

    #[error("Unexpected model response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM request failed: {0}")]
    Llm(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
