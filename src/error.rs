#[derive(Debug, thiserror::Error)]
pub enum SalesError {
    /// Transport failure or non-success HTTP status from the sales API.
    #[error("Data fetch error: {0}")]
    DataFetch(#[from] reqwest::Error),

    /// Response body does not match the transaction schema.
    #[error("Data format error: {0}")]
    DataFormat(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SalesError>;
