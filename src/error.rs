use thiserror::Error;

/// Errors that can occur in demand forecasting and policy calculation.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-monotonic timestamps: {0}")]
    NonMonotonicTimestamps(String),

    #[error("Analysis error: {0}")]
    AnalysisError(String),
}
