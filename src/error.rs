use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid calendar day `{value}`: {reason}")]
    InvalidDay { value: String, reason: String },

    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
}
