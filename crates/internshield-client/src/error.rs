use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("scoring service returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("scoring service error: status={status}, body={body}")]
    Api { status: u16, body: String },
}
