use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TubelateError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("network error: {0}")]
    Connection(String),
    #[error("request failed with status code {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("video with ID {video_id} not found")]
    NotFound { video_id: String },
    #[error("no translations found")]
    NoTranslation,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type TubelateResult<T> = Result<T, TubelateError>;
