use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("target already listed: {company}:{url}")]
    Duplicate { company: String, url: String },

    #[error("no target matches '{0}'")]
    NotFound(String),

    #[error("invalid target: {0}")]
    Invalid(#[from] careerwatch_core::CoreError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
