use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// キー、またはフィールドが存在しない。サーバーはどちらの場合もnullを返すため区別できない。
    #[error("field {field:?} not found in hash {key:?}")]
    NotFound { key: String, field: String },

    #[error("server error: {0}")]
    Server(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("connection io error: {0}")]
    Io(#[from] io::Error),
}
