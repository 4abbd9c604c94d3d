use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrollParseError {
    #[error("Unable to read scroll {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ParseResult<T> = Result<T, ScrollParseError>;
