use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid city {city:?} in config: history has {len} samples, expected {expected}")]
    InvalidHistory {
        city: String,
        len: usize,
        expected: usize,
    },

    #[error("unable to locate user data directory")]
    NoDataDir,
}

pub type AppResult<T> = Result<T, AppError>;
