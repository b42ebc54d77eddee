use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for cdcat.")]
    Config,
}

/// Errors that can occur loading or saving a catalogue file.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0} is a directory")]
    PathIsDirectory(PathBuf),
    #[error("{0} has the wrong extension (wanted {1})")]
    WrongExtension(PathBuf, String),
    #[error("{0} does not exist")]
    FileNotFound(PathBuf),
    #[error("Record {line} is missing an album or an artist")]
    MissingKey { line: usize },
    #[error("Record {line} has an invalid year: {value:?}")]
    InvalidYear { line: usize, value: String },
}
