use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoadError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    InvalidData(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Serialization(err) => write!(f, "serialization error: {err}"),
            LoadError::Io(err) => write!(f, "io error: {err}"),
            LoadError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Serialization(err) => Some(err),
            LoadError::Io(err) => Some(err),
            LoadError::InvalidData(_) => None,
        }
    }
}

impl From<SerdeJsonError> for LoadError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for LoadError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

pub mod file;

pub use file::{
    bundled_schedule, load_schedule_from_json, load_venue_table_from_json, parse_schedule_json,
};
