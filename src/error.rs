use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("work date was not YYYY-MM-DD: {0:?}")]
    MalformedDate(String),
    #[error("time of day was not HH:MM[:SS]: {0:?}")]
    MalformedTime(String),
}
