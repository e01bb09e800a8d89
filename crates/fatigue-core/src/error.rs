use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown feature code: {0:?}")]
    UnknownFeature(String),

    #[error("classifier produced class index {0}, expected one of 0..=2")]
    UnexpectedLabel(usize),
}
