use thiserror::Error;

pub type FtResult<T> = Result<T, FtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FtError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
