use thiserror::Error;

pub type HsResult<T> = Result<T, HsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HsError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Error raised by one of the domain crates, flattened to text.
    #[error("{layer} error: {message}")]
    Domain {
        layer: &'static str,
        message: String,
    },
}
