/// Crate-wide result alias.
pub type CardResult<T> = Result<T, CardError>;

/// Error taxonomy for a card render attempt.
///
/// A render fails as a whole: any variant other than the soft formatter
/// defaults aborts the attempt before a partial bitmap can exist.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// The input record violates the data-model invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// One of the six asset acquisitions failed (network, HTTP status,
    /// over-size body, decode, or font registration).
    #[error("resource load error: {0}")]
    ResourceLoad(String),

    /// The bounded wait on the resource join elapsed.
    #[error("resource load timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The caller's cancel token fired before drawing began.
    #[error("render cancelled")]
    Cancelled,

    /// The raster surface or its text-measurement capability could not be
    /// acquired.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// The finished surface could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// Passthrough for wrapped external errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Construct a [`CardError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct a [`CardError::ResourceLoad`].
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    /// Construct a [`CardError::Measurement`].
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Construct a [`CardError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
