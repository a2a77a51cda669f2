/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when parsing core model data from host slugs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A condition slug did not match any known condition.
    #[error("unknown condition: \"{0}\"")]
    UnknownCondition(String),

    /// A status marker slug did not match any known marker.
    #[error("unknown status marker: \"{0}\"")]
    UnknownStatusMarker(String),
}
