use thiserror::Error;

// -----------------------------------------------------------------------------
// EncodeError

/// A value that none of the encoding rules can represent.
///
/// The writer recovers from it locally: the error is logged and the property
/// is left out of the document.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("no encoding rule applies to a value of type `{type_path}`")]
    Unencodable { type_path: &'static str },
}

// -----------------------------------------------------------------------------
// LifecycleError

/// Misuse of the process-wide [`CodecRegistry`](crate::CodecRegistry).
///
/// Returned by the `try_` functions of [`registry`](crate::registry); the
/// other lifecycle functions panic with it instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LifecycleError {
    #[error("the codec registry is already initialized")]
    AlreadyInitialized,
    #[error("the codec registry is not initialized")]
    NotInitialized,
}
