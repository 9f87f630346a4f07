use thiserror::Error;

// -----------------------------------------------------------------------------
// ReflectError

/// Error returned by the fallible container operations of [`ops`](crate::ops).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectError {
    #[error("type mismatch: expected `{expected}`, received `{received}`")]
    TypeMismatch {
        expected: &'static str,
        received: &'static str,
    },
}

impl ReflectError {
    #[inline]
    pub(crate) fn mismatch<T: 'static>(received: &dyn crate::Reflect) -> Self {
        Self::TypeMismatch {
            expected: core::any::type_name::<T>(),
            received: received.reflect_type_info().type_path(),
        }
    }
}
