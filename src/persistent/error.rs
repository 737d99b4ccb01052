//! Error types for persistent vector operations.
//!
//! Reading past the end of a vector is never an error: `get` returns `None`
//! and `exists` returns `false`. Errors are reserved for operations the
//! vector refuses to approximate.

/// Represents a call to an operation the vector does not implement.
///
/// Lazy transformation views (`map`, `reverse`) and concatenation of two
/// non-empty vectors report this error instead of computing a
/// plausible-but-wrong result.
///
/// # Examples
///
/// ```rust
/// use pvector::persistent::UnimplementedError;
///
/// let error = UnimplementedError { operation: "reverse" };
/// assert_eq!(
///     format!("{}", error),
///     "PersistentVector::reverse is not implemented"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnimplementedError {
    /// The name of the operation that was requested.
    pub operation: &'static str,
}

impl std::fmt::Display for UnimplementedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "PersistentVector::{} is not implemented",
            self.operation
        )
    }
}

impl std::error::Error for UnimplementedError {}

/// Represents errors returned by [`PersistentVector`](super::PersistentVector)
/// operations.
///
/// # Examples
///
/// ```rust
/// use pvector::persistent::{PersistentVector, VectorError};
///
/// let left: PersistentVector<i32> = PersistentVector::from_array(vec![1, 2]);
/// let right: PersistentVector<i32> = PersistentVector::from_array(vec![3]);
///
/// let error = left.concat(&right).unwrap_err();
/// assert!(matches!(error, VectorError::Unimplemented(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// The operation is not implemented for this input.
    Unimplemented(UnimplementedError),
}

impl VectorError {
    pub(crate) const fn unimplemented(operation: &'static str) -> Self {
        Self::Unimplemented(UnimplementedError { operation })
    }
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unimplemented(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unimplemented(error) => Some(error),
        }
    }
}

impl From<UnimplementedError> for VectorError {
    fn from(error: UnimplementedError) -> Self {
        Self::Unimplemented(error)
    }
}
