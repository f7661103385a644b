use thiserror::Error;

use crate::registry::Tag;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScalarError>;

/// Every way a scalar operation can be refused.
///
/// Native faults (integer division by zero, decimal overflow) are not part of
/// this taxonomy: they surface exactly as the native type raises them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// The type is not one of the eleven supported representations.
    #[error("unsupported representation `{type_name}`")]
    UnsupportedRepresentation {
        /// Rust name of the rejected type.
        type_name: &'static str,
    },

    /// The operation exists in general but is illegal for this representation.
    #[error("invalid operation on {tag}: {reason}")]
    InvalidOperation {
        /// Representation the operation was attempted on.
        tag: Tag,
        /// Why the representation refuses it.
        reason: &'static str,
    },

    /// A field-only function was called on a ring representation.
    #[error("`{operation}` is not supported on {tag}")]
    UnsupportedOperation {
        /// Name of the refused function.
        operation: &'static str,
        /// Representation the function was called on.
        tag: Tag,
    },

    /// The value does not survive the trip into the destination representation.
    #[error("cannot represent the {from} value exactly as {to}")]
    LossyConversion {
        /// Representation the value came from.
        from: Tag,
        /// Representation that could not hold it.
        to: Tag,
    },
}

impl ScalarError {
    pub(crate) const NEGATE_UNSIGNED: &'static str = "cannot negate an unsigned representation";
    pub(crate) const POW_NEGATIVE_BASE: &'static str =
        "non-field representations may only raise non-negative bases to a power";
    pub(crate) const CONSTANT_ON_RING: &'static str =
        "transcendental constants are only defined for field representations";

    pub(crate) fn invalid(tag: Tag, reason: &'static str) -> Self {
        Self::InvalidOperation { tag, reason }
    }

    pub(crate) fn unsupported(operation: &'static str, tag: Tag) -> Self {
        Self::UnsupportedOperation { operation, tag }
    }

    pub(crate) fn lossy(from: Tag, to: Tag) -> Self {
        Self::LossyConversion { from, to }
    }
}
