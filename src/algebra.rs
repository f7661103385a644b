//! Algebraic classification of representations.
//!
//! ```text
//! Ring   i8 u8 i16 u16 i32 u32 i64 u64      closed under + − ×
//! Field  f32 f64 decimal128                  closed under + − × ÷, transcendentals
//! ```
//!
//! The function library consults this before doing anything that needs a
//! fractional part.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which algebraic structure a representation models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algebra {
    /// Integral: division truncates and transcendental functions are undefined.
    Ring,
    /// Supports a fractional part (within precision).
    Field,
}

impl Algebra {
    /// `true` for [`Algebra::Field`].
    #[inline]
    #[must_use]
    pub const fn is_field(self) -> bool {
        matches!(self, Algebra::Field)
    }

    /// `true` for [`Algebra::Ring`].
    #[inline]
    #[must_use]
    pub const fn is_ring(self) -> bool {
        matches!(self, Algebra::Ring)
    }
}

impl fmt::Display for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algebra::Ring => "ring",
            Algebra::Field => "field",
        })
    }
}
