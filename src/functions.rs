//! Rounding, power and transcendental functions.
//!
//! `sign`, `abs`, `min`, `max` and `clamp` work on every representation and
//! only compare and subtract. Everything with a fractional result is gated on
//! [`Algebra::Field`](crate::Algebra::Field) and computed in double precision.

use std::f64::consts;

use crate::dispatch::{self, each_tag};
use crate::error::{Result, ScalarError};
use crate::registry::{Representation, Tag};
use crate::scalar::Scalar;
use crate::storage::{Native, Slot};

impl<T: Representation> Scalar<T> {
    /// `-1` for negative values, `1` otherwise (zero included).
    ///
    /// Unsigned representations always yield `1`.
    #[must_use]
    pub fn sign(self) -> Self {
        if T::TAG.is_signed() && self < Self::zero() {
            Self::zero() - Self::one()
        } else {
            Self::one()
        }
    }

    /// Absolute value, computed as `0 - self` for negative values.
    ///
    /// Subtraction wraps, so the most negative integer maps to itself.
    #[must_use]
    pub fn abs(self) -> Self {
        if self < Self::zero() {
            Self::zero() - self
        } else {
            self
        }
    }

    /// The smaller operand; `self` when they are unordered.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger operand; `self` when they are unordered.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Restrict to `[lo, hi]`.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Largest integral value not greater than `self`.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::from_slot(floor(T::TAG, self.slot()))
    }

    /// Smallest integral value not less than `self`.
    #[must_use]
    pub fn ceiling(self) -> Self {
        Self::from_slot(ceiling(T::TAG, self.slot()))
    }

    /// Raise `self` to `exponent` through double precision.
    ///
    /// # Errors
    /// - [`ScalarError::InvalidOperation`] for a negative base on a ring.
    /// - [`ScalarError::LossyConversion`] when a ring result is not an exact
    ///   integer of the representation.
    pub fn pow(self, exponent: Self) -> Result<Self> {
        if T::ALGEBRA.is_ring() && self < Self::zero() {
            return Err(ScalarError::invalid(T::TAG, ScalarError::POW_NEGATIVE_BASE));
        }
        let base = dispatch::to_f64(T::TAG, self.slot());
        let exponent = dispatch::to_f64(T::TAG, exponent.slot());
        dispatch::from_f64(T::TAG, base.powf(exponent)).map(Self::from_slot)
    }

    /// Euler's number.
    ///
    /// # Errors
    /// [`ScalarError::InvalidOperation`] on a ring.
    pub fn e() -> Result<Self> {
        Self::constant(consts::E)
    }

    /// Archimedes' constant.
    ///
    /// # Errors
    /// [`ScalarError::InvalidOperation`] on a ring.
    pub fn pi() -> Result<Self> {
        Self::constant(consts::PI)
    }

    fn constant(value: f64) -> Result<Self> {
        if T::ALGEBRA.is_ring() {
            return Err(ScalarError::invalid(T::TAG, ScalarError::CONSTANT_ON_RING));
        }
        dispatch::from_f64(T::TAG, value).map(Self::from_slot)
    }

    fn field_only(operation: &'static str) -> Result<()> {
        if T::ALGEBRA.is_ring() {
            return Err(ScalarError::unsupported(operation, T::TAG));
        }
        Ok(())
    }

    fn field_map(self, operation: &'static str, f: impl FnOnce(f64) -> f64) -> Result<Self> {
        Self::field_only(operation)?;
        let x = dispatch::to_f64(T::TAG, self.slot());
        dispatch::from_f64(T::TAG, f(x)).map(Self::from_slot)
    }
}

macro_rules! field_functions {
    ($($(#[$doc:meta])* $name:ident => $f:expr;)*) => {
        impl<T: Representation> Scalar<T> {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                /// [`ScalarError::UnsupportedOperation`] on a ring,
                /// [`ScalarError::LossyConversion`] when the result is not a
                /// number the representation can hold.
                pub fn $name(self) -> Result<Self> {
                    self.field_map(stringify!($name), $f)
                }
            )*
        }
    };
}

field_functions! {
    /// Sine (radians).
    sin => f64::sin;
    /// Cosine (radians).
    cos => f64::cos;
    /// Tangent (radians).
    tan => f64::tan;
    /// Arcsine, in radians.
    asin => f64::asin;
    /// Arccosine, in radians.
    acos => f64::acos;
    /// Arctangent, in radians.
    atan => f64::atan;
    /// Hyperbolic sine.
    sinh => f64::sinh;
    /// Hyperbolic cosine.
    cosh => f64::cosh;
    /// Hyperbolic tangent.
    tanh => f64::tanh;
    /// `e^self`.
    exp => f64::exp;
    /// Natural logarithm.
    log => f64::ln;
    /// Base-10 logarithm.
    log10 => f64::log10;
}

impl<T: Representation> Scalar<T> {
    /// Nearest integer, halves to even.
    ///
    /// # Errors
    /// [`ScalarError::UnsupportedOperation`] on a ring.
    pub fn round(self) -> Result<Self> {
        Self::field_only("round")?;
        Ok(Self::from_slot(round(T::TAG, self.slot())))
    }

    /// Integer part, rounding toward zero.
    ///
    /// # Errors
    /// [`ScalarError::UnsupportedOperation`] on a ring.
    pub fn truncate(self) -> Result<Self> {
        Self::field_only("truncate")?;
        Ok(Self::from_slot(truncate(T::TAG, self.slot())))
    }

    /// Four-quadrant arctangent of `self / x`.
    ///
    /// # Errors
    /// [`ScalarError::UnsupportedOperation`] on a ring.
    pub fn atan2(self, x: Self) -> Result<Self> {
        let x = dispatch::to_f64(T::TAG, x.slot());
        self.field_map("atan2", |y| y.atan2(x))
    }

    /// Logarithm in an arbitrary base.
    ///
    /// # Errors
    /// [`ScalarError::UnsupportedOperation`] on a ring.
    pub fn log_base(self, base: Self) -> Result<Self> {
        let base = dispatch::to_f64(T::TAG, base.slot());
        self.field_map("log_base", |x| x.log(base))
    }
}

// Rings are already integral. Floats go through double precision; decimals
// round natively since a double cannot carry all 28 digits. The same holds
// for round and truncate below.
fn floor(tag: Tag, value: Slot) -> Slot {
    each_tag!(tag, N => N::load(value).native_floor().store())
}

fn ceiling(tag: Tag, value: Slot) -> Slot {
    each_tag!(tag, N => N::load(value).native_ceil().store())
}

fn round(tag: Tag, value: Slot) -> Slot {
    each_tag!(tag, N => N::load(value).native_round().store())
}

fn truncate(tag: Tag, value: Slot) -> Slot {
    each_tag!(tag, N => N::load(value).native_trunc().store())
}
