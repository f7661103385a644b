//! The generic scalar value.
//!
//! `Scalar<T>` wraps one value of a supported representation in a storage slot
//! and routes every operation through the dispatch engine with `T::TAG`.
//! Values are `Copy`, immutable and share nothing, so the vector and matrix
//! layers can create them freely.

mod convert;
mod ops;

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::algebra::Algebra;
use crate::dispatch;
use crate::error::Result;
use crate::registry::{Representation, Tag};
use crate::storage::Slot;

/// A value of representation `T` with representation-checked arithmetic.
///
/// ```
/// use tenso::Scalar;
///
/// let sum = Scalar::new(7_i32) + Scalar::new(5_i32);
/// assert_eq!(sum, Scalar::new(12));
/// assert!(Scalar::new(1_u64).negate().is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Scalar<T: Representation> {
    slot: Slot,
    rep: PhantomData<T>,
}

impl<T: Representation> Scalar<T> {
    /// Tag of the bound representation.
    pub const TAG: Tag = T::TAG;

    /// Classification of the bound representation.
    pub const ALGEBRA: Algebra = T::ALGEBRA;

    /// Wrap a native value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_slot(value.store())
    }

    /// The native value.
    #[inline]
    #[must_use]
    pub fn value(self) -> T {
        T::load(self.slot)
    }

    /// Additive identity.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::ZERO)
    }

    /// Multiplicative identity.
    #[inline]
    #[must_use]
    pub fn one() -> Self {
        Self::new(T::ONE)
    }

    /// `true` when the representation is a field.
    #[inline]
    #[must_use]
    pub const fn is_field() -> bool {
        T::ALGEBRA.is_field()
    }

    /// `true` when the representation is a ring.
    #[inline]
    #[must_use]
    pub const fn is_ring() -> bool {
        T::ALGEBRA.is_ring()
    }

    /// Additive inverse.
    ///
    /// # Errors
    /// [`ScalarError::InvalidOperation`](crate::ScalarError::InvalidOperation)
    /// for unsigned representations.
    #[inline]
    pub fn negate(self) -> Result<Self> {
        dispatch::negate(T::TAG, self.slot).map(Self::from_slot)
    }

    /// Square root, computed in double precision.
    ///
    /// Fields accept the rounded result. Rings require the root to be an exact
    /// integer.
    ///
    /// # Errors
    /// [`ScalarError::LossyConversion`](crate::ScalarError::LossyConversion)
    /// when a ring value is not a perfect square, or when the root is not a
    /// number the representation can hold.
    #[inline]
    pub fn sqrt(self) -> Result<Self> {
        dispatch::sqrt(T::TAG, self.slot).map(Self::from_slot)
    }

    #[inline]
    pub(crate) fn from_slot(slot: Slot) -> Self {
        Self {
            slot,
            rep: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> Slot {
        self.slot
    }
}

impl<T: Representation> Default for Scalar<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Representation> From<T> for Scalar<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! native_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<Scalar<$ty>> for $ty {
                #[inline]
                fn from(scalar: Scalar<$ty>) -> Self {
                    scalar.value()
                }
            }
        )*
    };
}

native_from_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, Decimal);

impl<T: Representation> PartialEq for Scalar<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        dispatch::compare(T::TAG, self.slot, other.slot) == Some(Ordering::Equal)
    }
}

impl<T: Representation> PartialOrd for Scalar<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        dispatch::compare(T::TAG, self.slot, other.slot)
    }
}

impl<T: Representation> fmt::Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl<T: Representation> fmt::Debug for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>({:?})", T::TAG, self.value())
    }
}

impl<T: Representation + Serialize> Serialize for Scalar<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Representation + Deserialize<'de>> Deserialize<'de> for Scalar<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T> Distribution<Scalar<T>> for Standard
where
    T: Representation,
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar<T> {
        Scalar::new(<Standard as Distribution<T>>::sample(self, rng))
    }
}
