//! Exact conversions between representations.

use num_traits::ToPrimitive;

use super::Scalar;
use crate::dispatch;
use crate::error::Result;
use crate::registry::Representation;

impl<T: Representation> Scalar<T> {
    /// Build a scalar from a native value of any supported representation.
    ///
    /// # Errors
    /// [`ScalarError::LossyConversion`](crate::ScalarError::LossyConversion)
    /// unless `value` is exactly representable as `T`.
    pub fn try_from_native<U: Representation>(value: U) -> Result<Self> {
        dispatch::convert(U::TAG, T::TAG, value.store()).map(Self::from_slot)
    }

    /// Read the value as another native representation.
    ///
    /// # Errors
    /// [`ScalarError::LossyConversion`](crate::ScalarError::LossyConversion)
    /// unless the value is exactly representable as `U`.
    pub fn to_native<U: Representation>(self) -> Result<U> {
        dispatch::convert(T::TAG, U::TAG, self.slot).map(U::load)
    }

    /// Rebind the value to another representation.
    ///
    /// # Errors
    /// Same as [`Scalar::to_native`].
    pub fn convert<U: Representation>(self) -> Result<Scalar<U>> {
        dispatch::convert(T::TAG, U::TAG, self.slot).map(Scalar::from_slot)
    }
}

/// Integer targets succeed only when the value converts exactly; float
/// targets take the nearest value.
impl<T: Representation> ToPrimitive for Scalar<T> {
    fn to_i64(&self) -> Option<i64> {
        self.to_native().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_native().ok()
    }

    fn to_i8(&self) -> Option<i8> {
        self.to_native().ok()
    }

    fn to_u8(&self) -> Option<u8> {
        self.to_native().ok()
    }

    fn to_i16(&self) -> Option<i16> {
        self.to_native().ok()
    }

    fn to_u16(&self) -> Option<u16> {
        self.to_native().ok()
    }

    fn to_i32(&self) -> Option<i32> {
        self.to_native().ok()
    }

    fn to_u32(&self) -> Option<u32> {
        self.to_native().ok()
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_f64().map(|v| v as f32)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(dispatch::to_f64(T::TAG, self.slot))
    }
}
