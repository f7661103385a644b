//! Tagged storage.
//!
//! A [`Slot`] is one 16-byte buffer reused by every representation: integers
//! and floats write their little-endian bytes at offset 0, the decimal writes
//! its serialized form over the whole buffer. The slot never records which
//! representation it holds; that is the registry's job.

use num_traits::WrappingNeg;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Size of the widest native representation.
pub const SLOT_BYTES: usize = 16;

/// Fixed-capacity storage for one native value.
///
/// Bytes past the representation's width are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slot([u8; SLOT_BYTES]);

impl Slot {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; SLOT_BYTES];
        for (dst, src) in buf.iter_mut().zip(bytes) {
            *dst = *src;
        }
        Slot(buf)
    }

    #[inline]
    fn bytes<const N: usize>(self) -> [u8; N] {
        let mut out = [0u8; N];
        for (dst, src) in out.iter_mut().zip(self.0) {
            *dst = src;
        }
        out
    }
}

/// Lossless carrier used to move a value between representations.
///
/// Every integral kind fits `i128`, both float kinds fit `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wide {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Wide {
    /// The carried value as an integer, if it has no fractional part.
    #[allow(clippy::float_cmp, reason = "integrality is an exact test")]
    fn integral(self) -> Option<i128> {
        match self {
            Wide::Int(i) => Some(i),
            // `as` saturates; saturated values are rejected by the narrower `try_from`
            Wide::Float(f) => (f.is_finite() && f.trunc() == f).then_some(f as i128),
            Wide::Decimal(d) => {
                let d = d.normalize();
                (d.scale() == 0).then_some(d.mantissa())
            }
        }
    }
}

/// Operations every representation performs natively.
///
/// Reachable only through `Representation`, which seals the set.
pub trait Native: Copy + PartialOrd {
    /// Write the value into a fresh slot.
    fn store(self) -> Slot;

    /// Read the value back. Only meaningful for a slot this type wrote.
    fn load(slot: Slot) -> Self;

    fn native_add(self, rhs: Self) -> Self;
    fn native_sub(self, rhs: Self) -> Self;
    fn native_mul(self, rhs: Self) -> Self;
    fn native_div(self, rhs: Self) -> Self;

    /// `None` when the representation has no negative values.
    fn native_neg(self) -> Option<Self>;

    fn native_floor(self) -> Self;
    fn native_ceil(self) -> Self;
    /// Nearest integral value, halves to even.
    fn native_round(self) -> Self;
    fn native_trunc(self) -> Self;

    /// Nearest double. Lossy for 64-bit integers and decimals.
    fn as_f64(self) -> f64;

    /// Nearest value for a double; integral kinds accept only exact integers.
    fn from_f64_nearest(v: f64) -> Option<Self>;

    fn widen(self) -> Wide;

    /// Exact narrowing, `None` when the value would change.
    fn narrow(wide: Wide) -> Option<Self>;
}

#[inline]
fn signed_neg<T: WrappingNeg>(x: T) -> Option<T> {
    Some(x.wrapping_neg())
}

#[inline]
fn unsigned_neg<T>(_: T) -> Option<T> {
    None
}

macro_rules! native_int {
    ($($ty:ty => $neg:ident;)*) => {
        $(
            impl Native for $ty {
                #[inline]
                fn store(self) -> Slot {
                    Slot::from_bytes(&self.to_le_bytes())
                }

                #[inline]
                fn load(slot: Slot) -> Self {
                    <$ty>::from_le_bytes(slot.bytes())
                }

                #[inline]
                fn native_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn native_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn native_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                // panics on a zero divisor
                #[inline]
                fn native_div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn native_neg(self) -> Option<Self> {
                    $neg(self)
                }

                #[inline]
                fn native_floor(self) -> Self {
                    self
                }

                #[inline]
                fn native_ceil(self) -> Self {
                    self
                }

                #[inline]
                fn native_round(self) -> Self {
                    self
                }

                #[inline]
                fn native_trunc(self) -> Self {
                    self
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64_nearest(v: f64) -> Option<Self> {
                    Self::narrow(Wide::Float(v))
                }

                #[inline]
                fn widen(self) -> Wide {
                    Wide::Int(i128::from(self))
                }

                #[inline]
                fn narrow(wide: Wide) -> Option<Self> {
                    wide.integral().and_then(|i| <$ty>::try_from(i).ok())
                }
            }
        )*
    };
}

native_int! {
    i8 => signed_neg;
    u8 => unsigned_neg;
    i16 => signed_neg;
    u16 => unsigned_neg;
    i32 => signed_neg;
    u32 => unsigned_neg;
    i64 => signed_neg;
    u64 => unsigned_neg;
}

macro_rules! native_float_arith {
    () => {
        #[inline]
        fn native_add(self, rhs: Self) -> Self {
            self + rhs
        }

        #[inline]
        fn native_sub(self, rhs: Self) -> Self {
            self - rhs
        }

        #[inline]
        fn native_mul(self, rhs: Self) -> Self {
            self * rhs
        }

        #[inline]
        fn native_div(self, rhs: Self) -> Self {
            self / rhs
        }

        #[inline]
        fn native_neg(self) -> Option<Self> {
            Some(-self)
        }
    };
}

impl Native for f32 {
    #[inline]
    fn store(self) -> Slot {
        Slot::from_bytes(&self.to_le_bytes())
    }

    #[inline]
    fn load(slot: Slot) -> Self {
        f32::from_le_bytes(slot.bytes())
    }

    native_float_arith!();

    #[inline]
    fn native_floor(self) -> Self {
        f64::from(self).floor() as f32
    }

    #[inline]
    fn native_ceil(self) -> Self {
        f64::from(self).ceil() as f32
    }

    #[inline]
    fn native_round(self) -> Self {
        f64::from(self).round_ties_even() as f32
    }

    #[inline]
    fn native_trunc(self) -> Self {
        f64::from(self).trunc() as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64_nearest(v: f64) -> Option<Self> {
        Some(v as f32)
    }

    #[inline]
    fn widen(self) -> Wide {
        Wide::Float(f64::from(self))
    }

    #[allow(clippy::float_cmp, reason = "round trips must be bit-exact")]
    fn narrow(wide: Wide) -> Option<Self> {
        match wide {
            Wide::Int(i) => {
                let f = i as f32;
                (f as i128 == i).then_some(f)
            }
            Wide::Float(f) => {
                let g = f as f32;
                (f64::from(g) == f || f.is_nan()).then_some(g)
            }
            Wide::Decimal(d) => d.to_f32().filter(|&g| Decimal::from_f32_retain(g) == Some(d)),
        }
    }
}

impl Native for f64 {
    #[inline]
    fn store(self) -> Slot {
        Slot::from_bytes(&self.to_le_bytes())
    }

    #[inline]
    fn load(slot: Slot) -> Self {
        f64::from_le_bytes(slot.bytes())
    }

    native_float_arith!();

    #[inline]
    fn native_floor(self) -> Self {
        self.floor()
    }

    #[inline]
    fn native_ceil(self) -> Self {
        self.ceil()
    }

    #[inline]
    fn native_round(self) -> Self {
        self.round_ties_even()
    }

    #[inline]
    fn native_trunc(self) -> Self {
        self.trunc()
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64_nearest(v: f64) -> Option<Self> {
        Some(v)
    }

    #[inline]
    fn widen(self) -> Wide {
        Wide::Float(self)
    }

    fn narrow(wide: Wide) -> Option<Self> {
        match wide {
            Wide::Int(i) => {
                let f = i as f64;
                (f as i128 == i).then_some(f)
            }
            Wide::Float(f) => Some(f),
            Wide::Decimal(d) => d.to_f64().filter(|&f| Decimal::from_f64_retain(f) == Some(d)),
        }
    }
}

impl Native for Decimal {
    #[inline]
    fn store(self) -> Slot {
        Slot(self.serialize())
    }

    #[inline]
    fn load(slot: Slot) -> Self {
        Decimal::deserialize(slot.0)
    }

    // overflow and a zero divisor panic inside rust_decimal
    native_float_arith!();

    #[inline]
    fn native_floor(self) -> Self {
        self.floor()
    }

    #[inline]
    fn native_ceil(self) -> Self {
        self.ceil()
    }

    #[inline]
    fn native_round(self) -> Self {
        self.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    }

    #[inline]
    fn native_trunc(self) -> Self {
        self.trunc()
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    fn from_f64_nearest(v: f64) -> Option<Self> {
        Decimal::from_f64(v)
    }

    #[inline]
    fn widen(self) -> Wide {
        Wide::Decimal(self)
    }

    #[allow(clippy::float_cmp, reason = "round trips must be bit-exact")]
    fn narrow(wide: Wide) -> Option<Self> {
        match wide {
            Wide::Int(i) => Decimal::try_from_i128_with_scale(i, 0).ok(),
            Wide::Float(f) => Decimal::from_f64(f).filter(|d| d.to_f64() == Some(f)),
            Wide::Decimal(d) => Some(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn extremes_survive_the_slot() {
        assert_eq!(i8::load(i8::MIN.store()), i8::MIN);
        assert_eq!(u16::load(u16::MAX.store()), u16::MAX);
        assert_eq!(i64::load(i64::MIN.store()), i64::MIN);
        assert_eq!(u64::load(u64::MAX.store()), u64::MAX);
        assert_eq!(f32::load(f32::MIN_POSITIVE.store()).to_bits(), f32::MIN_POSITIVE.to_bits());
        assert_eq!(f64::load((-0.0_f64).store()).to_bits(), (-0.0_f64).to_bits());
        assert!(f64::load(f64::NAN.store()).is_nan());
        assert_eq!(Decimal::load(Decimal::MAX.store()), Decimal::MAX);

        let d = Decimal::from_str("-12345.678900").unwrap();
        let back = Decimal::load(d.store());
        assert_eq!(back, d);
        assert_eq!(back.scale(), d.scale(), "scale must be preserved");
    }

    #[test]
    fn narrow_types_leave_the_tail_zeroed() {
        assert_eq!((-1_i8).store(), Slot::from_bytes(&[0xff]));
        assert_eq!(0_u64.store(), Slot::default());
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(i8::MAX.native_add(1), i8::MIN);
        assert_eq!(0_u8.native_sub(1), u8::MAX);
        assert_eq!(i32::MIN.native_div(-1), i32::MIN);
        assert_eq!(7_i32.native_div(-2), -3, "division truncates toward zero");
    }

    #[test]
    fn negation_depends_on_signedness() {
        assert_eq!(5_i16.native_neg(), Some(-5));
        assert_eq!(i64::MIN.native_neg(), Some(i64::MIN));
        assert_eq!(5_u32.native_neg(), None);
        assert_eq!(0_u8.native_neg(), None);
        assert_eq!(Decimal::ONE.native_neg(), Some(Decimal::NEGATIVE_ONE));
    }

    #[test]
    fn narrowing_is_exact() {
        assert_eq!(i8::narrow(Wide::Int(127)), Some(127));
        assert_eq!(i8::narrow(Wide::Int(128)), None);
        assert_eq!(u32::narrow(Wide::Int(-1)), None);
        assert_eq!(i32::narrow(Wide::Float(3.0)), Some(3));
        assert_eq!(i32::narrow(Wide::Float(3.5)), None);
        assert_eq!(u64::narrow(Wide::Float(f64::NAN)), None);
        assert_eq!(u64::narrow(Wide::Float(f64::INFINITY)), None);
        assert_eq!(u64::narrow(Wide::Float(18_446_744_073_709_551_616.0)), None);
        assert_eq!(i16::narrow(Wide::Decimal(Decimal::from_str("42.000").unwrap())), Some(42));
        assert_eq!(i16::narrow(Wide::Decimal(Decimal::from_str("42.5").unwrap())), None);
        assert_eq!(u64::narrow(Wide::Decimal(Decimal::from(u64::MAX))), Some(u64::MAX));

        assert_eq!(f32::narrow(Wide::Float(0.5)), Some(0.5));
        assert_eq!(f32::narrow(Wide::Float(0.1)), None);
        assert!(f32::narrow(Wide::Float(f64::NAN)).is_some_and(f32::is_nan));
        assert_eq!(f64::narrow(Wide::Int(1 << 53)), Some(9_007_199_254_740_992.0));
        assert_eq!(f64::narrow(Wide::Int((1 << 53) + 1)), None);

        assert_eq!(Decimal::narrow(Wide::Int(i128::from(i64::MIN))), Some(Decimal::from(i64::MIN)));
        assert_eq!(Decimal::narrow(Wide::Float(0.25)), Some(Decimal::from_str("0.25").unwrap()));
        assert_eq!(Decimal::narrow(Wide::Float(f64::NAN)), None);

        // a double near 0.1 is not the decimal 0.1
        assert_eq!(f64::narrow(Wide::Decimal(Decimal::from_str("0.1").unwrap())), None);
        assert_eq!(f32::narrow(Wide::Decimal(Decimal::from_str("0.1").unwrap())), None);
        assert_eq!(f32::narrow(Wide::Decimal(Decimal::from_str("-2.375").unwrap())), Some(-2.375));
    }

    #[test]
    fn nearest_double_rejects_fractions_for_integers() {
        assert_eq!(i32::from_f64_nearest(9.0), Some(9));
        assert_eq!(i32::from_f64_nearest(2.828), None);
        assert_eq!(f32::from_f64_nearest(0.1), Some(0.1_f32));
        assert_eq!(Decimal::from_f64_nearest(f64::INFINITY), None);
    }
}
