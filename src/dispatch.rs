//! Arithmetic dispatch engine.
//!
//! Every entry point switches on a [`Tag`], reads the native operands out of
//! their slots, runs the native operation and writes the result into a new
//! slot. `Scalar<T>` always passes `T::TAG`, a constant, so after inlining
//! the switch folds down to the single native instruction sequence.

use std::cmp::Ordering;

use crate::error::{Result, ScalarError};
use crate::registry::Tag;
use crate::storage::{Native, Slot, Wide};

/// Expand `$body` once per tag with `$n` bound to the native type.
macro_rules! each_tag {
    ($tag:expr, $n:ident => $body:expr) => {
        match $tag {
            $crate::registry::Tag::Int8 => {
                type $n = i8;
                $body
            }
            $crate::registry::Tag::UInt8 => {
                type $n = u8;
                $body
            }
            $crate::registry::Tag::Int16 => {
                type $n = i16;
                $body
            }
            $crate::registry::Tag::UInt16 => {
                type $n = u16;
                $body
            }
            $crate::registry::Tag::Int32 => {
                type $n = i32;
                $body
            }
            $crate::registry::Tag::UInt32 => {
                type $n = u32;
                $body
            }
            $crate::registry::Tag::Int64 => {
                type $n = i64;
                $body
            }
            $crate::registry::Tag::UInt64 => {
                type $n = u64;
                $body
            }
            $crate::registry::Tag::Float32 => {
                type $n = f32;
                $body
            }
            $crate::registry::Tag::Float64 => {
                type $n = f64;
                $body
            }
            $crate::registry::Tag::Decimal128 => {
                type $n = ::rust_decimal::Decimal;
                $body
            }
        }
    };
}

pub(crate) use each_tag;

#[inline]
pub(crate) fn add(tag: Tag, lhs: Slot, rhs: Slot) -> Slot {
    each_tag!(tag, N => N::load(lhs).native_add(N::load(rhs)).store())
}

#[inline]
pub(crate) fn sub(tag: Tag, lhs: Slot, rhs: Slot) -> Slot {
    each_tag!(tag, N => N::load(lhs).native_sub(N::load(rhs)).store())
}

#[inline]
pub(crate) fn mul(tag: Tag, lhs: Slot, rhs: Slot) -> Slot {
    each_tag!(tag, N => N::load(lhs).native_mul(N::load(rhs)).store())
}

/// Truncating for rings, IEEE/decimal for fields. Native faults propagate.
#[inline]
pub(crate) fn div(tag: Tag, lhs: Slot, rhs: Slot) -> Slot {
    each_tag!(tag, N => N::load(lhs).native_div(N::load(rhs)).store())
}

#[inline]
pub(crate) fn negate(tag: Tag, value: Slot) -> Result<Slot> {
    each_tag!(tag, N => N::load(value).native_neg().map(N::store))
        .ok_or_else(|| ScalarError::invalid(tag, ScalarError::NEGATE_UNSIGNED))
}

#[inline]
pub(crate) fn compare(tag: Tag, lhs: Slot, rhs: Slot) -> Option<Ordering> {
    each_tag!(tag, N => N::load(lhs).partial_cmp(&N::load(rhs)))
}

#[inline]
pub(crate) fn to_f64(tag: Tag, value: Slot) -> f64 {
    each_tag!(tag, N => N::load(value).as_f64())
}

/// Rings only accept exact integers back; fields take the nearest value.
#[inline]
pub(crate) fn from_f64(tag: Tag, value: f64) -> Result<Slot> {
    each_tag!(tag, N => N::from_f64_nearest(value).map(N::store))
        .ok_or_else(|| ScalarError::lossy(Tag::Float64, tag))
}

/// Square root. Fields go through double precision; rings only accept
/// perfect squares.
pub(crate) fn sqrt(tag: Tag, value: Slot) -> Result<Slot> {
    if tag.algebra().is_field() {
        return from_f64(tag, to_f64(tag, value).sqrt());
    }
    let lossy = || ScalarError::lossy(Tag::Float64, tag);
    let wide: Wide = each_tag!(tag, N => N::load(value).widen());
    let Wide::Int(x) = wide else {
        return Err(lossy());
    };
    // the double guess is within one of the true root for 64-bit operands
    let guess = (x as f64).sqrt().round() as i128;
    (guess - 1..=guess + 1)
        .find(|&r| r >= 0 && r.checked_mul(r) == Some(x))
        .and_then(|r| each_tag!(tag, N => N::narrow(Wide::Int(r)).map(N::store)))
        .ok_or_else(lossy)
}

/// Move a value between representations, failing unless it survives exactly.
pub(crate) fn convert(from: Tag, to: Tag, value: Slot) -> Result<Slot> {
    let wide: Wide = each_tag!(from, N => N::load(value).widen());
    each_tag!(to, M => M::narrow(wide).map(M::store)).ok_or_else(|| ScalarError::lossy(from, to))
}
