//! Representation registry.
//!
//! Each supported primitive maps to exactly one [`Tag`]. For a bound type the
//! mapping is an associated constant of [`Representation`], so it is resolved
//! once per instantiation by the compiler and costs nothing per call. Types
//! discovered at runtime go through [`Tag::of`], which consults a table built
//! once per process.

use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::OnceLock;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::algebra::Algebra;
use crate::error::{Result, ScalarError};
use crate::storage::Native;

/// Compact identifier of one of the eleven supported representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// `i8`
    Int8,
    /// `u8`
    UInt8,
    /// `i16`
    Int16,
    /// `u16`
    UInt16,
    /// `i32`
    Int32,
    /// `u32`
    UInt32,
    /// `i64`
    Int64,
    /// `u64`
    UInt64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// [`rust_decimal::Decimal`]
    Decimal128,
}

impl Tag {
    /// Every tag, integral kinds first.
    pub const ALL: [Tag; 11] = [
        Tag::Int8,
        Tag::UInt8,
        Tag::Int16,
        Tag::UInt16,
        Tag::Int32,
        Tag::UInt32,
        Tag::Int64,
        Tag::UInt64,
        Tag::Float32,
        Tag::Float64,
        Tag::Decimal128,
    ];

    /// Resolve an arbitrary type against the registry.
    ///
    /// # Errors
    /// [`ScalarError::UnsupportedRepresentation`] if `T` is not one of the
    /// eleven supported representations.
    pub fn of<T: ?Sized + 'static>() -> Result<Tag> {
        let id = TypeId::of::<T>();
        runtime_table()
            .iter()
            .find(|(known, _)| *known == id)
            .map(|&(_, tag)| tag)
            .ok_or_else(|| {
                let type_name = type_name::<T>();
                debug!("registry rejected unsupported representation `{type_name}`");
                ScalarError::UnsupportedRepresentation { type_name }
            })
    }

    /// Ring or field classification.
    #[inline]
    #[must_use]
    pub const fn algebra(self) -> Algebra {
        match self {
            Tag::Float32 | Tag::Float64 | Tag::Decimal128 => Algebra::Field,
            _ => Algebra::Ring,
        }
    }

    /// Whether the representation can hold negative values.
    #[inline]
    #[must_use]
    pub const fn is_signed(self) -> bool {
        !matches!(self, Tag::UInt8 | Tag::UInt16 | Tag::UInt32 | Tag::UInt64)
    }

    /// Width in bytes of the native value.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Tag::Int8 | Tag::UInt8 => 1,
            Tag::Int16 | Tag::UInt16 => 2,
            Tag::Int32 | Tag::UInt32 | Tag::Float32 => 4,
            Tag::Int64 | Tag::UInt64 | Tag::Float64 => 8,
            Tag::Decimal128 => 16,
        }
    }

    /// Name of the Rust type bound to this tag.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Tag::Int8 => "i8",
            Tag::UInt8 => "u8",
            Tag::Int16 => "i16",
            Tag::UInt16 => "u16",
            Tag::Int32 => "i32",
            Tag::UInt32 => "u32",
            Tag::Int64 => "i64",
            Tag::UInt64 => "u64",
            Tag::Float32 => "f32",
            Tag::Float64 => "f64",
            Tag::Decimal128 => "Decimal",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::Int8 => "int8",
            Tag::UInt8 => "uint8",
            Tag::Int16 => "int16",
            Tag::UInt16 => "uint16",
            Tag::Int32 => "int32",
            Tag::UInt32 => "uint32",
            Tag::Int64 => "int64",
            Tag::UInt64 => "uint64",
            Tag::Float32 => "float32",
            Tag::Float64 => "float64",
            Tag::Decimal128 => "decimal128",
        })
    }
}

fn runtime_table() -> &'static [(TypeId, Tag); 11] {
    static TABLE: OnceLock<[(TypeId, Tag); 11]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = [
            (TypeId::of::<i8>(), Tag::Int8),
            (TypeId::of::<u8>(), Tag::UInt8),
            (TypeId::of::<i16>(), Tag::Int16),
            (TypeId::of::<u16>(), Tag::UInt16),
            (TypeId::of::<i32>(), Tag::Int32),
            (TypeId::of::<u32>(), Tag::UInt32),
            (TypeId::of::<i64>(), Tag::Int64),
            (TypeId::of::<u64>(), Tag::UInt64),
            (TypeId::of::<f32>(), Tag::Float32),
            (TypeId::of::<f64>(), Tag::Float64),
            (TypeId::of::<Decimal>(), Tag::Decimal128),
        ];
        debug!("representation registry built with {} entries", table.len());
        table
    })
}

/// A primitive type that `Scalar` can be bound to.
///
/// Sealed: implemented for exactly `i8 u8 i16 u16 i32 u32 i64 u64 f32 f64`
/// and [`Decimal`]. The associated constants form the per-instantiation
/// constant set.
pub trait Representation:
    Native + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Registry tag of this representation.
    const TAG: Tag;

    /// Ring or field.
    const ALGEBRA: Algebra = Self::TAG.algebra();

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;
}

macro_rules! representation {
    ($($ty:ty => $tag:ident, $zero:expr, $one:expr;)*) => {
        $(
            impl Representation for $ty {
                const TAG: Tag = Tag::$tag;
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

representation! {
    i8 => Int8, 0, 1;
    u8 => UInt8, 0, 1;
    i16 => Int16, 0, 1;
    u16 => UInt16, 0, 1;
    i32 => Int32, 0, 1;
    u32 => UInt32, 0, 1;
    i64 => Int64, 0, 1;
    u64 => UInt64, 0, 1;
    f32 => Float32, 0.0, 1.0;
    f64 => Float64, 0.0, 1.0;
    Decimal => Decimal128, Decimal::ZERO, Decimal::ONE;
}
