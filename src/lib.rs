//! Generic scalar primitives for linear algebra.
//!
//! [`Scalar<T>`] is bound to one of eleven primitive representations
//! (`i8`…`u64`, `f32`, `f64` and a 128-bit decimal). The representation is
//! resolved once per instantiation into a [`Tag`]; arithmetic switches on
//! that constant tag, so no per-call reflection or boxing happens.
//! Operations that make no sense for a representation fail with a
//! [`ScalarError`] instead of producing a wrapped or meaningless value.
//!
//! ```
//! use tenso::{Scalar, ScalarError};
//!
//! let x = Scalar::new(9_i32);
//! assert_eq!(x.sqrt(), Ok(Scalar::new(3)));
//! assert!(matches!(Scalar::new(8_i32).sqrt(), Err(ScalarError::LossyConversion { .. })));
//! assert!(Scalar::<f64>::pi().is_ok());
//! assert!(Scalar::<i32>::pi().is_err());
//! ```

mod algebra;
mod dispatch;
mod display;
mod error;
mod functions;
mod registry;
mod scalar;
mod storage;

pub use crate::algebra::Algebra;
pub use crate::display::registry_table;
pub use crate::error::{Result, ScalarError};
pub use crate::registry::{Representation, Tag};
pub use crate::scalar::Scalar;
pub use rust_decimal::Decimal;
