use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{One, Zero};

use super::Scalar;
use crate::dispatch;
use crate::registry::Representation;

macro_rules! binary_op {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $engine:path;)*) => {
        $(
            impl<T: Representation> $op for Scalar<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::from_slot($engine(T::TAG, self.slot, rhs.slot))
                }
            }

            impl<'a, T: Representation> $op<&'a Scalar<T>> for Scalar<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: &'a Self) -> Self {
                    Self::from_slot($engine(T::TAG, self.slot, rhs.slot))
                }
            }

            impl<T: Representation> $assign for Scalar<T> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    self.slot = $engine(T::TAG, self.slot, rhs.slot);
                }
            }
        )*
    };
}

binary_op! {
    Add::add, AddAssign::add_assign => dispatch::add;
    Sub::sub, SubAssign::sub_assign => dispatch::sub;
    Mul::mul, MulAssign::mul_assign => dispatch::mul;
    Div::div, DivAssign::div_assign => dispatch::div;
}

impl<T: Representation> Sum for Scalar<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, T: Representation> Sum<&'a Scalar<T>> for Scalar<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<T: Representation> Product for Scalar<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, T: Representation> Product<&'a Scalar<T>> for Scalar<T> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<T: Representation> Zero for Scalar<T> {
    #[inline]
    fn zero() -> Self {
        Scalar::new(T::ZERO)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Scalar::new(T::ZERO)
    }
}

impl<T: Representation> One for Scalar<T> {
    #[inline]
    fn one() -> Self {
        Scalar::new(T::ONE)
    }
}
