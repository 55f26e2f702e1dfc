//! Simple `Sign` type, used for turn directions and face orientation.

use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Positive
    #[default]
    Pos = 0,
    /// Negative
    Neg = 1,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Pos => write!(f, "+"),
            Sign::Neg => write!(f, "-"),
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl Sign {
    /// Returns the sign of `x`, or `None` if `x` is exactly zero (or NaN).
    pub fn of_nonzero(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Sign::Pos)
        } else if x < 0.0 {
            Some(Sign::Neg)
        } else {
            None
        }
    }

    /// Returns `1` or `-1`.
    pub fn to_num<T: From<i8>>(self) -> T {
        match self {
            Sign::Pos => T::from(1),
            Sign::Neg => T::from(-1),
        }
    }

    /// Returns `1.0` or `-1.0`.
    pub fn to_f32(self) -> f32 {
        self.to_num()
    }
}

/// Implements `Mul<Sign>` and `MulAssign<Sign>` for a type that implements
/// `Neg`.
macro_rules! impl_mul_sign {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Sign> for $t {
                type Output = Self;

                fn mul(self, rhs: Sign) -> Self {
                    match rhs {
                        Sign::Pos => self,
                        Sign::Neg => -self,
                    }
                }
            }
            impl MulAssign<Sign> for $t {
                fn mul_assign(&mut self, rhs: Sign) {
                    *self = *self * rhs;
                }
            }
        )*
    };
}

impl_mul_sign!(Sign, f32, i8, i32);
