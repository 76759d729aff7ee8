//! Numeric values that may be integers, floats or exact decimals
//!
//! Sums keep the most precise kind present: integers stay integers, a float
//! turns an integer sum into a float sum, and a decimal anywhere turns the
//! whole sum into a decimal.

use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount or other input to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    /// Identity of an empty sum
    pub const fn zero() -> Self {
        Number::Int(0)
    }

    /// Add two numbers, promoting to the more precise kind.
    ///
    /// # Errors
    /// `CalcError::Overflow` if a decimal result leaves the representable range
    /// or a non-finite float has to join a decimal sum.
    pub fn checked_add(self, other: Number) -> Result<Number> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Ok(match a.checked_add(b) {
                Some(sum) => Number::Int(sum),
                // Two i64 values always fit in a decimal
                None => Number::Decimal(Decimal::from(a) + Decimal::from(b)),
            }),
            (Number::Int(a), Number::Float(b)) | (Number::Float(b), Number::Int(a)) => {
                Ok(Number::Float(a as f64 + b))
            }
            (Number::Float(a), Number::Float(b)) => Ok(Number::Float(a + b)),
            (Number::Decimal(a), rhs) | (rhs, Number::Decimal(a)) => {
                let b = rhs.to_decimal()?;
                a.checked_add(b)
                    .map(Number::Decimal)
                    .ok_or(CalcError::Overflow { operation: "adding decimals" })
            }
        }
    }

    /// Subtract `other`, with the same promotion rules as [`Number::checked_add`].
    pub fn checked_sub(self, other: Number) -> Result<Number> {
        self.checked_add(other.negate())
    }

    fn negate(self) -> Number {
        match self {
            Number::Int(i) => match i.checked_neg() {
                Some(n) => Number::Int(n),
                None => Number::Decimal(-Decimal::from(i)),
            },
            Number::Float(f) => Number::Float(-f),
            Number::Decimal(d) => Number::Decimal(-d),
        }
    }

    /// Exact decimal form of this number.
    ///
    /// Floats convert from their exact binary value.
    pub fn to_decimal(self) -> Result<Decimal> {
        match self {
            Number::Int(i) => Ok(Decimal::from(i)),
            Number::Float(f) => Decimal::from_f64_retain(f).ok_or(CalcError::Overflow {
                operation: "converting a float to a decimal",
            }),
            Number::Decimal(d) => Ok(d),
        }
    }

    /// Nearest `f64`.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
            // Decimal::to_f64 drifts past ~1e13; parsing the text form is correctly rounded
            Number::Decimal(d) => d.to_string().parse().unwrap_or(f64::NAN),
        }
    }

    /// Strictly below zero. NaN is neither negative nor positive.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(i) => *i < 0,
            Number::Float(f) => *f < 0.0,
            Number::Decimal(d) => d.is_sign_negative() && !d.is_zero(),
        }
    }

    /// Strictly above zero.
    pub fn is_positive(&self) -> bool {
        match self {
            Number::Int(i) => *i > 0,
            Number::Float(f) => *f > 0.0,
            Number::Decimal(d) => d.is_sign_positive() && !d.is_zero(),
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole floats
            Number::Float(x) => write!(f, "{:?}", x),
            Number::Decimal(d) => write!(f, "{}", d),
        }
    }
}
