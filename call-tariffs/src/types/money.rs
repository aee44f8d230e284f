use std::{
    fmt::Display,
    ops::{Add, AddAssign, Mul},
};

use serde::{Deserialize, Serialize};

use super::number::Number;

/// A monetary amount, in the single implicit currency of the call log.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Money(Number);

impl Money {
    pub(crate) fn zero() -> Self {
        Self(Number::default())
    }

    /// Round this amount to two decimals.
    #[must_use]
    pub fn with_scale(self) -> Self {
        Self(self.0.with_scale())
    }

    /// The underlying exact decimal value.
    #[must_use]
    pub fn as_decimal(&self) -> rust_decimal::Decimal {
        self.0.into()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<Number> for Money {
    type Output = Money;

    fn mul(self, rhs: Number) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<rust_decimal::Decimal> for Money {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.into())
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
