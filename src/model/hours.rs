use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseHoursError {
    /// Unable to parse decimal string.
    #[error("Unable to parse decimal string")]
    Decimal(#[from] rust_decimal::Error),
}

/// An amount of time-credits, denominated in hours.
///
/// One hour of service rendered is one credit, regardless of service type.
/// Direction (sent vs. received) is carried by the transaction type, never by
/// the sign of the amount.
#[derive(
    Copy, Clone, Debug, Default, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct HourAmount(Decimal);

impl HourAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn to_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }
}

impl Add for HourAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for HourAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for HourAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for HourAmount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for HourAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<Decimal> for HourAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for HourAmount {
    type Err = ParseHoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for HourAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let ten: HourAmount = "10".parse().unwrap();
        let three: HourAmount = "3".parse().unwrap();

        assert_eq!(ten - three, "7".parse().unwrap());
        assert_eq!(ten + three, "13".parse().unwrap());

        let mut acc = HourAmount::ZERO;
        acc += ten;
        acc -= three;
        assert_eq!(acc, "7".parse().unwrap());
    }

    #[test]
    fn fractional_hours_are_exact() {
        // 0.1 + 0.2 must be exactly 0.3, not a float approximation.
        let a: HourAmount = "0.1".parse().unwrap();
        let b: HourAmount = "0.2".parse().unwrap();

        assert_eq!(a + b, "0.3".parse().unwrap());
    }

    #[test]
    fn sign_queries() {
        assert!(!HourAmount::ZERO.is_negative());
        assert!(!HourAmount::ZERO.is_positive());

        let one: HourAmount = "1".parse().unwrap();
        assert!(one.is_positive());
        assert!((-one).is_negative());
    }
}
