//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The ledger is currency-agnostic, so the default display has no
//! symbol; callers can prefix one from their settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional cents portion (0-99)
    pub const fn subunits(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts whole-unit and decimal forms: "10", "10.5", "10.50", "-3.25".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = match s.split_once('.') {
            Some((whole, frac)) => {
                let units: i64 = whole
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }

                // One or two fractional digits; more are truncated
                let frac = if frac.len() > 2 { &frac[..2] } else { frac };
                let frac_cents: i64 = match frac.len() {
                    0 => 0,
                    1 => {
                        frac.parse::<i64>()
                            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                            * 10
                    }
                    _ => frac
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
                };

                // Amounts near i64::MAX cents must fail, not wrap
                units
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(frac_cents))
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol prefix
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.subunits())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.subunits())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.subunits())
        } else {
            write!(f, "{}.{:02}", self.units(), self.subunits())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.subunits(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("€"), "-€10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("-3.25").unwrap().cents(), -325);
        assert_eq!(Money::parse(" 42 ").unwrap().cents(), 4200);
        assert_eq!(Money::parse("10.999").unwrap().cents(), 1099);
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("10.x€").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_oversized_amount_is_an_error() {
        // One unit past i64::MAX cents in each syntactic form
        assert!(Money::parse("92233720368547759").is_err());
        assert!(Money::parse("92233720368547758.99").is_err());
        // The largest representable amount still parses
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(300);

        assert_eq!((a + b).cents(), 1300);
        assert_eq!((a - b).cents(), 700);
        assert_eq!((-a).cents(), -1000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1300);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_sum_and_ordering() {
        let total: Money = [100, 200, 300].iter().map(|&c| Money::from_cents(c)).sum();
        assert_eq!(total.cents(), 600);
        assert!(Money::from_cents(1000) > Money::from_cents(999));
    }

    #[test]
    fn test_serialization_is_plain_cents() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
