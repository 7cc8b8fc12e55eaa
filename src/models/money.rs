//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) so that folding a dataset never
//! depends on floating-point accumulation order. On the wire amounts are
//! plain decimal numbers, the shape the dataset documents use. Totals are
//! folded in `i128` and narrowed back afterwards.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::CurrencyFormat;
use crate::display::money::format_money;

/// 2^63 as f64; centavo counts at or beyond it do not fit in an `i64`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Represents a monetary amount stored as centavos (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use rentboard::models::Money;
    /// let amount = Money::from_cents(105050); // R$ 1.050,50
    /// assert_eq!(amount.whole(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and centavos
    pub const fn from_whole_cents(whole: i64, cents: i64) -> Self {
        Self(whole * 100 + cents)
    }

    /// Create a Money amount from a decimal number, rounding half away from
    /// zero to the nearest centavo
    ///
    /// Returns `None` for NaN, infinities, and values whose centavo count does
    /// not fit in an `i64`.
    ///
    /// # Examples
    /// ```
    /// use rentboard::models::Money;
    /// assert_eq!(Money::from_decimal(206.0).unwrap().cents(), 20600);
    /// assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
    /// assert_eq!(Money::from_decimal(-0.125).unwrap().cents(), -13);
    /// assert!(Money::from_decimal(1e20).is_none());
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() >= I64_BOUND {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Narrow a wide centavo count, `None` when it does not fit
    pub fn from_wide(cents: i128) -> Option<Self> {
        i64::try_from(cents).ok().map(Self)
    }

    /// Narrow a wide centavo count, clamping to the representable range
    pub fn saturating_from_wide(cents: i128) -> Self {
        Self(cents.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Get the amount as a decimal number
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Divide a wide centavo count, rounding half away from zero
///
/// Returns zero when `count` is zero.
pub fn div_round_wide(cents: i128, count: usize) -> i128 {
    if count == 0 {
        return 0;
    }
    let divisor = count as i128;
    let quotient = cents / divisor;
    let remainder = cents % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + cents.signum()
    } else {
        quotient
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(*self, &CurrencyFormat::default()))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal amount")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_decimal(v).ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.whole(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal_rounds_half_away_from_zero() {
        assert_eq!(Money::from_decimal(1000.0).unwrap().cents(), 100000);
        assert_eq!(Money::from_decimal(10.125).unwrap().cents(), 1013);
        assert_eq!(Money::from_decimal(-10.125).unwrap().cents(), -1013);
        assert_eq!(Money::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        assert!(Money::from_decimal(1e20).is_none());
        assert!(Money::from_decimal(-1e20).is_none());
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
        assert!(Money::from_decimal(9.0e16).is_some());
    }

    #[test]
    fn test_from_wide() {
        assert_eq!(Money::from_wide(1500), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_wide(i128::from(i64::MAX) + 1), None);
        assert_eq!(
            Money::saturating_from_wide(i128::from(i64::MAX) * 2),
            Money::from_cents(i64::MAX)
        );
        assert_eq!(
            Money::saturating_from_wide(i128::from(i64::MIN) * 2),
            Money::from_cents(i64::MIN)
        );
    }

    #[test]
    fn test_div_round_wide() {
        assert_eq!(div_round_wide(220000, 2), 110000);
        assert_eq!(div_round_wide(100, 3), 33);
        assert_eq!(div_round_wide(200, 3), 67);
        assert_eq!(div_round_wide(-200, 3), -67);
        assert_eq!(div_round_wide(5, 2), 3);
        assert_eq!(div_round_wide(12345, 0), 0);
    }

    #[test]
    fn test_display_uses_brl() {
        assert_eq!(Money::from_cents(123456).to_string(), "R$ 1.234,56");
        assert_eq!(Money::from_cents(-5).to_string(), "-R$ 0,05");
    }

    #[test]
    fn test_deserialize_plain_numbers() {
        let whole: Money = serde_json::from_str("1200").unwrap();
        assert_eq!(whole.cents(), 120000);

        let decimal: Money = serde_json::from_str("1234.56").unwrap();
        assert_eq!(decimal.cents(), 123456);

        let negative: Money = serde_json::from_str("-15").unwrap();
        assert_eq!(negative.cents(), -1500);

        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e20").is_err());
        assert!(serde_json::from_str::<Money>("100000000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("92233720368547758").is_err());
        assert!(serde_json::from_str::<Money>("-1e300").is_err());
    }

    #[test]
    fn test_serialize_as_decimal() {
        assert_eq!(serde_json::to_string(&Money::from_cents(120000)).unwrap(), "1200");
        assert_eq!(serde_json::to_string(&Money::from_cents(123456)).unwrap(), "1234.56");
    }
}
