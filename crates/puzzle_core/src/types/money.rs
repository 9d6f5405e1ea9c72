//! Fixed-point currency amounts.
//!
//! This module provides [`Money`], a signed count of cents, and the
//! [`TOLERANCE`] constant used for sum-to-target comparisons. All puzzle
//! arithmetic happens on integer cents; decimal floating point appears only
//! when converting to and from the display/serialisation boundary.
//!
//! # Examples
//!
//! ```
//! use puzzle_core::types::money::Money;
//!
//! let target: Money = "734.18".parse().unwrap();
//! let price1 = Money::from_parts(312, 40);
//! assert_eq!(target - price1, Money::from_parts(421, 78));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::error::MoneyError;

/// Equality tolerance for sum-to-target comparisons: 0.01 currency units.
///
/// Two amounts are "equal within tolerance" when their absolute difference is
/// strictly below one cent. On integer cents that degenerates to exact
/// equality, which is the point: the invariant is robust rather than
/// coincidentally true of a particular floating-point rounding.
pub const TOLERANCE: Money = Money::from_cents(1);

/// A currency amount stored as a signed 64-bit count of cents.
///
/// `Money` is `Copy` and totally ordered. Arithmetic is plain integer
/// arithmetic on cents; conversion to binary floating point only happens at
/// the boundary via [`Money::as_f64`] and the serde implementations.
///
/// # Examples
///
/// ```
/// use puzzle_core::types::money::Money;
///
/// let a = Money::from_parts(10, 50);
/// let b = Money::from_cents(1050);
/// assert_eq!(a, b);
/// assert_eq!((a + b).to_string(), "21.00");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from a raw cent count.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_core::types::money::Money;
    ///
    /// assert_eq!(Money::from_cents(73418).to_string(), "734.18");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a non-negative amount from whole dollars and a cent remainder.
    ///
    /// `cents` must be in `0..=99`.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_core::types::money::Money;
    ///
    /// let price = Money::from_parts(312, 40);
    /// assert_eq!(price.cents(), 31240);
    /// ```
    #[inline]
    pub const fn from_parts(dollars: i64, cents: i64) -> Self {
        debug_assert!(dollars >= 0);
        debug_assert!(cents >= 0 && cents < 100);
        Self(dollars * 100 + cents)
    }

    /// Creates an amount from a floating-point dollar value, rounding to the
    /// nearest cent.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NonFinite`] for NaN or infinite input and
    /// [`MoneyError::OutOfRange`] when the rounded cent count does not fit
    /// in 64 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_core::types::money::Money;
    ///
    /// let price = Money::from_f64(421.78).unwrap();
    /// assert_eq!(price, Money::from_parts(421, 78));
    /// assert!(Money::from_f64(f64::NAN).is_err());
    /// ```
    pub fn from_f64(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NonFinite(value));
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return Err(MoneyError::OutOfRange(value));
        }
        Ok(Self(cents as i64))
    }

    /// Returns the raw cent count.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount as floating-point dollars.
    ///
    /// Only intended for the display/serialisation boundary; comparisons and
    /// arithmetic should stay on [`Money`].
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the absolute difference between two amounts.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_core::types::money::{Money, TOLERANCE};
    ///
    /// let a = Money::from_parts(100, 0);
    /// let b = Money::from_parts(99, 99);
    /// assert_eq!(a.abs_diff(b), TOLERANCE);
    /// ```
    #[inline]
    pub const fn abs_diff(&self, other: Money) -> Money {
        Self((self.0 - other.0).abs())
    }

    /// Returns `true` when the amount is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::from_cents(0), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    /// Formats as decimal dollars with exactly two fraction digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses a decimal dollar amount with at most two fraction digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_core::types::money::Money;
    ///
    /// assert_eq!("734.18".parse::<Money>().unwrap().cents(), 73418);
    /// assert_eq!("-3.07".parse::<Money>().unwrap().cents(), -307);
    /// assert_eq!("50".parse::<Money>().unwrap().cents(), 5000);
    /// assert!("12.345".parse::<Money>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, MoneyError> {
        let parse_err = || MoneyError::Parse(s.to_string());
        let raw = s.trim();

        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) if !f.is_empty() => (w, f),
            Some(_) => return Err(parse_err()), // trailing dot
            None => (body, ""),
        };

        if whole.is_empty() || frac.len() > 2 {
            return Err(parse_err());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_err());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_err());
        }

        let dollars: i64 = whole.parse().map_err(|_| parse_err())?;
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| parse_err())? * 10,
            _ => frac.parse().map_err(|_| parse_err())?,
        };

        let magnitude = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(parse_err)?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    /// Serialises as a plain decimal number (e.g. `421.78`), matching the
    /// external item shape.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    /// Deserialises from a decimal number, rounding to the nearest cent.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <f64 as serde::Deserialize>::deserialize(deserializer)?;
        Money::from_f64(value).map_err(serde::de::Error::custom)
    }
}
