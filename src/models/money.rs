//! Money type for representing currency amounts
//!
//! Amounts are whole currency units stored as i64; the planner's currency has
//! no minor units. Provides exact arithmetic and the fixed display locale
//! (`Rp 1,250,000`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbol used when no symbol is configured
pub const DEFAULT_SYMBOL: &str = "Rp";

/// Represents a monetary amount in whole currency units
///
/// Serializes as a plain integer. Plan files may also write amounts as
/// strings such as `"50,000,000"` or `"Rp 1,500"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyInput", into = "i64")]
pub struct Money(i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyInput {
    Units(i64),
    Text(String),
}

impl TryFrom<MoneyInput> for Money {
    type Error = MoneyParseError;

    fn try_from(input: MoneyInput) -> Result<Self, Self::Error> {
        match input {
            MoneyInput::Units(units) => Ok(Self(units)),
            MoneyInput::Text(text) => Self::parse(&text),
        }
    }
}

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use family_planner::models::Money;
    /// let amount = Money::new(1_500_000);
    /// assert_eq!(amount.units(), 1_500_000);
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Get the amount as a float for ratio and growth arithmetic
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, returning `None` if any partial sum overflows
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "50000000", "50,000,000", "Rp 50,000,000", "-1,000",
    /// and any other currency symbol prefix ("$ 1,500", "-€1,000"), so text
    /// written with a configured symbol reads back.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s
            .trim_start_matches(|c: char| !c.is_ascii_digit() && !c.is_whitespace() && c != ',')
            .trim_start();
        let digits: String = s.chars().filter(|c| *c != ',').collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format_amount(self.as_f64(), symbol)
    }
}

/// Format a (possibly fractional) amount in the display locale
///
/// Rounds to whole units and groups thousands with commas.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{} {}", symbol, grouped)
    } else {
        format!("{} {}", symbol, grouped)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
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

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
