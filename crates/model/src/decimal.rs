use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DECIMALS: u32 = 2;
const SCALE: i64 = 10i64.pow(DECIMALS);

/// Money amount in currency units with two fractional digits.
/// Stored as minor units (cents).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i64);

impl Decimal {
    /// Saturates at the bounds of the minor-unit range.
    pub fn int(value: i64) -> Decimal {
        Decimal(value.saturating_mul(SCALE))
    }

    pub fn from_minor(value: i64) -> Decimal {
        Decimal(value)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn zero() -> Decimal {
        Decimal(0)
    }

    /// Amount in minor units.
    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal((value * SCALE as f64).round() as i64)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal::int(value as i64)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = ParseDecimalError;

    // Extra fractional digits are truncated, not rounded.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value.strip_prefix('+').unwrap_or(value)),
        };
        let (units, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if units.is_empty() && fraction.is_empty() {
            return Err(ParseDecimalError);
        }
        if !units.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(ParseDecimalError);
        }

        let units = if units.is_empty() {
            0
        } else {
            units.parse::<i64>().map_err(|_| ParseDecimalError)?
        };
        let mut minor = 0;
        let mut digits = fraction.chars();
        for _ in 0..DECIMALS {
            let digit = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
            minor = minor * 10 + digit as i64;
        }

        let value = units
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(minor))
            .ok_or(ParseDecimalError)?;
        Ok(Decimal(if negative { -value } else { value }))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::try_from(s)
    }
}

#[derive(Debug)]
pub struct ParseDecimalError;

impl std::fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse decimal value")
    }
}

impl std::error::Error for ParseDecimalError {}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Decimal::from(value)),
            Repr::Text(value) => Decimal::try_from(value.as_str()).map_err(serde::de::Error::custom),
        }
    }
}
