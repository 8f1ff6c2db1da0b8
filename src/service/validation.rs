//! Price rule for restaurant/pizza associations.

use serde_json::Number;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Structured reason a value was rejected before reaching storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: Number,
        min: i64,
        max: i64,
    },
    #[error("{field} must be a whole number, got {value}")]
    NotInteger { field: &'static str, value: Number },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } | ValidationError::NotInteger { field, .. } => field,
        }
    }
}

/// Price of a pizza at one restaurant, always within [`Price::RANGE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i32);

impl Price {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 30;
    pub const RANGE: RangeInclusive<i32> = Self::MIN..=Self::MAX;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match i32::try_from(value) {
            Ok(v) if Self::RANGE.contains(&v) => Ok(Price(v)),
            _ => Err(Self::out_of_range(Number::from(value))),
        }
    }

    /// Accepts any JSON number. Integers beyond i64 and whole-valued floats are
    /// range checked like any other integer; fractional values are rejected.
    pub fn from_number(n: &Number) -> Result<Self, ValidationError> {
        if let Some(i) = n.as_i64() {
            return Self::new(i);
        }
        if n.as_u64().is_some() {
            return Err(Self::out_of_range(n.clone()));
        }
        match n.as_f64() {
            Some(f) if f.fract() != 0.0 => Err(ValidationError::NotInteger {
                field: "price",
                value: n.clone(),
            }),
            Some(f) if f >= Self::MIN as f64 && f <= Self::MAX as f64 => Ok(Price(f as i32)),
            _ => Err(Self::out_of_range(n.clone())),
        }
    }

    fn out_of_range(value: Number) -> ValidationError {
        ValidationError::OutOfRange {
            field: "price",
            value,
            min: Self::MIN as i64,
            max: Self::MAX as i64,
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(raw: &str) -> Number {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn accepts_every_price_in_range() {
        for p in 1..=30 {
            assert_eq!(Price::new(p).unwrap().get() as i64, p);
        }
    }

    #[test]
    fn rejects_prices_outside_range() {
        for p in [i64::MIN, -1, 0, 31, 50, i64::from(i32::MAX) + 1] {
            let err = Price::new(p).unwrap_err();
            assert_eq!(err.field(), "price");
            assert_eq!(
                err,
                ValidationError::OutOfRange {
                    field: "price",
                    value: Number::from(p),
                    min: 1,
                    max: 30
                }
            );
        }
    }

    #[test]
    fn message_names_the_bounds() {
        let err = Price::new(50).unwrap_err();
        assert_eq!(err.to_string(), "price must be between 1 and 30, got 50");
    }

    #[test]
    fn json_numbers_of_any_width_are_range_checked() {
        assert_eq!(Price::from_number(&number("12")).unwrap().get(), 12);
        assert_eq!(Price::from_number(&number("30.0")).unwrap().get(), 30);

        for raw in ["100000000000000000000", "18446744073709551615", "-9223372036854775809", "31.0", "0", "1e3"] {
            assert!(
                matches!(Price::from_number(&number(raw)), Err(ValidationError::OutOfRange { .. })),
                "{}",
                raw
            );
        }
        for raw in ["50.5", "5.5", "-0.5"] {
            assert!(
                matches!(Price::from_number(&number(raw)), Err(ValidationError::NotInteger { .. })),
                "{}",
                raw
            );
        }
    }
}
