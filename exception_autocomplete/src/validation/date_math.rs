//! Date math expressions
//!
//! Grammar (elasticsearch datemath):
//!
//! ```text
//! expression := anchor operation*
//! anchor     := "now" | <date> "||"
//! operation  := ("+" | "-") digits? unit | "/" unit
//! unit       := y | M | w | d | h | H | m | s
//! ```
//!
//! A missing amount means 1. Rounding (`/unit`) always rounds down, and weeks
//! start on Monday.

use super::date;
use crate::config::compile_time::validation::MAX_DATE_MATH_OPERATIONS;
use crate::logging::codes;
use chrono::{DateTime, Datelike, Days, Duration, FixedOffset, Months, NaiveDate, TimeZone, Timelike};
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

pub type DateMathResult<T> = Result<T, DateMathError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateMathError {
    #[error("Expression '{expression}' must start with 'now' or '<date>||'")]
    MissingAnchor { expression: String },

    #[error("Anchor '{anchor}' is not a valid date")]
    InvalidAnchor { anchor: String },

    #[error("Unexpected '{found}' at position {position}, expected '+', '-' or '/'")]
    InvalidOperator { found: char, position: usize },

    #[error("Unknown time unit '{found}' at position {position}")]
    InvalidUnit { found: char, position: usize },

    #[error("Operation at position {position} is missing its time unit")]
    MissingUnit { position: usize },

    #[error("Amount '{amount}' is too large")]
    InvalidAmount { amount: String },

    #[error("Expression has more than {max} operations")]
    TooManyOperations { max: usize },

    #[error("Expression resolves outside the supported date range")]
    OutOfRange,
}

impl DateMathError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::OutOfRange => codes::validation::DATE_OUT_OF_RANGE,
            _ => codes::validation::INVALID_DATE_MATH,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MissingAnchor { .. } => "MissingAnchor",
            Self::InvalidAnchor { .. } => "InvalidAnchor",
            Self::InvalidOperator { .. } => "InvalidOperator",
            Self::InvalidUnit { .. } => "InvalidUnit",
            Self::MissingUnit { .. } => "MissingUnit",
            Self::InvalidAmount { .. } => "InvalidAmount",
            Self::TooManyOperations { .. } => "TooManyOperations",
            Self::OutOfRange => "OutOfRange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'w' => Some(Self::Week),
            'd' => Some(Self::Day),
            'h' | 'H' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Year => 'y',
            Self::Month => 'M',
            Self::Week => 'w',
            Self::Day => 'd',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
        }
    }

    /// Length in seconds, for units that have a fixed length
    fn fixed_seconds(&self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Week => Some(7 * 86_400),
            Self::Day => Some(86_400),
            Self::Hour => Some(3_600),
            Self::Minute => Some(60),
            Self::Second => Some(1),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Now,
    Date(DateTime<FixedOffset>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMathOp {
    Add(u32, TimeUnit),
    Subtract(u32, TimeUnit),
    RoundDown(TimeUnit),
}

impl DateMathOp {
    fn apply(&self, instant: DateTime<FixedOffset>) -> DateMathResult<DateTime<FixedOffset>> {
        match *self {
            Self::Add(amount, unit) => shift(instant, amount, unit, true),
            Self::Subtract(amount, unit) => shift(instant, amount, unit, false),
            Self::RoundDown(unit) => round_down(instant, unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMathExpr {
    pub anchor: Anchor,
    pub operations: Vec<DateMathOp>,
}

impl DateMathExpr {
    /// Evaluate the expression against an explicit reference instant
    pub fn resolve(&self, now: DateTime<FixedOffset>) -> DateMathResult<DateTime<FixedOffset>> {
        let start = match self.anchor {
            Anchor::Now => now,
            Anchor::Date(anchor) => anchor,
        };

        self.operations
            .iter()
            .try_fold(start, |instant, operation| operation.apply(instant))
    }

    pub fn is_relative(&self) -> bool {
        self.anchor == Anchor::Now
    }
}

/// Parse a date math expression
pub fn parse(expression: &str) -> DateMathResult<DateMathExpr> {
    let (anchor, math) = if let Some(rest) = expression.strip_prefix("now") {
        (Anchor::Now, rest)
    } else if let Some((anchor, rest)) = expression.split_once("||") {
        let parsed = date::parse_date(anchor).ok_or_else(|| DateMathError::InvalidAnchor {
            anchor: anchor.to_string(),
        })?;
        (Anchor::Date(parsed), rest)
    } else {
        return Err(DateMathError::MissingAnchor {
            expression: expression.to_string(),
        });
    };

    let operations = parse_operations(math, expression.len() - math.len())?;

    Ok(DateMathExpr { anchor, operations })
}

pub fn is_valid_date_math(expression: &str) -> bool {
    parse(expression).is_ok()
}

fn parse_operations(math: &str, offset: usize) -> DateMathResult<Vec<DateMathOp>> {
    let mut operations = Vec::new();
    let mut chars = math.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let position = offset + index;

        let operation = match c {
            '/' => DateMathOp::RoundDown(next_unit(&mut chars, offset, position)?),
            '+' | '-' => {
                let mut digits = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d);
                    chars.next();
                }

                let amount = if digits.is_empty() {
                    1
                } else {
                    digits
                        .parse::<u32>()
                        .map_err(|_| DateMathError::InvalidAmount { amount: digits })?
                };

                let unit = next_unit(&mut chars, offset, position)?;
                if c == '+' {
                    DateMathOp::Add(amount, unit)
                } else {
                    DateMathOp::Subtract(amount, unit)
                }
            }
            found => return Err(DateMathError::InvalidOperator { found, position }),
        };

        operations.push(operation);
        if operations.len() > MAX_DATE_MATH_OPERATIONS {
            return Err(DateMathError::TooManyOperations {
                max: MAX_DATE_MATH_OPERATIONS,
            });
        }
    }

    Ok(operations)
}

fn next_unit(
    chars: &mut Peekable<CharIndices<'_>>,
    offset: usize,
    operator_position: usize,
) -> DateMathResult<TimeUnit> {
    match chars.next() {
        Some((index, c)) => TimeUnit::from_char(c).ok_or(DateMathError::InvalidUnit {
            found: c,
            position: offset + index,
        }),
        None => Err(DateMathError::MissingUnit {
            position: operator_position,
        }),
    }
}

fn shift(
    instant: DateTime<FixedOffset>,
    amount: u32,
    unit: TimeUnit,
    forward: bool,
) -> DateMathResult<DateTime<FixedOffset>> {
    let shifted = match unit.fixed_seconds() {
        Some(seconds) => {
            // u32 amounts of whole weeks stay far inside the Duration range
            let delta = Duration::seconds(i64::from(amount) * seconds);
            if forward {
                instant.checked_add_signed(delta)
            } else {
                instant.checked_sub_signed(delta)
            }
        }
        None => {
            let months = if unit == TimeUnit::Year {
                amount.checked_mul(12).ok_or(DateMathError::OutOfRange)?
            } else {
                amount
            };
            if forward {
                instant.checked_add_months(Months::new(months))
            } else {
                instant.checked_sub_months(Months::new(months))
            }
        }
    };

    shifted.ok_or(DateMathError::OutOfRange)
}

fn round_down(
    instant: DateTime<FixedOffset>,
    unit: TimeUnit,
) -> DateMathResult<DateTime<FixedOffset>> {
    let local = instant.naive_local();
    let day = local.date();

    let start_of = |date: Option<NaiveDate>| date.and_then(|d| d.and_hms_opt(0, 0, 0));

    let rounded = match unit {
        TimeUnit::Year => start_of(NaiveDate::from_ymd_opt(day.year(), 1, 1)),
        TimeUnit::Month => start_of(NaiveDate::from_ymd_opt(day.year(), day.month(), 1)),
        TimeUnit::Week => start_of(day.checked_sub_days(Days::new(u64::from(
            day.weekday().num_days_from_monday(),
        )))),
        TimeUnit::Day => start_of(Some(day)),
        TimeUnit::Hour => day.and_hms_opt(local.hour(), 0, 0),
        TimeUnit::Minute => day.and_hms_opt(local.hour(), local.minute(), 0),
        TimeUnit::Second => day.and_hms_opt(local.hour(), local.minute(), local.second()),
    }
    .ok_or(DateMathError::OutOfRange)?;

    instant
        .offset()
        .from_local_datetime(&rounded)
        .single()
        .ok_or(DateMathError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn at(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    #[test]
    fn test_parse_now() {
        let expr = parse("now").unwrap();
        assert!(expr.is_relative());
        assert!(expr.operations.is_empty());
    }

    #[test]
    fn test_parse_operations() {
        let expr = parse("now-15m/d+1h").unwrap();
        assert_eq!(
            expr.operations,
            vec![
                DateMathOp::Subtract(15, TimeUnit::Minute),
                DateMathOp::RoundDown(TimeUnit::Day),
                DateMathOp::Add(1, TimeUnit::Hour),
            ]
        );
    }

    #[test]
    fn test_missing_amount_defaults_to_one() {
        let expr = parse("now-d").unwrap();
        assert_eq!(expr.operations, vec![DateMathOp::Subtract(1, TimeUnit::Day)]);
    }

    #[test]
    fn test_parse_date_anchor() {
        let expr = parse("2020-01-01T00:00:00Z||+1M/d").unwrap();
        assert_eq!(expr.anchor, Anchor::Date(at("2020-01-01T00:00:00Z")));
        assert!(!expr.is_relative());
    }

    #[test]
    fn test_parse_errors() {
        assert_matches!(parse("1593478826"), Err(DateMathError::MissingAnchor { .. }));
        assert_matches!(parse("tomorrow||+1d"), Err(DateMathError::InvalidAnchor { .. }));
        assert_matches!(
            parse("nowhere"),
            Err(DateMathError::InvalidOperator { found: 'h', position: 3 })
        );
        assert_matches!(
            parse("now+1q"),
            Err(DateMathError::InvalidUnit { found: 'q', position: 5 })
        );
        assert_matches!(parse("now-"), Err(DateMathError::MissingUnit { position: 3 }));
        assert_matches!(
            parse("now+99999999999d"),
            Err(DateMathError::InvalidAmount { .. })
        );
    }

    #[test]
    fn test_too_many_operations() {
        let expression = format!("now{}", "+1s".repeat(MAX_DATE_MATH_OPERATIONS + 1));
        assert_matches!(
            parse(&expression),
            Err(DateMathError::TooManyOperations { .. })
        );
    }

    #[test]
    fn test_resolve_relative() {
        let now = at("2020-06-30T12:34:56+02:00");

        assert_eq!(parse("now").unwrap().resolve(now).unwrap(), now);
        assert_eq!(
            parse("now-1d").unwrap().resolve(now).unwrap(),
            at("2020-06-29T12:34:56+02:00")
        );
        assert_eq!(
            parse("now/d").unwrap().resolve(now).unwrap(),
            at("2020-06-30T00:00:00+02:00")
        );
        assert_eq!(
            parse("now+1M/M").unwrap().resolve(now).unwrap(),
            at("2020-07-01T00:00:00+02:00")
        );
        assert_eq!(
            parse("now/w").unwrap().resolve(now).unwrap(),
            at("2020-06-29T00:00:00+02:00")
        );
        assert_eq!(
            parse("now-1y/y").unwrap().resolve(now).unwrap(),
            at("2019-01-01T00:00:00+02:00")
        );
        assert_eq!(
            parse("now/H").unwrap().resolve(now).unwrap(),
            at("2020-06-30T12:00:00+02:00")
        );
    }

    #[test]
    fn test_resolve_month_end_clamps() {
        let expr = parse("2020-01-31T00:00:00Z||+1M").unwrap();
        assert_eq!(
            expr.resolve(at("1970-01-01T00:00:00Z")).unwrap(),
            at("2020-02-29T00:00:00Z")
        );
    }

    #[test]
    fn test_resolve_out_of_range() {
        let expr = parse("now+4294967295y").unwrap();
        assert_eq!(
            expr.resolve(at("2020-01-01T00:00:00Z")),
            Err(DateMathError::OutOfRange)
        );
        assert_eq!(
            DateMathError::OutOfRange.error_code(),
            codes::validation::DATE_OUT_OF_RANGE
        );
        assert_eq!(DateMathError::OutOfRange.error_type(), "OutOfRange");
    }
}
