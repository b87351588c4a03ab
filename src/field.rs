//! Field grammar and validation
//!
//! Each of the five positional fields accepts the same pattern shapes:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 = Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! - `*` - any value
//! - `n` - a single value
//! - `a,b,c` - value list
//! - `a-b` - inclusive range, `a` strictly less than `b`
//! - `*/n`, `a/n`, `a-b/n` - step

use crate::error::CronError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five positional fields of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

/// Numeric bounds and display name of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDomain {
    pub min: u32,
    pub max: u32,
    pub name: &'static str,
}

impl FieldDomain {
    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

static DOMAINS: [FieldDomain; 5] = [
    FieldDomain { min: 0, max: 59, name: "Minute" },
    FieldDomain { min: 0, max: 23, name: "Hour" },
    FieldDomain { min: 1, max: 31, name: "Day of Month" },
    FieldDomain { min: 1, max: 12, name: "Month" },
    // 0 and 7 both denote Sunday
    FieldDomain { min: 0, max: 7, name: "Day of Week" },
];

impl Field {
    /// All fields in positional order
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    fn index(self) -> usize {
        match self {
            Field::Minute => 0,
            Field::Hour => 1,
            Field::DayOfMonth => 2,
            Field::Month => 3,
            Field::DayOfWeek => 4,
        }
    }

    /// Wire name of the field (`minute`, `hour`, `dayOfMonth`, `month`, `dayOfWeek`)
    pub fn key(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "dayOfMonth",
            Field::Month => "month",
            Field::DayOfWeek => "dayOfWeek",
        }
    }

    pub fn domain(self) -> &'static FieldDomain {
        &DOMAINS[self.index()]
    }

    /// Human-readable name (e.g. "Day of Month")
    pub fn name(self) -> &'static str {
        self.domain().name
    }

    /// Sample patterns shown next to the field in the builder
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            Field::Minute => &["0", "15", "30", "45", "*/5", "0-30", "0,15,30,45"],
            Field::Hour => &["0", "12", "18", "*/6", "9-17", "0,6,12,18"],
            Field::DayOfMonth => &["1", "15", "28", "*/5", "1-15", "1,15,30"],
            Field::Month => &["1", "6", "12", "*/3", "1-6", "1,4,7,10"],
            Field::DayOfWeek => &["0", "1", "5", "1-5", "0,6"],
        }
    }

    /// Parse `value` as a pattern for this field, enforcing the field's domain
    pub fn parse(self, value: &str) -> Result<FieldPattern, FieldError> {
        parse_pattern(value, Some(self.domain()))
    }

    /// Whether `value` satisfies the raw `pattern` for this field
    ///
    /// Unparseable patterns never match. For the day-of-week field a
    /// Sunday (`0`) also matches the literal pattern `"7"`.
    pub fn matches(self, value: u32, pattern: &str) -> bool {
        field_matches(value, pattern)
            || (self == Field::DayOfWeek && value == 0 && pattern == "7")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CronError::UnknownField(s.to_string()))
    }
}

/// Why a single field pattern was rejected
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field cannot be empty")]
    Empty,

    #[error("Invalid step format. Use */n or start-end/step")]
    StepFormat,

    #[error("Step value must be a positive number")]
    StepValue,

    #[error("Invalid range format. Use n-m")]
    RangeFormat,

    #[error("Range values must be numbers")]
    RangeNotNumeric,

    #[error("Start value must be between {min} and {max}")]
    StartOutOfRange { min: u32, max: u32 },

    #[error("End value must be between {min} and {max}")]
    EndOutOfRange { min: u32, max: u32 },

    #[error("Start value must be less than end value")]
    RangeOrder,

    #[error("All values must be between {min} and {max}")]
    ListOutOfRange { min: u32, max: u32 },

    #[error("Must be a number, *, range (n-m), list (n,m), or step (*/n)")]
    NotNumeric,

    #[error("Value must be between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },
}

/// Base of a step pattern (the part before `/`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBase {
    /// `*/n`
    Wildcard,
    /// `a/n`, unbounded above
    Start(u32),
    /// `a-b/n`
    Range(u32, u32),
}

/// A parsed field pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPattern {
    Wildcard,
    Value(u32),
    List(Vec<u32>),
    Range(u32, u32),
    Step { base: StepBase, step: u32 },
}

impl FieldPattern {
    /// Parse a pattern without checking it against any field domain
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        parse_pattern(value, None)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, FieldPattern::Wildcard)
    }

    /// Whether `value` satisfies this pattern
    pub fn matches(&self, value: u32) -> bool {
        match self {
            FieldPattern::Wildcard => true,
            FieldPattern::Value(v) => *v == value,
            FieldPattern::List(values) => values.contains(&value),
            FieldPattern::Range(start, end) => (*start..=*end).contains(&value),
            FieldPattern::Step { base, step } => match *base {
                StepBase::Wildcard => value.checked_rem(*step) == Some(0),
                StepBase::Start(start) => {
                    value >= start && (value - start).checked_rem(*step) == Some(0)
                }
                StepBase::Range(start, end) => {
                    (start..=end).contains(&value)
                        && (value - start).checked_rem(*step) == Some(0)
                }
            },
        }
    }
}

impl FromStr for FieldPattern {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPattern::parse(s)
    }
}

/// Validate a single field value against its domain
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::{validate_field, Field, FieldError};
///
/// assert!(validate_field("*/15", Field::Minute).is_ok());
/// assert!(validate_field("7", Field::DayOfWeek).is_ok());
/// assert_eq!(
///     validate_field("24", Field::Hour),
///     Err(FieldError::OutOfRange { min: 0, max: 23 })
/// );
/// ```
pub fn validate_field(value: &str, field: Field) -> Result<(), FieldError> {
    field.parse(value).map(|_| ())
}

/// Whether `value` satisfies the raw `pattern`, with no domain knowledge
///
/// Unparseable patterns never match.
pub fn field_matches(value: u32, pattern: &str) -> bool {
    FieldPattern::parse(pattern).map_or(false, |p| p.matches(value))
}

/// Shapes are recognised in a fixed order: step, range, list, single value.
/// Without a domain only the syntax is checked.
fn parse_pattern(value: &str, domain: Option<&FieldDomain>) -> Result<FieldPattern, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty);
    }

    if value == "*" {
        return Ok(FieldPattern::Wildcard);
    }

    if value.contains('/') {
        let parts: Vec<&str> = value.split('/').collect();
        let [base, step] = parts.as_slice() else {
            return Err(FieldError::StepFormat);
        };

        let step = match parse_number(step) {
            Some(step) if step > 0 => step,
            _ => return Err(FieldError::StepValue),
        };

        let base = if *base == "*" {
            StepBase::Wildcard
        } else if base.contains('-') {
            let (start, end) = parse_range(base, domain)?;
            StepBase::Range(start, end)
        } else {
            let start = parse_number(base)
                .filter(|n| in_domain(domain, *n))
                .ok_or_else(|| {
                    domain_error(domain, |min, max| FieldError::StartOutOfRange { min, max })
                })?;
            StepBase::Start(start)
        };

        return Ok(FieldPattern::Step { base, step });
    }

    if value.contains('-') {
        let (start, end) = parse_range(value, domain)?;
        return Ok(FieldPattern::Range(start, end));
    }

    if value.contains(',') {
        let values = value
            .split(',')
            .map(|v| parse_number(v).filter(|n| in_domain(domain, *n)))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| {
                domain_error(domain, |min, max| FieldError::ListOutOfRange { min, max })
            })?;
        return Ok(FieldPattern::List(values));
    }

    let number = parse_number(value).ok_or(FieldError::NotNumeric)?;
    if let Some(d) = domain {
        if !d.contains(number) {
            return Err(FieldError::OutOfRange {
                min: d.min,
                max: d.max,
            });
        }
    }
    Ok(FieldPattern::Value(number))
}

fn parse_range(range: &str, domain: Option<&FieldDomain>) -> Result<(u32, u32), FieldError> {
    let parts: Vec<&str> = range.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(FieldError::RangeFormat);
    };

    let (Some(start), Some(end)) = (parse_number(start), parse_number(end)) else {
        return Err(FieldError::RangeNotNumeric);
    };

    if let Some(d) = domain {
        if !d.contains(start) {
            return Err(FieldError::StartOutOfRange {
                min: d.min,
                max: d.max,
            });
        }
        if !d.contains(end) {
            return Err(FieldError::EndOutOfRange {
                min: d.min,
                max: d.max,
            });
        }
        if start >= end {
            return Err(FieldError::RangeOrder);
        }
    }

    Ok((start, end))
}

/// Digit strings too large for `u32` saturate, so they fail the domain
/// check rather than being reported as non-numeric
fn parse_number(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn in_domain(domain: Option<&FieldDomain>, value: u32) -> bool {
    domain.map_or(true, |d| d.contains(value))
}

/// Domain-flavoured error when a domain is known, a syntax error otherwise
fn domain_error(
    domain: Option<&FieldDomain>,
    make: impl FnOnce(u32, u32) -> FieldError,
) -> FieldError {
    match domain {
        Some(d) => make(d.min, d.max),
        None => FieldError::NotNumeric,
    }
}
