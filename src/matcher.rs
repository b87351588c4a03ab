//! Matching calendar instants against cron expressions
//!
//! All five fields are combined with AND, including day-of-month and
//! day-of-week when both are restricted.

use crate::error::{CronError, Result};
use crate::expression::CronExpression;
use crate::field::{Field, FieldPattern};
use chrono::{Datelike, Timelike};

/// Whether `instant` satisfies every field of `expr`
///
/// Works on the raw field strings; a field that does not parse never matches.
pub fn expression_matches<T: Datelike + Timelike>(instant: &T, expr: &CronExpression) -> bool {
    Field::ALL
        .into_iter()
        .all(|field| field.matches(calendar_value(instant, field), expr.get(field)))
}

/// Value of `field` for a calendar instant (weekday counts from Sunday = 0)
fn calendar_value<T: Datelike + Timelike>(instant: &T, field: Field) -> u32 {
    match field {
        Field::Minute => instant.minute(),
        Field::Hour => instant.hour(),
        Field::DayOfMonth => instant.day(),
        Field::Month => instant.month(),
        Field::DayOfWeek => instant.weekday().num_days_from_sunday(),
    }
}

/// A cron expression with every field parsed and validated once
///
/// Matching a `Schedule` gives the same answer as [`expression_matches`]
/// on the expression it was compiled from, without re-parsing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    minute: FieldPattern,
    hour: FieldPattern,
    day_of_month: FieldPattern,
    month: FieldPattern,
    day_of_week: FieldPattern,
    /// Day-of-week was literally `7`, so Sundays match too
    sunday_alias: bool,
}

impl Schedule {
    /// Parse and validate all five fields, failing on the first invalid one
    pub fn compile(expr: &CronExpression) -> Result<Self> {
        let parse = |field: Field| {
            field.parse(expr.get(field)).map_err(|source| CronError::Field {
                field: field.name(),
                source,
            })
        };

        Ok(Self {
            minute: parse(Field::Minute)?,
            hour: parse(Field::Hour)?,
            day_of_month: parse(Field::DayOfMonth)?,
            month: parse(Field::Month)?,
            day_of_week: parse(Field::DayOfWeek)?,
            sunday_alias: expr.day_of_week == "7",
        })
    }

    /// Parse an expression string and compile it
    pub fn parse(expression: &str) -> Result<Self> {
        Self::compile(&CronExpression::parse(expression)?)
    }

    pub fn pattern(&self, field: Field) -> &FieldPattern {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    /// Check if a calendar instant matches this schedule
    pub fn matches<T: Datelike + Timelike>(&self, instant: &T) -> bool {
        let weekday = instant.weekday().num_days_from_sunday();

        self.minute.matches(instant.minute())
            && self.hour.matches(instant.hour())
            && self.day_of_month.matches(instant.day())
            && self.month.matches(instant.month())
            && (self.day_of_week.matches(weekday)
                || (weekday == 0 && self.sunday_alias))
    }
}
