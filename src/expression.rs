//! Cron expression record
//!
//! Converts between the five-token wire string and the structured record,
//! and aggregates per-field validation into a whole-expression verdict.

use crate::error::{CronError, Result};
use crate::field::{validate_field, Field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cron expression split into its five raw field patterns
///
/// Fields are kept as the strings the user typed; see [`crate::Schedule`]
/// for the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronExpression {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl CronExpression {
    /// Split an expression on whitespace into its five fields
    ///
    /// Only the token count is checked here; use [`validate_expression`]
    /// for field-level checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cronexpr::CronExpression;
    ///
    /// let expr = CronExpression::parse("*/5 0-6 1,15 */2 1-5").unwrap();
    /// assert_eq!(expr.minute, "*/5");
    /// assert_eq!(expr.day_of_week, "1-5");
    ///
    /// assert!(CronExpression::parse("* * *").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();

        let [minute, hour, day_of_month, month, day_of_week] = parts.as_slice() else {
            return Err(CronError::FieldCount { found: parts.len() });
        };

        Ok(Self {
            minute: minute.to_string(),
            hour: hour.to_string(),
            day_of_month: day_of_month.to_string(),
            month: month.to_string(),
            day_of_week: day_of_week.to_string(),
        })
    }

    /// Join the five fields with single spaces
    pub fn build(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }

    /// Raw pattern of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    /// Replace the raw pattern of one field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Minute => &mut self.minute,
            Field::Hour => &mut self.hour,
            Field::DayOfMonth => &mut self.day_of_month,
            Field::Month => &mut self.month,
            Field::DayOfWeek => &mut self.day_of_week,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`CronExpression::set`]
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate over `(field, pattern)` pairs in positional order
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Check every field against its domain, collecting all failures
    pub fn validate(&self) -> ValidationResult {
        let errors: Vec<String> = self
            .fields()
            .filter_map(|(field, value)| {
                validate_field(value, field)
                    .err()
                    .map(|e| format!("{}: {}", field.name(), e))
            })
            .collect();

        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}

impl Default for CronExpression {
    /// `* * * * *`
    fn default() -> Self {
        Self {
            minute: "*".to_string(),
            hour: "*".to_string(),
            day_of_month: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
        }
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Outcome of validating a whole expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// One message per failing field, prefixed with the field's name
    pub errors: Vec<String>,
}

/// Validate a cron expression string
///
/// A wrong field count yields a single error; otherwise every failing
/// field contributes one message, in positional order.
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::validate_expression;
///
/// let result = validate_expression("60 25 * * *");
/// assert!(!result.valid);
/// assert_eq!(result.errors, vec![
///     "Minute: Value must be between 0 and 59".to_string(),
///     "Hour: Value must be between 0 and 23".to_string(),
/// ]);
/// ```
pub fn validate_expression(expression: &str) -> ValidationResult {
    match CronExpression::parse(expression) {
        Ok(expr) => expr.validate(),
        Err(e) => ValidationResult {
            valid: false,
            errors: vec![e.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_minute() {
        let expr = CronExpression::parse("* * * * *").unwrap();
        assert_eq!(expr, CronExpression::default());
    }

    #[test]
    fn test_parse_complex() {
        let expr = CronExpression::parse("*/5 0-6 1,15 */2 1-5").unwrap();
        assert_eq!(expr.minute, "*/5");
        assert_eq!(expr.hour, "0-6");
        assert_eq!(expr.day_of_month, "1,15");
        assert_eq!(expr.month, "*/2");
        assert_eq!(expr.day_of_week, "1-5");
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let expr = CronExpression::parse("  0\t12   * *\n* ").unwrap();
        assert_eq!(expr.build(), "0 12 * * *");
    }

    #[test]
    fn test_parse_wrong_field_count() {
        for input in ["", "*", "* *", "* * *", "* * * *", "* * * * * *"] {
            let err = CronExpression::parse(input).unwrap_err();
            assert!(err.to_string().contains("must have exactly 5 fields"));
        }
        match CronExpression::parse("* * *") {
            Err(CronError::FieldCount { found }) => assert_eq!(found, 3),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_does_not_check_shapes() {
        let expr = CronExpression::parse("a b c d e").unwrap();
        assert_eq!(expr.minute, "a");
    }

    #[test]
    fn test_build() {
        let expr = CronExpression {
            minute: "0".to_string(),
            hour: "12".to_string(),
            ..Default::default()
        };
        assert_eq!(expr.build(), "0 12 * * *");
        assert_eq!(expr.to_string(), "0 12 * * *");
    }

    #[test]
    fn test_get_and_set() {
        let mut expr = CronExpression::default();
        expr.set(Field::Hour, "9");
        assert_eq!(expr.get(Field::Hour), "9");

        let expr = expr.with_field(Field::DayOfWeek, "1-5");
        assert_eq!(expr.build(), "* 9 * * 1-5");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let expr: CronExpression = "0 9 1 * 1-5".parse().unwrap();
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["dayOfMonth"], "1");
        assert_eq!(json["dayOfWeek"], "1-5");

        let back: CronExpression = serde_json::from_value(json).unwrap();
        assert_eq!(back, expr);
    }

    #[test]
    fn test_validate_valid() {
        let result = validate_expression("* * * * *");
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(validate_expression("*/5 0-6 1,15 */2 1-5").valid);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let result = validate_expression("60 25 0 13 8");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Minute: Value must be between 0 and 59",
                "Hour: Value must be between 0 and 23",
                "Day of Month: Value must be between 1 and 31",
                "Month: Value must be between 1 and 12",
                "Day of Week: Value must be between 0 and 7",
            ]
        );
    }

    #[test]
    fn test_validate_field_count_error() {
        let result = validate_expression("invalid");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["Invalid cron expression: must have exactly 5 fields"]
        );
    }
}
