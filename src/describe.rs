//! Human-readable schedule descriptions

use crate::expression::CronExpression;
use crate::presets::find_preset;

/// Returned by [`describe`] for anything that is not a valid expression
pub const INVALID_DESCRIPTION: &str = "Invalid cron expression";

/// Describe a cron expression in plain English
///
/// Expressions from the preset library use the preset's own description.
/// Invalid input yields [`INVALID_DESCRIPTION`] rather than an error, since
/// this is called on every keystroke of partially typed input.
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::describe;
///
/// assert_eq!(describe("0 0 * * *"), "Runs at 00:00 every day");
/// assert_eq!(describe("30 9 * * 1-5"), "At minute 30 past hour 9 on weekdays");
/// assert_eq!(describe("invalid"), "Invalid cron expression");
/// ```
pub fn describe(expression: &str) -> String {
    let expr = match CronExpression::parse(expression) {
        Ok(expr) => expr,
        Err(e) => {
            tracing::trace!(expression, error = %e, "Not describing unparseable expression");
            return INVALID_DESCRIPTION.to_string();
        }
    };

    let validation = expr.validate();
    if !validation.valid {
        tracing::trace!(expression, errors = ?validation.errors, "Not describing invalid expression");
        return INVALID_DESCRIPTION.to_string();
    }

    if let Some(preset) = find_preset(expression) {
        return preset.description.to_string();
    }

    humanize(&expr)
}

fn humanize(expr: &CronExpression) -> String {
    let mut text = if expr.minute == "*" {
        return "Every minute".to_string();
    } else if let Some(step) = expr.minute.strip_prefix("*/") {
        let every = format!("Every {}", count_of(step, "minute"));
        let rest = [&expr.hour, &expr.day_of_month, &expr.month, &expr.day_of_week];
        if rest.iter().all(|f| f.as_str() == "*") {
            return every;
        }
        every + ","
    } else {
        format!("At minute {}", expr.minute)
    };

    if expr.hour == "*" {
        text.push_str(" of every hour");
    } else if let Some(step) = expr.hour.strip_prefix("*/") {
        text.push_str(&format!(" every {}", count_of(step, "hour")));
    } else {
        text.push_str(&format!(" past hour {}", expr.hour));
    }

    if expr.day_of_month != "*" {
        if expr.day_of_month.contains(',') || expr.day_of_month.contains('-') {
            text.push_str(&format!(" on days {}", expr.day_of_month));
        } else {
            text.push_str(&format!(" on day {}", expr.day_of_month));
        }
    }

    if expr.month != "*" {
        text.push_str(&format!(" in month {}", expr.month));
    }

    match expr.day_of_week.as_str() {
        "*" => {}
        "1-5" => text.push_str(" on weekdays"),
        "0,6" | "6,0" => text.push_str(" on weekends"),
        other => text.push_str(&format!(" on day-of-week {}", other)),
    }

    text
}

/// "1 minute", "5 minutes"
fn count_of(count: &str, unit: &str) -> String {
    match count.trim().parse::<u32>() {
        Ok(n) if n > 1 => format!("{} {}s", count, unit),
        _ => format!("{} {}", count, unit),
    }
}
