//! Next-run preview
//!
//! Upcoming runs are found by stepping through wall-clock minutes and
//! testing each one, up to a fixed search horizon. There is no closed-form
//! "next occurrence" solver; the horizon guarantees termination even for
//! expressions that can never match (e.g. `0 0 31 2 *`).

use crate::matcher::Schedule;
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Default number of runs to preview
pub const DEFAULT_COUNT: usize = 5;

/// Default search horizon: one year of minutes
pub const MAX_ITERATIONS: u32 = 60 * 24 * 365;

/// Scheduler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Runs returned by [`Scheduler::upcoming`]
    #[serde(default = "default_count")]
    pub count: usize,

    /// Minutes examined before giving up
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_max_iterations() -> u32 {
    MAX_ITERATIONS
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Computes upcoming execution instants for cron expressions
///
/// Instants are local wall-clock times at minute resolution.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The next `count` runs strictly after `start`, in ascending order
    ///
    /// `start` is truncated to the minute first. Returns an empty list for
    /// an invalid expression, and fewer than `count` runs when the search
    /// horizon is exhausted.
    pub fn next_after(
        &self,
        expression: &str,
        start: NaiveDateTime,
        count: usize,
    ) -> Vec<NaiveDateTime> {
        let schedule = match Schedule::parse(expression) {
            Ok(schedule) => schedule,
            Err(e) => {
                tracing::trace!(expression, error = %e, "Skipping invalid expression");
                return Vec::new();
            }
        };

        let mut current = truncate_to_minute(start);
        let mut runs = Vec::with_capacity(count.min(64));
        let mut iterations = 0;

        while runs.len() < count && iterations < self.config.max_iterations {
            current = match current.checked_add_signed(Duration::minutes(1)) {
                Some(next) => next,
                None => break,
            };
            iterations += 1;

            if schedule.matches(&current) {
                runs.push(current);
            }
        }

        if runs.len() < count {
            tracing::debug!(
                expression,
                found = runs.len(),
                requested = count,
                iterations,
                "Search horizon exhausted"
            );
        }

        runs
    }

    /// The next `count` runs after the current local time
    pub fn next_executions(&self, expression: &str, count: usize) -> Vec<NaiveDateTime> {
        self.next_after(expression, Local::now().naive_local(), count)
    }

    /// The next [`SchedulerConfig::count`] runs after the current local time
    pub fn upcoming(&self, expression: &str) -> Vec<NaiveDateTime> {
        self.next_executions(expression, self.config.count)
    }
}

/// The next `count` runs of `expression` after the current local time
///
/// Invalid expressions yield an empty list. Runs are wall-clock times with
/// no time zone attached: on a daylight-saving transition day a run such as
/// `30 2 * * *` may name a local time that is skipped, and no run repeats
/// when an hour is repeated.
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::next_executions;
///
/// let runs = next_executions("* * * * *", 3);
/// assert_eq!(runs.len(), 3);
/// assert_eq!((runs[1] - runs[0]).num_seconds(), 60);
///
/// assert!(next_executions("invalid", 5).is_empty());
/// ```
pub fn next_executions(expression: &str, count: usize) -> Vec<NaiveDateTime> {
    Scheduler::default().next_executions(expression, count)
}

fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_every_minute_is_sixty_seconds_apart() {
        let start = at(2026, 2, 5, 10, 30, 45);
        let runs = Scheduler::default().next_after("* * * * *", start, 5);
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], at(2026, 2, 5, 10, 31, 0));
        for pair in runs.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_milliseconds(), 60_000);
        }
    }

    #[test]
    fn test_strictly_after_start() {
        let start = at(2026, 2, 5, 11, 0, 0);
        let runs = Scheduler::default().next_after("0 * * * *", start, 2);
        assert_eq!(runs, vec![at(2026, 2, 5, 12, 0, 0), at(2026, 2, 5, 13, 0, 0)]);
    }

    #[test]
    fn test_weekdays_at_nine() {
        // Saturday, Feb 7, 2026
        let start = at(2026, 2, 7, 10, 0, 0);
        let runs = Scheduler::default().next_after("0 9 * * 1-5", start, 3);
        assert_eq!(
            runs,
            vec![
                at(2026, 2, 9, 9, 0, 0),
                at(2026, 2, 10, 9, 0, 0),
                at(2026, 2, 11, 9, 0, 0),
            ]
        );
        assert!(runs.iter().all(|r| r.weekday() != Weekday::Sat && r.weekday() != Weekday::Sun));
    }

    #[test]
    fn test_next_day_rollover() {
        let start = at(2026, 2, 5, 10, 0, 0);
        let runs = Scheduler::default().next_after("0 2 * * *", start, 1);
        assert_eq!(runs, vec![at(2026, 2, 6, 2, 0, 0)]);
    }

    #[test]
    fn test_sunday_alias() {
        // Thursday, Feb 5, 2026
        let start = at(2026, 2, 5, 0, 0, 0);
        let runs = Scheduler::default().next_after("0 0 * * 7", start, 2);
        assert_eq!(runs, vec![at(2026, 2, 8, 0, 0, 0), at(2026, 2, 15, 0, 0, 0)]);
    }

    #[test]
    fn test_padded_seven_is_not_sunday() {
        // Valid, but only the literal `7` aliases Sunday
        let start = at(2026, 2, 5, 0, 0, 0);
        assert!(Scheduler::default().next_after("0 0 * * 07", start, 2).is_empty());
        assert!(Scheduler::default().next_after("0 0 * * +7", start, 2).is_empty());
    }

    #[test]
    fn test_invalid_expression_is_empty() {
        let start = at(2026, 2, 5, 0, 0, 0);
        let scheduler = Scheduler::default();
        assert!(scheduler.next_after("invalid", start, 5).is_empty());
        assert!(scheduler.next_after("60 * * * *", start, 5).is_empty());
        assert!(scheduler.next_after("* * * *", start, 5).is_empty());
    }

    #[test]
    fn test_zero_count() {
        let start = at(2026, 2, 5, 0, 0, 0);
        assert!(Scheduler::default().next_after("* * * * *", start, 0).is_empty());
    }

    #[test]
    fn test_never_matching_terminates() {
        let start = at(2026, 1, 1, 0, 0, 0);
        assert!(Scheduler::default().next_after("0 0 31 2 *", start, 1).is_empty());
    }

    #[test]
    fn test_leap_day_within_horizon() {
        // 2026 has no Feb 29
        let runs = Scheduler::default().next_after("0 12 29 2 *", at(2026, 1, 1, 0, 0, 0), 1);
        assert!(runs.is_empty());

        let runs = Scheduler::default().next_after("0 12 29 2 *", at(2027, 6, 1, 0, 0, 0), 1);
        assert_eq!(runs, vec![at(2028, 2, 29, 12, 0, 0)]);
    }

    #[test]
    fn test_runs_are_wall_clock_times() {
        // 2026-03-08 is the US spring-forward day; the wall clock still has 02:30
        let runs = Scheduler::default().next_after("30 2 * * *", at(2026, 3, 8, 0, 0, 0), 2);
        assert_eq!(runs, vec![at(2026, 3, 8, 2, 30, 0), at(2026, 3, 9, 2, 30, 0)]);
    }

    #[test]
    fn test_custom_horizon() {
        let scheduler = Scheduler::new(SchedulerConfig {
            count: 3,
            max_iterations: 60,
        });
        let runs = scheduler.next_after("0 * * * *", at(2026, 2, 5, 10, 30, 0), 3);
        assert_eq!(runs, vec![at(2026, 2, 5, 11, 0, 0)]);
    }

    #[test]
    fn test_upcoming_uses_configured_count() {
        let scheduler = Scheduler::new(SchedulerConfig {
            count: 2,
            ..Default::default()
        });
        assert_eq!(scheduler.upcoming("* * * * *").len(), 2);
        assert_eq!(Scheduler::default().upcoming("* * * * *").len(), DEFAULT_COUNT);
    }

    #[test]
    fn test_config_defaults() {
        let config: SchedulerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(config.count, 5);
        assert_eq!(config.max_iterations, 525_600);

        let config: SchedulerConfig = serde_json::from_str(r#"{"count": 10}"#).unwrap();
        assert_eq!(config.count, 10);
        assert_eq!(config.max_iterations, MAX_ITERATIONS);
    }
}
