//! Built-in library of common schedules

use serde::Serialize;

/// A named, pre-validated example schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CronPattern {
    pub name: &'static str,
    pub expression: &'static str,
    pub description: &'static str,
}

static CRON_PATTERNS: [CronPattern; 12] = [
    CronPattern {
        name: "Every minute",
        expression: "* * * * *",
        description: "Runs every minute",
    },
    CronPattern {
        name: "Every 5 minutes",
        expression: "*/5 * * * *",
        description: "Runs every 5 minutes",
    },
    CronPattern {
        name: "Every 15 minutes",
        expression: "*/15 * * * *",
        description: "Runs every 15 minutes",
    },
    CronPattern {
        name: "Every 30 minutes",
        expression: "*/30 * * * *",
        description: "Runs every 30 minutes",
    },
    CronPattern {
        name: "Every hour",
        expression: "0 * * * *",
        description: "Runs at minute 0 of every hour",
    },
    CronPattern {
        name: "Every 6 hours",
        expression: "0 */6 * * *",
        description: "Runs at minute 0 every 6 hours",
    },
    CronPattern {
        name: "Every day at midnight",
        expression: "0 0 * * *",
        description: "Runs at 00:00 every day",
    },
    CronPattern {
        name: "Every day at noon",
        expression: "0 12 * * *",
        description: "Runs at 12:00 every day",
    },
    CronPattern {
        name: "Every Sunday at midnight",
        expression: "0 0 * * 0",
        description: "Runs at 00:00 every Sunday",
    },
    CronPattern {
        name: "Every Monday at 9 AM",
        expression: "0 9 * * 1",
        description: "Runs at 09:00 every Monday",
    },
    CronPattern {
        name: "First day of month",
        expression: "0 0 1 * *",
        description: "Runs at 00:00 on day 1 of every month",
    },
    CronPattern {
        name: "Every weekday at 8 AM",
        expression: "0 8 * * 1-5",
        description: "Runs at 08:00 Monday-Friday",
    },
];

/// All presets, in display order
pub fn presets() -> &'static [CronPattern] {
    &CRON_PATTERNS
}

/// Look up a preset by its exact expression string
pub fn find_preset(expression: &str) -> Option<&'static CronPattern> {
    CRON_PATTERNS.iter().find(|p| p.expression == expression)
}
