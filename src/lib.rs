//! # a3s-cronexpr
//!
//! Cron expression engine behind the A3S cron builder.
//!
//! ## Overview
//!
//! Works on standard 5-field expressions (`minute hour day-of-month month
//! day-of-week`) and offers:
//!
//! - **Parsing and building** between the wire string and [`CronExpression`]
//! - **Validation** of every field against its domain, reporting all errors at once
//! - **Matching** calendar instants against an expression
//! - **Descriptions** in plain English
//! - **Next-run preview** by bounded minute-by-minute search
//! - A static library of [`CronPattern`] presets
//!
//! Seconds and year fields, month/day names, and time zones are not
//! supported. All instants are local wall-clock times.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cronexpr::{describe, next_executions, validate_expression, CronExpression, Field};
//!
//! let expr = CronExpression::default()
//!     .with_field(Field::Minute, "30")
//!     .with_field(Field::Hour, "9")
//!     .with_field(Field::DayOfWeek, "1-5");
//! assert_eq!(expr.build(), "30 9 * * 1-5");
//!
//! assert!(validate_expression("30 9 * * 1-5").valid);
//! assert_eq!(describe("30 9 * * 1-5"), "At minute 30 past hour 9 on weekdays");
//!
//! let runs = next_executions("30 9 * * 1-5", 3);
//! assert_eq!(runs.len(), 3);
//! ```

pub mod config;
pub mod describe;
pub mod error;
pub mod expression;
pub mod field;
pub mod matcher;
pub mod presets;
pub mod schedule;

pub use config::CliConfig;
pub use describe::{describe, INVALID_DESCRIPTION};
pub use error::{CronError, Result};
pub use expression::{validate_expression, CronExpression, ValidationResult};
pub use field::{field_matches, validate_field, Field, FieldDomain, FieldError, FieldPattern, StepBase};
pub use matcher::{expression_matches, Schedule};
pub use presets::{find_preset, presets, CronPattern};
pub use schedule::{next_executions, Scheduler, SchedulerConfig};
