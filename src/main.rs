use std::path::PathBuf;
use std::process::ExitCode;

use a3s_cronexpr::config::DEFAULT_CONFIG_FILE;
use a3s_cronexpr::{
    describe, presets, validate_field, CliConfig, CronExpression, Field, FieldDomain, Result,
    Scheduler,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "a3s-cronexpr",
    about = "a3s-cronexpr — validate, explain, and preview cron expressions"
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an expression into its five fields
    Parse { expression: String },
    /// Validate every field of an expression
    Validate { expression: String },
    /// Validate a single field value (minute, hour, dayOfMonth, month, dayOfWeek)
    Field { field: Field, value: String },
    /// Describe an expression in plain English
    Describe { expression: String },
    /// Show the next runs of an expression
    Next {
        expression: String,
        /// Number of runs (default from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// List the built-in presets
    Presets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "[cronexpr]".red().bold());
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match run(&cli, config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e}", "[cronexpr]".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the checked input was valid
fn run(cli: &Cli, config: CliConfig) -> Result<bool> {
    match &cli.command {
        Commands::Parse { expression } => {
            let expr = CronExpression::parse(expression)?;
            if cli.json {
                print_json(&expr)?;
            } else {
                for (field, value) in expr.fields() {
                    println!("{} {}", format!("{:<14}", field.name()).dimmed(), value.cyan());
                }
            }
            Ok(true)
        }
        Commands::Validate { expression } => {
            let result = a3s_cronexpr::validate_expression(expression);
            if cli.json {
                print_json(&result)?;
            } else if result.valid {
                println!("{} {}", "✓".green(), expression.cyan());
            } else {
                for error in &result.errors {
                    println!("{} {error}", "✗".red());
                }
            }
            Ok(result.valid)
        }
        Commands::Field { field, value } => {
            let result = validate_field(value, *field);
            if cli.json {
                print_json(&FieldReport {
                    field: *field,
                    domain: field.domain(),
                    valid: result.is_ok(),
                    error: result.as_ref().err().map(|e| e.to_string()),
                })?;
            } else {
                match &result {
                    Ok(()) => println!("{} {} {}", "✓".green(), field.name(), value.cyan()),
                    Err(e) => println!("{} {}: {e}", "✗".red(), field.name()),
                }
                let domain = field.domain();
                println!(
                    "  {}",
                    format!(
                        "range {}-{}, examples: {}",
                        domain.min,
                        domain.max,
                        field.examples().join(", ")
                    )
                    .dimmed()
                );
            }
            Ok(result.is_ok())
        }
        Commands::Describe { expression } => {
            let text = describe(expression);
            if cli.json {
                print_json(&text)?;
            } else {
                println!("{text}");
            }
            Ok(text != a3s_cronexpr::INVALID_DESCRIPTION)
        }
        Commands::Next { expression, count } => {
            let scheduler = Scheduler::new(config.scheduler);
            let count = count.unwrap_or(scheduler.config().count);
            let runs = scheduler.next_executions(expression, count);
            if cli.json {
                print_json(&runs)?;
            } else if runs.is_empty() {
                println!("{} no upcoming runs", "→".yellow());
            } else {
                for run in &runs {
                    println!("{} {}", "→".cyan(), run.format("%Y-%m-%d %H:%M (%a)"));
                }
            }
            Ok(!runs.is_empty())
        }
        Commands::Presets => {
            if cli.json {
                print_json(presets())?;
            } else {
                for preset in presets() {
                    println!(
                        "{} {:<26} {}",
                        format!("{:<14}", preset.expression).cyan(),
                        preset.name,
                        preset.description.dimmed()
                    );
                }
            }
            Ok(true)
        }
    }
}

#[derive(Serialize)]
struct FieldReport {
    field: Field,
    domain: &'static FieldDomain,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
