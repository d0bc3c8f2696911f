use agecard::config::Config;
use agecard::form::{FormEvent, FormState, Outcome, reduce};
use agecard::months::{MONTHS, normalize_month};
use agecard::svg::{self, Theme};
use agecard::validate::{DateInput, ValidationErrors};
use agecard::{AppError, view};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};

/// agecard - how old are you, exactly?
#[derive(Parser)]
#[command(name = "agecard")]
#[command(about = "Compute an age in years, months and days plus a generation label", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a birth date and show the result
    Calc {
        /// Day of month (1-31)
        #[arg(long, default_value = "")]
        day: String,

        /// Month as a number (1-12) or an English name
        #[arg(long, default_value = "")]
        month: String,

        /// Four-digit year
        #[arg(long, default_value = "")]
        year: String,

        /// Reference date as YYYY-MM-DD (defaults to local today)
        #[arg(long)]
        today: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Write an SVG card to this path (overrides config file)
        #[arg(long)]
        svg: Option<String>,

        /// SVG theme, dark or light (overrides config file)
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// List the month names accepted by --month
    Months,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a DateInput,
    errors: &'a ValidationErrors,
    outcome: Option<&'a Outcome>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(AppError::InvalidConfig)?;

    agecard::observability::init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    )?;

    match cli.command {
        Commands::Calc {
            day,
            month,
            year,
            today,
            json,
            svg,
            theme,
        } => {
            let today = match today {
                Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidToday(raw))?,
                None => Local::now().date_naive(),
            };
            let svg_path = svg.or(config.display.svg_path.clone());
            let theme = theme.unwrap_or(config.display.theme);
            calc_command(DateInput::new(day, month, year), today, json, svg_path, theme)
        }
        Commands::Months => {
            for (value, name) in MONTHS {
                println!("{value:>2}  {name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn calc_command(
    input: DateInput,
    today: NaiveDate,
    json: bool,
    svg_path: Option<String>,
    theme: Theme,
) -> Result<ExitCode> {
    debug!(?input, %today, "submitting");

    let state = [
        FormEvent::SetDay(input.day),
        FormEvent::SetMonth(normalize_month(&input.month)),
        FormEvent::SetYear(input.year),
        FormEvent::Submit { today },
    ]
    .into_iter()
    .fold(FormState::default(), |state, event| reduce(&state, event));

    if json {
        let report = Report {
            input: &state.input,
            errors: &state.errors,
            outcome: state.outcome.as_ref(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(AppError::from)?
        );
    } else {
        print!("{}", view::render_text(&state));
    }

    if let Some(path) = svg_path {
        fs::write(&path, svg::generate_svg(&state, theme)).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        info!(%path, "wrote SVG card");
    }

    // Input errors are already on screen; only the exit status reports them.
    if !state.errors.is_empty() {
        debug!(errors = %state.errors, "exiting with failure status");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
