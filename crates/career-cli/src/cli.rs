//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "career-form",
    version,
    about = "Job application wizard - validate, submit and review applications",
    long_about = "Validate job application documents step by step, submit them through\n\
                  the wizard's navigation gate, and review submitted applications."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow applicant names, emails and phone numbers in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Form settings file (TOML). Defaults apply when omitted.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check every step of an application document.
    Validate(ApplicationArgs),

    /// Walk an application through the wizard and submit it.
    Submit(SubmitArgs),

    /// Work with submitted applications.
    #[command(subcommand)]
    Review(ReviewCommand),
}

#[derive(Args)]
pub struct ApplicationArgs {
    /// Application document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Year used for age and passing-year checks (default: this year).
    #[arg(long = "current-year", value_name = "YEAR")]
    pub current_year: Option<i32>,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub application: ApplicationArgs,

    /// Make the mock submission service reject the application.
    #[arg(long = "reject-with", value_name = "MESSAGE")]
    pub reject_with: Option<String>,
}

#[derive(Subcommand)]
pub enum ReviewCommand {
    /// List applications.
    List(ListArgs),

    /// Show one application in full.
    Show {
        /// Application id, e.g. APP-123456.
        id: String,
    },

    /// Change an application's status.
    SetStatus {
        /// Application id, e.g. APP-123456.
        id: String,
        /// Pending, Reviewed, Shortlisted or Rejected.
        status: String,
    },

    /// Export the listed applications as CSV.
    Export {
        #[command(flatten)]
        list: ListArgs,

        /// Write to this file instead of stdout.
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive match on name, email or id.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// `all` or a status name.
    #[arg(long = "status", value_name = "STATUS", default_value = "all")]
    pub status: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
