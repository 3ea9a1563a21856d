//! CLI argument definitions for `AcadTrack`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use acadtrack::config::ConfigOverrides;
use acadtrack::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `api_key`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a new course for the logged-in user.
    Add {
        /// Course code (unique per user, e.g., "CS101")
        #[arg(value_name = "CODE")]
        code: String,

        /// Course title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Credit units (1-10)
        #[arg(short, long, value_name = "UNITS")]
        units: u8,

        /// Semester: First, Second, or Summer
        #[arg(short, long, value_name = "SEMESTER")]
        semester: String,

        /// Academic year (2000-2100)
        #[arg(short, long, value_name = "YEAR")]
        year: u16,

        /// Letter grade (A, B+, B, C+, C, D+, D, E, F)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<String>,

        /// Status: in-progress or completed
        #[arg(long, value_name = "STATUS", default_value = "in-progress")]
        status: String,
    },
    /// Update an existing course (unspecified fields keep their values).
    Update {
        /// Course record id
        #[arg(value_name = "ID")]
        id: String,

        /// New course code
        #[arg(long, value_name = "CODE")]
        code: Option<String>,

        /// New course title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// New credit units (1-10)
        #[arg(short, long, value_name = "UNITS")]
        units: Option<u8>,

        /// New semester: First, Second, or Summer
        #[arg(short, long, value_name = "SEMESTER")]
        semester: Option<String>,

        /// New academic year (2000-2100)
        #[arg(short, long, value_name = "YEAR")]
        year: Option<u16>,

        /// New letter grade (A, B+, B, C+, C, D+, D, E, F)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<String>,

        /// Remove the recorded grade
        #[arg(long, conflicts_with = "grade")]
        clear_grade: bool,

        /// New status: in-progress or completed
        #[arg(long, value_name = "STATUS")]
        status: Option<String>,
    },
    /// Remove a course by id.
    Remove {
        /// Course record id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List the logged-in user's courses grouped by semester.
    List {
        /// Only show one semester: First, Second, or Summer
        #[arg(short, long, value_name = "SEMESTER")]
        semester: Option<String>,

        /// Only show one academic year
        #[arg(short, long, value_name = "YEAR")]
        year: Option<u16>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Register a new user and start a session.
    Register {
        /// Display name
        #[arg(short, long, value_name = "NAME")]
        name: String,

        /// Email address (unique)
        #[arg(short, long, value_name = "EMAIL")]
        email: String,

        /// Password (at least 6 characters)
        #[arg(short, long, value_name = "PASSWORD")]
        password: String,

        /// Password confirmation; defaults to the password itself
        #[arg(long, value_name = "PASSWORD")]
        confirm_password: Option<String>,
    },
    /// Log in and start a session.
    Login {
        /// Email address
        #[arg(short, long, value_name = "EMAIL")]
        email: String,

        /// Password
        #[arg(short, long, value_name = "PASSWORD")]
        password: String,
    },
    /// End the current session.
    Logout,
    /// Delete the logged-in user's account and all of their courses.
    Unregister {
        /// Current password, required as confirmation
        #[arg(short, long, value_name = "PASSWORD")]
        password: String,
    },
    /// Show the logged-in user.
    Whoami,
    /// Manage courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Show GPA/CGPA statistics, semester performance, and insights.
    Stats,
    /// Generate a transcript document.
    ///
    /// Creates a formatted transcript with student information, academic
    /// summary, semester performance, and course details.
    Transcript {
        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or pdf
        #[arg(short, long, value_name = "FORMAT", default_value = "pdf")]
        format: String,

        /// Skip the academic insights section
        #[arg(long)]
        no_insights: bool,
    },
    /// Request AI-generated academic advice.
    Advise {
        /// Print the prompt that would be sent and exit without calling the service
        #[arg(long)]
        show_prompt: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "acadtrack",
    about = "AcadTrack command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the advisor API key
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the advisor endpoint
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the data directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the credits required for degree completion
    #[arg(long = "required-credits", value_name = "CREDITS")]
    pub required_credits: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration; `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            required_credits: self.required_credits,
        }
    }
}
