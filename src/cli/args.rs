//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::ALL;
use crate::core::FilterSpec;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip data", version)]
pub(crate) struct Cli {
    /// City to analyze (chicago, new york city, washington). Prompts interactively when omitted
    #[arg(short, long)]
    pub(crate) city: Option<String>,

    /// Month to filter by (january to june, or all)
    #[arg(short, long, requires = "city")]
    pub(crate) month: Option<String>,

    /// Day of week to filter by (monday to sunday, or all)
    #[arg(short, long, requires = "city")]
    pub(crate) day: Option<String>,

    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Only override color if CLI is at default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.data_dir.is_none() {
            self.data_dir = config.data_dir.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Data directory, defaulting to the working directory
    pub(crate) fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Filter given on the command line; `None` means prompt for one
    pub(crate) fn filter(&self) -> Option<Result<FilterSpec, AppError>> {
        let city = self.city.as_deref()?;
        Some(FilterSpec::parse(
            city,
            self.month.as_deref().unwrap_or(ALL),
            self.day.as_deref().unwrap_or(ALL),
        ))
    }
}
