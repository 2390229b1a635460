pub mod toml_config;

use crate::core::batch::BatchOptions;
use crate::utils::error::{ConvertError, Result};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConvertError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "expected 'text' or 'json'".to_string(),
            }),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "persian-words")]
#[command(about = "Spell non-negative whole numbers in Persian words")]
pub struct CliConfig {
    /// Numbers to convert. Read from stdin, one per line, when omitted
    pub numbers: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print each input next to its words
    #[arg(long)]
    pub include_input: bool,

    /// Keep surrounding whitespace instead of trimming it
    #[arg(long)]
    pub no_trim: bool,

    /// Stop at the first input that cannot be converted
    #[arg(long)]
    pub fail_fast: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after layering CLI flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub batch: BatchOptions,
    pub format: OutputFormat,
    pub include_input: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            batch: BatchOptions::default(),
            format: OutputFormat::Text,
            include_input: false,
            log_level: None,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let defaults = Self::default();
        let format = match file.output.format.as_deref() {
            Some(format) => format.parse()?,
            None => defaults.format,
        };

        Ok(Self {
            batch: BatchOptions {
                trim_whitespace: file
                    .input
                    .trim_whitespace
                    .unwrap_or(defaults.batch.trim_whitespace),
                skip_blank_lines: file
                    .input
                    .skip_blank_lines
                    .unwrap_or(defaults.batch.skip_blank_lines),
                fail_fast: file.input.fail_fast.unwrap_or(defaults.batch.fail_fast),
            },
            format,
            include_input: file.output.include_input.unwrap_or(defaults.include_input),
            log_level: file.log_level().map(str::to_string),
            json_logs: file.json_logs(),
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Result<Self> {
        let mut settings = match file {
            Some(file) => Self::from_toml(file)?,
            None => Self::default(),
        };

        if let Some(format) = cli.format {
            settings.format = format;
        }
        if cli.include_input {
            settings.include_input = true;
        }
        if cli.no_trim {
            settings.batch.trim_whitespace = false;
        }
        if cli.fail_fast {
            settings.batch.fail_fast = true;
        }

        Ok(settings)
    }
}
