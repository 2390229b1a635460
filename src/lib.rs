pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, OutputFormat, Settings};

pub use core::batch::{BatchConverter, BatchOptions, BatchOutcome};
pub use core::converter::{convert_optional, convert_to_words, PersianNumberConverter};
pub use core::output::{exit_code, RecordWriter};
pub use core::padding::{pad_string, PaddingOrder};
pub use domain::ports::NumberSpeller;
pub use utils::error::{ConvertError, Result};
