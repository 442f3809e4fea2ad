pub mod toml_config;

use crate::core::prefix_order::PrefixOrder;
use crate::utils::error::{PrefixError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use toml_config::TomlConfig;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self> {
        validate_one_of("format", s, &["text", "json"])?;
        Ok(if s == "json" { Self::Json } else { Self::Text })
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "prefix-terms")]
#[command(about = "Sort, group and complete terms by prefix")]
pub struct CliConfig {
    /// Tab-separated term file (weight<TAB>word per line)
    #[arg(long)]
    pub terms: Option<String>,

    /// Number of leading characters compared; defaults to the query length
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    pub prefix_length: Option<i64>,

    /// Print the heaviest terms starting with this text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of matches to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges flags over the optional TOML file; flags win.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let format: Option<OutputFormat> = match &self.format {
            Some(format) => Some(format.parse()?),
            None => None,
        };

        Settings::merge(
            Overrides {
                terms: self.terms.clone(),
                prefix_length: self.prefix_length,
                query: self.query.clone(),
                limit: self.limit,
                format,
            },
            file,
        )
    }
}

/// Values supplied on the command line, each overriding the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub terms: Option<String>,
    pub prefix_length: Option<i64>,
    pub query: Option<String>,
    pub limit: Option<usize>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub terms_path: String,
    pub order: PrefixOrder,
    pub query: Option<String>,
    pub limit: usize,
    pub format: OutputFormat,
}

impl Settings {
    pub fn merge(overrides: Overrides, file: TomlConfig) -> Result<Self> {
        let terms_path = overrides
            .terms
            .or(file.terms.path)
            .ok_or_else(|| PrefixError::ConfigError {
                message: "no term file given; pass --terms or set terms.path".to_string(),
            })?;

        let order = match (overrides.prefix_length.or(file.order.prefix_length), &overrides.query) {
            (Some(k), _) => PrefixOrder::try_from_signed(k)?,
            (None, Some(query)) => PrefixOrder::new(query.chars().count()),
            (None, None) => {
                return Err(PrefixError::ConfigError {
                    message: "prefix length required when no query is given".to_string(),
                })
            }
        };

        let settings = Self {
            terms_path,
            order,
            query: overrides.query,
            limit: overrides.limit.or(file.output.limit).unwrap_or(DEFAULT_LIMIT),
            format: overrides.format.or(file.output.format).unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("terms", &self.terms_path)?;
        validate_positive_number("limit", self.limit, 1)?;
        if let Some(query) = &self.query {
            validate_non_empty_string("query", query)?;
            let query_len = query.chars().count();
            if query_len > self.order.prefix_length() {
                return Err(PrefixError::invalid_argument(
                    "prefix_length",
                    format!(
                        "must be at least the query length ({}), got {}",
                        query_len,
                        self.order.prefix_length()
                    ),
                ));
            }
        }
        Ok(())
    }
}
