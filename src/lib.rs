pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::term_file::TermFile;
pub use config::{OutputFormat, Settings};
pub use crate::core::{
    engine::CompletionEngine, prefix_order::PrefixOrder, weight_order::WeightOrder,
};
pub use domain::{model::Term, ports::TermOrder, ports::TermSource};
pub use utils::error::{PrefixError, Result};
