pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use adapters::LocalStorage;
pub use app::pipelines::{GroupPipeline, SummaryPipeline};
#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;
pub use config::ReportKind;
pub use core::engine::ReportEngine;
pub use utils::error::{ReportError, Result};
