#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use crate::domain::ports::{DEFAULT_CHART_LIMIT, DEFAULT_DATA_PATH, DEFAULT_OUTPUT_DIR};

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, validate_range};

pub const MAX_CHART_LIMIT: usize = 50;

/// Which reports a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportKind {
    Summary,
    ByGroup,
    #[default]
    All,
}

impl ReportKind {
    pub fn includes_summary(self) -> bool {
        matches!(self, ReportKind::Summary | ReportKind::All)
    }

    pub fn includes_by_group(self) -> bool {
        matches!(self, ReportKind::ByGroup | ReportKind::All)
    }
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_path("input.data_path", config.data_path())?;
    validate_file_extension("input.data_path", config.data_path(), &["csv"])?;
    validate_path("output.dir", config.output_dir())?;
    validate_range("summary.chart_limit", config.chart_limit(), 1, MAX_CHART_LIMIT)?;
    Ok(())
}
