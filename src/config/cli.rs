use super::{validate_provider, ReportKind, DEFAULT_CHART_LIMIT, DEFAULT_DATA_PATH, DEFAULT_OUTPUT_DIR};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cpa-barriers")]
#[command(about = "Barrier-perception reports for the CPA pathways survey export")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    #[arg(long, value_enum, default_value_t = ReportKind::All)]
    pub report: ReportKind,

    #[arg(long, default_value_t = DEFAULT_CHART_LIMIT, help = "Barriers drawn in the summary chart")]
    pub chart_limit: usize,

    #[arg(short, long, help = "TOML config file; overrides the path flags")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn chart_limit(&self) -> usize {
        self.chart_limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
