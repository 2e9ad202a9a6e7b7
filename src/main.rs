use clap::Parser;
use cpa_barriers::core::ConfigProvider;
use cpa_barriers::utils::{logger, validation::Validate};
use cpa_barriers::{
    CliConfig, GroupPipeline, LocalStorage, ReportEngine, ReportError, ReportKind,
    SummaryPipeline, TomlConfig,
};

fn run_reports<C: ConfigProvider + Clone>(config: &C, report: ReportKind) -> Result<(), ReportError> {
    if report.includes_summary() {
        let pipeline = SummaryPipeline::new(LocalStorage::default(), config.clone());
        let output = ReportEngine::new(pipeline).run()?;
        println!("✅ Summary report written to {}", output.report_path);
    }

    if report.includes_by_group() {
        let pipeline = GroupPipeline::new(LocalStorage::default(), config.clone());
        let output = ReportEngine::new(pipeline).run()?;
        println!("✅ Group report written to {}", output.report_path);
    }

    Ok(())
}

fn run(config: CliConfig) -> Result<(), ReportError> {
    match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            run_reports(&toml_config, config.report)
        }
        None => {
            config.validate()?;
            run_reports(&config, config.report)
        }
    }
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cpa-barriers");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        tracing::error!("❌ Report generation failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
