use crate::core::Pipeline;
use crate::domain::model::ReportOutput;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ReportOutput> {
        let name = self.pipeline.name();
        tracing::info!("Starting {} report", name);

        tracing::debug!("Loading survey data...");
        let table = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} responses across {} columns",
            table.respondent_rows(),
            table.column_count()
        );

        tracing::debug!("Aggregating barrier indicators...");
        let analysis = self.pipeline.transform(table)?;

        tracing::debug!("Rendering report...");
        let output = self.pipeline.load(analysis)?;
        tracing::info!("📁 {} report saved to: {}", name, output.report_path);
        if let Some(chart) = &output.chart_path {
            tracing::info!("📊 Chart saved to: {}", chart);
        }

        Ok(output)
    }
}
