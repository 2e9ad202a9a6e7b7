use crate::core::aggregator::{count_matching, respondent_total, Criterion};
use crate::core::classifier::{classify, distinct_values};
use crate::core::ranker::rank_by_count;
use crate::core::vocabulary::SUMMARY_TOP_TWO;
use crate::core::{BarrierResult, ConfigProvider, Pipeline, ReportOutput, Storage, SurveyTable};
use crate::domain::model::{ChartOutcome, SummaryAnalysis};
use crate::render::{self, markdown};
use crate::utils::error::Result;

pub const REPORT_FILE: &str = "barrier_summary.md";
pub const CHART_FILE: &str = "barrier_summary.png";
pub const RESPONSE_ID_HEADER: &str = "ResponseId";

/// Ranks every keyword-matched barrier column by how many respondents reported it.
pub struct SummaryPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> SummaryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_chart(&self, results: &[BarrierResult]) -> (ChartOutcome, Option<String>) {
        let top = &results[..results.len().min(self.config.chart_limit())];
        let chart_path = self.config.output_file(CHART_FILE);

        let written = render::ranked_chart_png(top).and_then(|png| match png {
            Some(bytes) => self.storage.write_file(&chart_path, &bytes).map(|_| true),
            None => Ok(false),
        });

        match written {
            Ok(true) => (
                ChartOutcome::Rendered {
                    file_name: CHART_FILE.to_string(),
                },
                Some(chart_path),
            ),
            Ok(false) => {
                tracing::info!("Raster chart backend disabled, skipping {}", CHART_FILE);
                (
                    ChartOutcome::Unavailable {
                        reason: render::RASTER_DISABLED_REASON.to_string(),
                    },
                    None,
                )
            }
            Err(e) => {
                tracing::warn!("⚠️ Summary chart not generated: {}", e);
                (
                    ChartOutcome::Unavailable {
                        reason: format!("the chart could not be drawn ({})", e),
                    },
                    None,
                )
            }
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SummaryPipeline<S, C> {
    type Analysis = SummaryAnalysis;

    fn name(&self) -> &'static str {
        "barrier summary"
    }

    fn extract(&self) -> Result<SurveyTable> {
        tracing::debug!("Reading survey export from {}", self.config.data_path());
        let data = self.storage.read_file(self.config.data_path())?;
        SurveyTable::from_bytes(&data)
    }

    fn transform(&self, table: SurveyTable) -> Result<SummaryAnalysis> {
        let id_column = table.find_header(RESPONSE_ID_HEADER)?;
        let total_respondents = respondent_total(&table, id_column);

        let mut results = Vec::new();
        for (column, question) in table.barrier_columns() {
            let values = distinct_values(&table, column);
            if values.is_empty() {
                tracing::debug!("Skipping empty barrier column {}", column);
                continue;
            }

            let classification = classify(&values);
            let criterion = Criterion::for_classification(classification, SUMMARY_TOP_TWO);
            let count = count_matching(&table, column, criterion);
            tracing::debug!(
                "Column {} classified as {:?}: {} matching",
                column,
                classification,
                count
            );

            results.push(BarrierResult {
                label: question.to_string(),
                group: None,
                count,
                total: total_respondents,
            });
        }

        rank_by_count(&mut results);
        tracing::info!(
            "Found {} barrier columns for {} respondents",
            results.len(),
            total_respondents
        );

        Ok(SummaryAnalysis {
            total_respondents,
            results,
        })
    }

    fn load(&self, analysis: SummaryAnalysis) -> Result<ReportOutput> {
        let (chart, chart_path) = if analysis.results.is_empty() {
            tracing::warn!("No barrier-related columns detected, writing explanatory report");
            (None, None)
        } else {
            let (outcome, path) = self.render_chart(&analysis.results);
            (Some(outcome), path)
        };

        let report = markdown::render_summary_report(&analysis, chart.as_ref());
        let report_path = self.config.output_file(REPORT_FILE);
        self.storage.write_file(&report_path, report.as_bytes())?;

        Ok(ReportOutput {
            report_path,
            chart_path,
        })
    }
}
