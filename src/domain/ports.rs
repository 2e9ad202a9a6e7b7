use crate::domain::model::{ReportOutput, SurveyTable};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub const DEFAULT_DATA_PATH: &str = "Alternative CPA Pathways Survey_December 31, 2025_09.45.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "analysis";
pub const DEFAULT_CHART_LIMIT: usize = 10;

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn output_dir(&self) -> &str;

    /// Number of ranked barriers drawn in the summary chart.
    fn chart_limit(&self) -> usize {
        DEFAULT_CHART_LIMIT
    }

    fn output_file(&self, file_name: &str) -> String {
        let dir = self.output_dir().trim_end_matches('/');
        if dir.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", dir, file_name)
        }
    }
}

pub trait Pipeline {
    type Analysis;

    fn name(&self) -> &'static str;
    fn extract(&self) -> Result<SurveyTable>;
    fn transform(&self, table: SurveyTable) -> Result<Self::Analysis>;
    fn load(&self, analysis: Self::Analysis) -> Result<ReportOutput>;
}
