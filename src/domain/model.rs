/// A survey export split into its three header rows and the response records.
///
/// Row 0 of the file holds machine names, row 1 the question text shown to
/// respondents, row 2 export metadata (dropped), rows 3+ one response each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyTable {
    pub headers: Vec<String>,
    pub questions: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl SurveyTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn respondent_rows(&self) -> usize {
        self.records.len()
    }

    /// Iterates the values of one column across all response records.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(move |row| row[index].as_str())
    }
}

/// A survey item whose indicator responses count as reporting a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierQuestion {
    pub label: &'static str,
    pub question_text: &'static str,
    pub indicator_values: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrierResult {
    pub label: String,
    pub group: Option<String>,
    pub count: usize,
    pub total: usize,
}

impl BarrierResult {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64 * 100.0
        }
    }
}

/// Fixed Likert-style vocabularies used by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikertScale {
    Agreement,
    Importance,
    Likelihood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClassification {
    BinarySelection,
    OrdinalScale(LikertScale),
    FreeText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupComparison {
    pub label: String,
    pub highest: BarrierResult,
    pub lowest: BarrierResult,
}

impl GroupComparison {
    /// Percentage-point gap between the highest and lowest group.
    pub fn gap(&self) -> f64 {
        self.highest.percentage() - self.lowest.percentage()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryAnalysis {
    pub total_respondents: usize,
    pub results: Vec<BarrierResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupAnalysis {
    pub group_question: String,
    pub groups: Vec<String>,
    pub results: Vec<BarrierResult>,
    pub comparisons: Vec<GroupComparison>,
}

impl GroupAnalysis {
    pub fn results_for<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a BarrierResult> {
        self.results.iter().filter(move |r| r.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    Rendered { file_name: String },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    pub report_path: String,
    pub chart_path: Option<String>,
}
