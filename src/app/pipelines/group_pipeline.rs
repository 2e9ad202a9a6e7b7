use crate::core::aggregator::{count_by_group, group_totals, Criterion};
use crate::core::ranker::compare_groups;
use crate::core::vocabulary::GROUP_TOP_TWO;
use crate::core::{ConfigProvider, Pipeline, ReportOutput, Storage, SurveyTable};
use crate::domain::model::{BarrierQuestion, GroupAnalysis};
use crate::render::{markdown, svg};
use crate::utils::error::{ReportError, Result};

pub const REPORT_FILE: &str = "barrier_by_group.md";
pub const CHART_FILE: &str = "barrier_by_group.svg";

pub const GROUP_QUESTION: &str = "Are you currently an undergraduate student or graduate student?";

pub const BARRIER_QUESTIONS: &[BarrierQuestion] = &[BarrierQuestion {
    label: "Graduate degree may delay career advancement",
    question_text: "To what extent do you agree with the following statement about the value of a graduate \
accounting degree?\n\n\
Earning a graduate degree may delay my career advancement compared to peers who started \
full-time jobs earlier.",
    indicator_values: GROUP_TOP_TWO,
}];

/// Compares how often each respondent group reports the fixed barrier questions.
pub struct GroupPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) group_question: &'static str,
    pub(crate) questions: &'static [BarrierQuestion],
}

impl<S: Storage, C: ConfigProvider> GroupPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_questions(storage, config, GROUP_QUESTION, BARRIER_QUESTIONS)
    }

    pub fn with_questions(
        storage: S,
        config: C,
        group_question: &'static str,
        questions: &'static [BarrierQuestion],
    ) -> Self {
        Self {
            storage,
            config,
            group_question,
            questions,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for GroupPipeline<S, C> {
    type Analysis = GroupAnalysis;

    fn name(&self) -> &'static str {
        "barrier by group"
    }

    fn extract(&self) -> Result<SurveyTable> {
        tracing::debug!("Reading survey export from {}", self.config.data_path());
        let data = self.storage.read_file(self.config.data_path())?;
        SurveyTable::from_bytes(&data)
    }

    fn transform(&self, table: SurveyTable) -> Result<GroupAnalysis> {
        let group_column = table.find_question(self.group_question).ok_or_else(|| {
            ReportError::GroupQuestionNotFound {
                question: self.group_question.to_string(),
            }
        })?;

        let totals = group_totals(&table, group_column)?;
        tracing::info!(
            "Comparing {} respondent groups: {:?}",
            totals.len(),
            totals.keys().collect::<Vec<_>>()
        );

        let mut results = Vec::new();
        for barrier in self.questions {
            let column = table.find_question(barrier.question_text).ok_or_else(|| {
                ReportError::BarrierQuestionNotFound {
                    question: barrier.question_text.to_string(),
                }
            })?;

            results.extend(count_by_group(
                &table,
                barrier.label,
                column,
                group_column,
                &totals,
                Criterion::OneOf(barrier.indicator_values),
            ));
        }

        let comparisons = self
            .questions
            .iter()
            .filter_map(|barrier| compare_groups(&results, barrier.label))
            .collect();

        Ok(GroupAnalysis {
            group_question: self.group_question.to_string(),
            groups: totals.into_keys().collect(),
            results,
            comparisons,
        })
    }

    fn load(&self, analysis: GroupAnalysis) -> Result<ReportOutput> {
        let report = markdown::render_group_report(&analysis, CHART_FILE);
        let report_path = self.config.output_file(REPORT_FILE);
        self.storage.write_file(&report_path, report.as_bytes())?;

        // Only the first barrier with results is charted.
        let mut chart_path = None;
        for barrier in self.questions {
            let bars: Vec<_> = analysis.results_for(barrier.label).cloned().collect();
            if bars.is_empty() {
                continue;
            }
            let chart = svg::render_group_chart(barrier.label, &bars)?;
            let path = self.config.output_file(CHART_FILE);
            self.storage.write_file(&path, chart.as_bytes())?;
            chart_path = Some(path);
            break;
        }

        Ok(ReportOutput {
            report_path,
            chart_path,
        })
    }
}
