use crate::core::vocabulary::SELECTED;
use crate::domain::model::{BarrierResult, ResponseClassification, SurveyTable};
use crate::utils::error::{ReportError, Result};
use std::collections::BTreeMap;

/// Rule deciding whether a single response indicates the barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Selected,
    OneOf(&'static [&'static str]),
    NonBlank,
}

impl Criterion {
    /// Map a column classification to its counting rule, using `top_two`
    /// for ordinal-scale columns.
    pub fn for_classification(
        classification: ResponseClassification,
        top_two: &'static [&'static str],
    ) -> Self {
        match classification {
            ResponseClassification::BinarySelection => Criterion::Selected,
            ResponseClassification::OrdinalScale(_) => Criterion::OneOf(top_two),
            ResponseClassification::FreeText => Criterion::NonBlank,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Criterion::Selected => value == SELECTED,
            Criterion::OneOf(values) => values.contains(&value),
            Criterion::NonBlank => !value.trim().is_empty(),
        }
    }
}

pub fn count_matching(table: &SurveyTable, column: usize, criterion: Criterion) -> usize {
    table
        .column_values(column)
        .filter(|value| criterion.matches(value))
        .count()
}

/// Rows with a non-blank value in `column`.
pub fn respondent_total(table: &SurveyTable, column: usize) -> usize {
    count_matching(table, column, Criterion::NonBlank)
}

/// Respondent count per distinct non-blank group value, ordered ascending.
pub fn group_totals(table: &SurveyTable, group_column: usize) -> Result<BTreeMap<String, usize>> {
    let mut totals: BTreeMap<String, usize> = BTreeMap::new();
    for value in table.column_values(group_column).map(str::trim) {
        if value.is_empty() {
            continue;
        }
        *totals.entry(value.to_string()).or_default() += 1;
    }

    if totals.is_empty() {
        return Err(ReportError::NoGroupValues);
    }
    Ok(totals)
}

/// One result per group for `column`, in the order of `totals`.
/// Responses are trimmed before matching.
pub fn count_by_group(
    table: &SurveyTable,
    label: &str,
    column: usize,
    group_column: usize,
    totals: &BTreeMap<String, usize>,
    criterion: Criterion,
) -> Vec<BarrierResult> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &table.records {
        let group = row[group_column].trim();
        if criterion.matches(row[column].trim()) {
            *counts.entry(group).or_default() += 1;
        }
    }

    totals
        .iter()
        .map(|(group, total)| BarrierResult {
            label: label.to_string(),
            group: Some(group.clone()),
            count: counts.get(group.as_str()).copied().unwrap_or(0),
            total: *total,
        })
        .collect()
}
