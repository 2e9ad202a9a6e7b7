use crate::core::vocabulary::MULTISELECT_VALUES;
use crate::domain::model::{LikertScale, ResponseClassification, SurveyTable};
use std::collections::BTreeSet;

/// Distinct non-empty raw values of a column.
pub fn distinct_values(table: &SurveyTable, column: usize) -> BTreeSet<&str> {
    table
        .column_values(column)
        .filter(|value| !value.is_empty())
        .collect()
}

pub fn classify(values: &BTreeSet<&str>) -> ResponseClassification {
    if values.iter().all(|v| MULTISELECT_VALUES.contains(v)) {
        return ResponseClassification::BinarySelection;
    }

    LikertScale::ALL
        .into_iter()
        .find(|scale| values.iter().all(|v| scale.contains(v)))
        .map(ResponseClassification::OrdinalScale)
        .unwrap_or(ResponseClassification::FreeText)
}
