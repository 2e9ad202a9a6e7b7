use crate::domain::model::SurveyTable;
use crate::utils::error::{ReportError, Result};
use csv::ReaderBuilder;
use std::io::Read;

/// Header, question text, metadata and at least one response.
pub const MIN_ROWS: usize = 4;

const BOM: char = '\u{feff}';

impl SurveyTable {
    /// Parse a survey export. Fails when fewer than [`MIN_ROWS`] rows are present
    /// or when a row's field count differs from the header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(false).from_reader(reader);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!("Parsed {} CSV rows", rows.len());

        if rows.len() < MIN_ROWS {
            return Err(ReportError::InsufficientRows { found: rows.len() });
        }

        let mut rows = rows.into_iter();
        let mut headers = rows.next().unwrap_or_default();
        let questions = rows.next().unwrap_or_default();
        let _metadata = rows.next();
        let records: Vec<Vec<String>> = rows.collect();

        if let Some(first) = headers.first_mut() {
            if let Some(stripped) = first.strip_prefix(BOM) {
                *first = stripped.to_string();
            }
        }

        Ok(SurveyTable {
            headers,
            questions,
            records,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(data)
    }
}
