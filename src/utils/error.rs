use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dataset does not contain enough rows to parse.")]
    InsufficientRows { found: usize },

    #[error("Group question not found: {question}")]
    GroupQuestionNotFound { question: String },

    #[error("Barrier question not found in dataset: {question}")]
    BarrierQuestionNotFound { question: String },

    #[error("No respondent group values found.")]
    NoGroupValues,

    #[error("Column not found in header row: {column}")]
    ColumnNotFound { column: String },

    #[error("Chart rendering error: {message}")]
    ChartError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Dataset,
    Configuration,
    Io,
    Chart,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::CsvError(_)
            | ReportError::InsufficientRows { .. }
            | ReportError::GroupQuestionNotFound { .. }
            | ReportError::BarrierQuestionNotFound { .. }
            | ReportError::NoGroupValues
            | ReportError::ColumnNotFound { .. } => ErrorCategory::Dataset,
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ReportError::IoError(_) => ErrorCategory::Io,
            ReportError::ChartError { .. } => ErrorCategory::Chart,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Dataset => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io => 3,
            ErrorCategory::Chart => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Dataset => {
                "Check that the survey export keeps the header, question text and metadata rows"
            }
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Chart => "Re-run without the chart feature or check the installed fonts",
        }
    }

    pub(crate) fn chart(err: impl std::fmt::Display) -> Self {
        ReportError::ChartError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
