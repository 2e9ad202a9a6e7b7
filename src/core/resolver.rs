use crate::core::vocabulary::is_barrier_question;
use crate::domain::model::SurveyTable;
use crate::utils::error::{ReportError, Result};

impl SurveyTable {
    /// Index of the column whose question text equals `question` exactly.
    pub fn find_question(&self, question: &str) -> Option<usize> {
        self.questions.iter().position(|q| q == question)
    }

    /// Index of the column whose machine name equals `header`.
    pub fn find_header(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| ReportError::ColumnNotFound {
                column: header.to_string(),
            })
    }

    /// Columns whose question text mentions a barrier keyword, in file order.
    pub fn barrier_columns(&self) -> Vec<(usize, &str)> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, question)| is_barrier_question(question))
            .map(|(idx, question)| (idx, question.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SurveyTable {
        SurveyTable {
            headers: vec!["ResponseId".into(), "Q1".into(), "Q2".into(), "Q3".into()],
            questions: vec![
                "Response ID".into(),
                "Which challenges apply? - Cost".into(),
                "Your age".into(),
                "Main Obstacle".into(),
            ],
            records: vec![],
        }
    }

    #[test]
    fn test_find_question_exact() {
        let t = table();
        assert_eq!(t.find_question("Your age"), Some(2));
        assert_eq!(t.find_question("your age"), None);
        assert_eq!(t.find_question("Your"), None);
    }

    #[test]
    fn test_find_header() {
        let t = table();
        assert_eq!(t.find_header("ResponseId").unwrap(), 0);
        let err = t.find_header("Missing").unwrap_err();
        assert!(matches!(err, ReportError::ColumnNotFound { ref column } if column == "Missing"));
    }

    #[test]
    fn test_barrier_columns_keep_file_order() {
        let t = table();
        let cols: Vec<usize> = t.barrier_columns().into_iter().map(|(i, _)| i).collect();
        assert_eq!(cols, vec![1, 3]);
    }
}
