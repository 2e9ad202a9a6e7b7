//! Fixed response vocabularies of the CPA pathways survey.

use crate::domain::model::LikertScale;

/// Question-text fragments that mark a column as barrier-related.
pub const BARRIER_KEYWORDS: &[&str] = &["barrier", "obstacle", "challenge", "difficulty", "difficult"];

pub const SELECTED: &str = "Selected";
pub const MULTISELECT_VALUES: &[&str] = &[SELECTED, "Not Selected"];

pub const AGREEMENT_SCALE: &[&str] = &[
    "Strongly agree",
    "Agree",
    "Neither agree nor disagree",
    "Disagree",
    "Strongly disagree",
];

pub const IMPORTANCE_SCALE: &[&str] = &[
    "Extremely important",
    "Very important",
    "Moderately important",
    "Slightly important",
    "Not at all important",
];

pub const LIKELIHOOD_SCALE: &[&str] = &[
    "Very likely",
    "Somewhat likely",
    "Neither likely nor unlikely",
    "Somewhat unlikely",
    "Very unlikely",
];

/// Top-two set used by the ranked summary.
pub const SUMMARY_TOP_TWO: &[&str] = &["Strongly agree", "Agree"];

/// Top-two set used by the group comparison. Includes "Somewhat agree",
/// unlike [`SUMMARY_TOP_TWO`]; the two are kept separate.
pub const GROUP_TOP_TWO: &[&str] = &["Strongly agree", "Somewhat agree", "Agree"];

impl LikertScale {
    /// Scan order used by the classifier.
    pub const ALL: [LikertScale; 3] = [
        LikertScale::Agreement,
        LikertScale::Importance,
        LikertScale::Likelihood,
    ];

    pub fn values(self) -> &'static [&'static str] {
        match self {
            LikertScale::Agreement => AGREEMENT_SCALE,
            LikertScale::Importance => IMPORTANCE_SCALE,
            LikertScale::Likelihood => LIKELIHOOD_SCALE,
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.values().contains(&value)
    }
}

pub fn is_barrier_question(question: &str) -> bool {
    let lower = question.to_lowercase();
    BARRIER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert!(is_barrier_question("What BARRIERS did you face?"));
        assert!(is_barrier_question("The exam was Difficult to schedule"));
        assert!(is_barrier_question("Biggest obstacle to licensure"));
        assert!(!is_barrier_question("How old are you?"));
    }

    #[test]
    fn test_scales_do_not_overlap() {
        for a in LikertScale::ALL {
            for b in LikertScale::ALL {
                if a == b {
                    continue;
                }
                assert!(a.values().iter().all(|v| !b.contains(v)));
            }
        }
    }

    #[test]
    fn test_top_two_sets_differ() {
        assert!(!SUMMARY_TOP_TWO.contains(&"Somewhat agree"));
        assert!(GROUP_TOP_TWO.contains(&"Somewhat agree"));
    }
}
