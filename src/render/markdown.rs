//! Markdown report documents for both pipelines.

use crate::domain::model::{ChartOutcome, GroupAnalysis, GroupComparison, SummaryAnalysis};

pub fn render_summary_report(analysis: &SummaryAnalysis, chart: Option<&ChartOutcome>) -> String {
    let mut lines = vec![
        "# Perceived CPA Licensure Barriers Summary".to_string(),
        String::new(),
        format!(
            "Total respondents analyzed: **{}**",
            analysis.total_respondents
        ),
        String::new(),
    ];

    if analysis.results.is_empty() {
        lines.extend(
            [
                "No survey columns with barrier-related keywords were detected in the",
                "question text row of the dataset. If there are barrier questions in a",
                "different sheet or dataset, please provide that file to compute the",
                "requested ranked summary.",
                "",
            ]
            .map(str::to_string),
        );
        return lines.join("\n");
    }

    lines.push("| Barrier | Respondents | Percentage |".to_string());
    lines.push("| --- | ---: | ---: |".to_string());
    for result in &analysis.results {
        lines.push(format!(
            "| {} | {} | {:.1}% |",
            table_cell(&result.label),
            result.count,
            result.percentage()
        ));
    }
    lines.push(String::new());

    match chart {
        Some(ChartOutcome::Rendered { file_name }) => {
            lines.push(format!("![Barrier summary chart]({})", file_name));
        }
        Some(ChartOutcome::Unavailable { reason }) => {
            lines.push(format!("Visualization not generated because {}.", reason));
        }
        None => {}
    }
    lines.push(String::new());

    lines.join("\n")
}

pub fn render_group_report(analysis: &GroupAnalysis, chart_file_name: &str) -> String {
    let mut lines = vec![
        "# Perceived CPA Licensure Barriers by Respondent Group".to_string(),
        String::new(),
        format!("Grouping question: **{}**", analysis.group_question),
        String::new(),
        "## Barrier indicators".to_string(),
        String::new(),
        "| Barrier | Group | Respondents | Percentage |".to_string(),
        "| --- | --- | ---: | ---: |".to_string(),
    ];

    for result in &analysis.results {
        lines.push(format!(
            "| {} | {} | {} / {} | {:.1}% |",
            table_cell(&result.label),
            table_cell(result.group.as_deref().unwrap_or_default()),
            result.count,
            result.total,
            result.percentage()
        ));
    }

    lines.extend([String::new(), "## Summary".to_string(), String::new()]);
    lines.extend(analysis.comparisons.iter().map(comparison_line));

    lines.extend([
        String::new(),
        "## Chart".to_string(),
        String::new(),
        format!("![Barrier comparison chart]({})", chart_file_name),
    ]);

    lines.extend([
        String::new(),
        "## Notes".to_string(),
        String::new(),
        "* The dataset contains one Likert-style barrier statement with negative phrasing that \
         aligns to a perceived barrier. The analysis above is limited to that item."
            .to_string(),
    ]);

    lines.join("\n")
}

pub fn comparison_line(comparison: &GroupComparison) -> String {
    format!(
        "* {} respondents were more likely to report the barrier \"{}\" than {} respondents \
         ({:.1}% vs. {:.1}%, a {:.1} percentage point gap).",
        comparison.highest.group.as_deref().unwrap_or_default(),
        comparison.label,
        comparison.lowest.group.as_deref().unwrap_or_default(),
        comparison.highest.percentage(),
        comparison.lowest.percentage(),
        comparison.gap()
    )
}

/// Question text may span lines; a table row may not.
fn table_cell(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BarrierResult;

    fn result(label: &str, group: Option<&str>, count: usize, total: usize) -> BarrierResult {
        BarrierResult {
            label: label.to_string(),
            group: group.map(str::to_string),
            count,
            total,
        }
    }

    #[test]
    fn test_summary_table_rows() {
        let analysis = SummaryAnalysis {
            total_respondents: 8,
            results: vec![result("Exam cost", None, 6, 8), result("Time", None, 1, 8)],
        };
        let chart = ChartOutcome::Rendered {
            file_name: "barrier_summary.png".to_string(),
        };
        let md = render_summary_report(&analysis, Some(&chart));

        assert!(md.starts_with("# Perceived CPA Licensure Barriers Summary\n"));
        assert!(md.contains("Total respondents analyzed: **8**"));
        assert!(md.contains("| Exam cost | 6 | 75.0% |"));
        assert!(md.contains("| Time | 1 | 12.5% |"));
        assert!(md.contains("![Barrier summary chart](barrier_summary.png)"));
    }

    #[test]
    fn test_summary_fallback_note() {
        let analysis = SummaryAnalysis {
            total_respondents: 1,
            results: vec![result("Cost", None, 1, 1)],
        };
        let chart = ChartOutcome::Unavailable {
            reason: "the raster chart backend is not enabled in this build".to_string(),
        };
        let md = render_summary_report(&analysis, Some(&chart));
        assert!(md.contains(
            "Visualization not generated because the raster chart backend is not enabled in this build."
        ));
        assert!(!md.contains("!["));
    }

    #[test]
    fn test_summary_without_barrier_columns() {
        let analysis = SummaryAnalysis {
            total_respondents: 4,
            results: vec![],
        };
        let md = render_summary_report(&analysis, None);
        assert!(md.contains("No survey columns with barrier-related keywords were detected"));
        assert!(!md.contains("| Barrier |"));
    }

    #[test]
    fn test_multiline_labels_are_flattened() {
        assert_eq!(table_cell("First line\n\nSecond | part"), "First line Second \\| part");
    }

    #[test]
    fn test_group_report_sections() {
        let graduate = result("Delay", Some("Graduate"), 6, 10);
        let undergraduate = result("Delay", Some("Undergraduate"), 4, 20);
        let analysis = GroupAnalysis {
            group_question: "Which program?".to_string(),
            groups: vec!["Graduate".to_string(), "Undergraduate".to_string()],
            results: vec![graduate.clone(), undergraduate.clone()],
            comparisons: vec![GroupComparison {
                label: "Delay".to_string(),
                highest: graduate,
                lowest: undergraduate,
            }],
        };
        let md = render_group_report(&analysis, "barrier_by_group.svg");

        assert!(md.contains("Grouping question: **Which program?**"));
        assert!(md.contains("| Delay | Graduate | 6 / 10 | 60.0% |"));
        assert!(md.contains("| Delay | Undergraduate | 4 / 20 | 20.0% |"));
        assert!(md.contains(
            "* Graduate respondents were more likely to report the barrier \"Delay\" than \
             Undergraduate respondents (60.0% vs. 20.0%, a 40.0 percentage point gap)."
        ));
        assert!(md.contains("![Barrier comparison chart](barrier_by_group.svg)"));
        assert!(md.contains("## Notes"));
    }
}
