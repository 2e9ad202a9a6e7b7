use anyhow::Result;
use cpa_barriers::app::pipelines::group_pipeline::{BARRIER_QUESTIONS, GROUP_QUESTION};
use cpa_barriers::{GroupPipeline, LocalStorage, ReportEngine, ReportError, TomlConfig};
use tempfile::TempDir;

const CONFIG: &str = r#"
[input]
data_path = "survey.csv"

[output]
dir = "analysis"
"#;

fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Builds an export where each `(group, agreeing, total)` contributes
/// `agreeing` "Agree" rows and `total - agreeing` "Disagree" rows.
fn survey(groups: &[(&str, usize, usize)]) -> String {
    let mut csv = String::new();
    csv.push_str("ResponseId,Q5,Q12_3\n");
    csv.push_str(&format!(
        "Response ID,{},{}\n",
        quoted(GROUP_QUESTION),
        quoted(BARRIER_QUESTIONS[0].question_text)
    ));
    csv.push_str("\"{\"\"ImportId\"\":\"\"_recordId\"\"}\",meta,meta\n");

    let mut id = 0;
    for (group, agreeing, total) in groups {
        for i in 0..*total {
            id += 1;
            let answer = if i < *agreeing { "Agree" } else { "Disagree" };
            csv.push_str(&format!("R_{},{},{}\n", id, group, answer));
        }
    }
    csv
}

fn run(data: &str) -> cpa_barriers::Result<(TempDir, String)> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("survey.csv"), data)?;

    let config = TomlConfig::from_toml_str(CONFIG)?;
    let pipeline = GroupPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let output = ReportEngine::new(pipeline).run()?;

    let report = std::fs::read_to_string(temp_dir.path().join(&output.report_path))?;
    Ok((temp_dir, report))
}

#[test]
fn test_graduate_vs_undergraduate_comparison() -> Result<()> {
    let (temp_dir, report) = run(&survey(&[("Undergraduate", 4, 20), ("Graduate", 6, 10)]))?;

    assert!(report.starts_with("# Perceived CPA Licensure Barriers by Respondent Group\n"));
    assert!(report.contains(&format!("Grouping question: **{}**", GROUP_QUESTION)));
    assert!(report.contains(
        "| Graduate degree may delay career advancement | Graduate | 6 / 10 | 60.0% |"
    ));
    assert!(report.contains(
        "| Graduate degree may delay career advancement | Undergraduate | 4 / 20 | 20.0% |"
    ));
    assert!(report.contains(
        "* Graduate respondents were more likely to report the barrier \"Graduate degree may \
         delay career advancement\" than Undergraduate respondents (60.0% vs. 20.0%, a 40.0 \
         percentage point gap)."
    ));
    assert!(report.contains("![Barrier comparison chart](barrier_by_group.svg)"));

    // Graduate sorts before Undergraduate in the table.
    let graduate = report.find("| Graduate | 6 / 10").unwrap();
    let undergraduate = report.find("| Undergraduate | 4 / 20").unwrap();
    assert!(graduate < undergraduate);

    let svg = std::fs::read_to_string(temp_dir.path().join("analysis/barrier_by_group.svg"))?;
    assert!(svg.contains("<svg"));
    assert!(svg.contains("60.0% (6/10)"));
    assert!(svg.contains("20.0% (4/20)"));
    Ok(())
}

#[test]
fn test_group_values_are_trimmed() -> Result<()> {
    let (_dir, report) = run(&survey(&[(" Graduate ", 1, 2), ("Graduate", 1, 2)]))?;

    assert!(report.contains("| Graduate | 2 / 4 | 50.0% |"));
    assert!(!report.contains("percentage point gap"));
    Ok(())
}

#[test]
fn test_missing_group_question_aborts() -> Result<()> {
    let data = "ResponseId,Q1\nResponse ID,Something else?\nmeta,meta\nR_1,Agree\n";
    let err = run(data).unwrap_err();

    assert!(matches!(err, ReportError::GroupQuestionNotFound { .. }));
    assert_eq!(err.to_string(), format!("Group question not found: {}", GROUP_QUESTION));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_blank_group_column_aborts() -> Result<()> {
    let err = run(&survey(&[("", 1, 3)])).unwrap_err();
    assert_eq!(err.to_string(), "No respondent group values found.");
    Ok(())
}

#[test]
fn test_short_export_aborts_before_reporting() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("survey.csv"),
        "ResponseId,Q1\nResponse ID,Question\nmeta,meta\n",
    )?;

    let config = TomlConfig::from_toml_str(CONFIG)?;
    let pipeline = GroupPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let err = ReportEngine::new(pipeline).run().unwrap_err();

    assert_eq!(err.to_string(), "Dataset does not contain enough rows to parse.");
    assert!(!temp_dir.path().join("analysis").exists());
    Ok(())
}
