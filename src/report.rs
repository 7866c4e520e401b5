use std::fmt::Write;

use chrono::Utc;

use crate::pipeline::AnalysisResults;

pub fn build_report(results: &AnalysisResults) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Student Alcohol Consumption and Final Grades");
    let _ = writeln!(
        output,
        "Generated on {} from {} student records.",
        Utc::now().date_naive(),
        results.record_count
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Consumption Trend");

    match &results.trend {
        Some(trend) => {
            let _ = writeln!(
                output,
                "Fitted line over combined consumption: slope {:.3}, intercept {:.3}.",
                trend.model.slope, trend.model.intercept
            );
            if trend.model.slope < 0.0 {
                let _ = writeln!(
                    output,
                    "The line slopes downward, so higher alcohol consumption tracks with lower grades."
                );
            } else {
                let _ = writeln!(
                    output,
                    "The line does not slope downward, so this dataset shows no grade penalty for higher consumption."
                );
            }
        }
        None => {
            let _ = writeln!(output, "No trend available for this dataset.");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Average Final Grade by Age Band");

    for group in &results.age_groups {
        match group.mean_final_grade {
            Some(mean) => {
                let _ = writeln!(
                    output,
                    "- {}: {:.2} across {} students",
                    group.label, mean, group.member_count
                );
            }
            None => {
                let _ = writeln!(output, "- {}: no data", group.label);
            }
        }
    }

    if let Some(outlook) = &results.outlook {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Grade Outlook");
        let _ = writeln!(output, "{}", outlook.age_note);
        let _ = writeln!(output, "{}", outlook.message);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agegroup::AgeBands;
    use crate::models::StudentRecord;
    use crate::pipeline::{AnalysisPipeline, SurveyResponse};

    fn record(age: i32, weekday: i32, weekend: i32, final_grade: i32) -> StudentRecord {
        StudentRecord {
            age,
            family_relationship: 4,
            free_time: 3,
            weekday_consumption: weekday,
            weekend_consumption: weekend,
            health: 5,
            final_grade,
        }
    }

    #[test]
    fn report_lists_bands_and_marks_empty_ones() {
        let records = vec![record(15, 1, 1, 10), record(16, 2, 3, 14)];
        let pipeline = AnalysisPipeline::new(records, AgeBands::default());
        let report = build_report(&pipeline.compute(None));

        assert!(report.contains("## Average Final Grade by Age Band"));
        assert!(report.contains("- under 16: 10.00 across 1 students"));
        assert!(report.contains("- 18 and over: no data"));
        assert!(!report.contains("## Grade Outlook"));
    }

    #[test]
    fn report_includes_outlook_when_survey_answered() {
        let records = vec![
            record(15, 1, 1, 10),
            record(16, 2, 2, 14),
            record(18, 3, 3, 8),
        ];
        let pipeline = AnalysisPipeline::new(records, AgeBands::default());
        let survey = SurveyResponse {
            legal_drinking_age: false,
            weekday_consumption: 3,
            weekend_consumption: 3,
            threshold: 5,
        };
        let report = build_report(&pipeline.compute(Some(survey)));

        assert!(report.contains("Fitted line over combined consumption"));
        assert!(report.contains("slopes downward"));
        assert!(report.contains("Wait a few years to consume alcohol, child."));
        assert!(report.contains("Your final grade may be below 50%."));
    }

    #[test]
    fn degenerate_dataset_reports_missing_trend() {
        let pipeline = AnalysisPipeline::new(Vec::new(), AgeBands::default());
        let report = build_report(&pipeline.compute(None));
        assert!(report.contains("No trend available for this dataset."));
    }
}
