use std::path::Path;

use serde::Serialize;

use crate::agegroup::{self, AgeBands};
use crate::dataset::{self, DatasetError};
use crate::models::{AgeGroupSummary, GradeOutlook, RegressionModel, ScatterPoint, StudentRecord};
use crate::outlook;
use crate::trend;

/// The four user-supplied outlook inputs, passed separately from the dataset
/// so the host layer can re-run `compute` with fresh answers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyResponse {
    pub legal_drinking_age: bool,
    pub weekday_consumption: i32,
    pub weekend_consumption: i32,
    pub threshold: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub model: RegressionModel,
    pub line_points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResults {
    pub record_count: usize,
    pub scatter: Vec<ScatterPoint>,
    pub trend: Option<TrendSummary>,
    pub age_groups: Vec<AgeGroupSummary>,
    pub outlook: Option<GradeOutlook>,
}

/// Owns the immutable record set and runs every analysis step in order.
/// `compute` is side-effect free, so repeated calls with the same survey
/// answers return equal results.
pub struct AnalysisPipeline {
    records: Vec<StudentRecord>,
    bands: AgeBands,
}

impl AnalysisPipeline {
    pub fn new(records: Vec<StudentRecord>, bands: AgeBands) -> Self {
        Self { records, bands }
    }

    pub fn from_csv(path: &Path, bands: AgeBands) -> Result<Self, DatasetError> {
        Ok(Self::new(dataset::load_records(path)?, bands))
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn compute(&self, survey: Option<SurveyResponse>) -> AnalysisResults {
        let scatter = self
            .records
            .iter()
            .map(|r| ScatterPoint {
                combined_consumption: r.combined_consumption(),
                final_grade: r.final_grade,
                age: r.age,
            })
            .collect();

        // A degenerate record set means no trend overlay, not a failed run.
        let trend = trend::fit_consumption_trend(&self.records)
            .ok()
            .map(|model| TrendSummary {
                model,
                line_points: model.sample_points().collect(),
            });

        let age_groups = agegroup::summarize_by_age(&self.records, self.bands);

        let outlook = survey.map(|s| {
            outlook::estimate_outlook(
                s.legal_drinking_age,
                s.weekday_consumption,
                s.weekend_consumption,
                s.threshold,
            )
        });

        AnalysisResults {
            record_count: self.records.len(),
            scatter,
            trend,
            age_groups,
            outlook,
        }
    }
}
