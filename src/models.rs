use serde::{Deserialize, Serialize};

/// One student row, narrowed from the wider survey schema. Serde renames map
/// the source column names onto clearer field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub age: i32,
    #[serde(rename = "famrel")]
    pub family_relationship: i32,
    #[serde(rename = "freetime")]
    pub free_time: i32,
    #[serde(rename = "Dalc")]
    pub weekday_consumption: i32,
    #[serde(rename = "Walc")]
    pub weekend_consumption: i32,
    pub health: i32,
    #[serde(rename = "G3")]
    pub final_grade: i32,
}

impl StudentRecord {
    pub fn combined_consumption(&self) -> i32 {
        self.weekday_consumption + self.weekend_consumption
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeGroupSummary {
    pub label: String,
    pub member_count: usize,
    pub mean_final_grade: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub combined_consumption: i32,
    pub final_grade: i32,
    pub age: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlookBand {
    BelowMidpoint,
    AtOrAboveMidpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeOutlook {
    pub band: OutlookBand,
    pub age_note: &'static str,
    pub message: &'static str,
}
