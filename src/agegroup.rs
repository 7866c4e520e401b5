use crate::models::{AgeGroupSummary, StudentRecord};

/// Age boundaries for the three bands. The defaults mirror Portugal's legal
/// drinking ages: beer and wine at 16, all alcohol at 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBands {
    pub beer_wine_age: i32,
    pub full_age: i32,
}

impl Default for AgeBands {
    fn default() -> Self {
        Self {
            beer_wine_age: 16,
            full_age: 18,
        }
    }
}

impl AgeBands {
    fn labels(&self) -> [String; 3] {
        [
            format!("under {}", self.beer_wine_age),
            format!("{} to {}", self.beer_wine_age, self.full_age - 1),
            format!("{} and over", self.full_age),
        ]
    }
}

/// Splits records into the three bands and averages final grade per band.
/// The predicates are mutually exclusive and cover every age, so each record
/// lands in exactly one band. An empty band reports an absent mean.
pub fn summarize_by_age(records: &[StudentRecord], bands: AgeBands) -> Vec<AgeGroupSummary> {
    let mut counts = [0usize; 3];
    let mut totals = [0i64; 3];

    for record in records {
        let idx = if record.age < bands.beer_wine_age {
            0
        } else if record.age < bands.full_age {
            1
        } else {
            2
        };
        counts[idx] += 1;
        totals[idx] += i64::from(record.final_grade);
    }

    bands
        .labels()
        .into_iter()
        .zip(counts.into_iter().zip(totals))
        .map(|(label, (count, total))| AgeGroupSummary {
            label,
            member_count: count,
            mean_final_grade: (count > 0).then(|| total as f64 / count as f64),
        })
        .collect()
}
