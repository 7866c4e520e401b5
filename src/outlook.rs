use crate::models::{GradeOutlook, OutlookBand};

/// Combined weekday plus weekend consumption above this predicts a grade
/// below the midpoint of the 0-20 scale.
pub const DEFAULT_CONSUMPTION_THRESHOLD: i32 = 5;

const OF_AGE_NOTE: &str = "Great! You are of age, so drink safely!";
const UNDERAGE_NOTE: &str = "Wait a few years to consume alcohol, child.";
const BELOW_MESSAGE: &str = "Your final grade may be below 50%.";
const ABOVE_MESSAGE: &str = "Your final grade may be above 50%.";

/// Pure rule-based outlook from the survey answers. The legal-age flag
/// selects the age note only; both flag values apply the same consumption
/// threshold to pick the band.
pub fn estimate_outlook(
    legal_drinking_age: bool,
    weekday_consumption: i32,
    weekend_consumption: i32,
    threshold: i32,
) -> GradeOutlook {
    let age_note = if legal_drinking_age {
        OF_AGE_NOTE
    } else {
        UNDERAGE_NOTE
    };

    let band = if weekday_consumption + weekend_consumption > threshold {
        OutlookBand::BelowMidpoint
    } else {
        OutlookBand::AtOrAboveMidpoint
    };

    let message = match band {
        OutlookBand::BelowMidpoint => BELOW_MESSAGE,
        OutlookBand::AtOrAboveMidpoint => ABOVE_MESSAGE,
    };

    GradeOutlook {
        band,
        age_note,
        message,
    }
}
