use crate::config::BandThresholds;
use crate::consts::MAX_SCORE;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    #[strum(to_string = "acceptable", serialize = "ok")]
    Acceptable,
    Incorrect,
}

impl ScoreBand {
    /// Band under the default thresholds.
    pub fn from_score(score: i32) -> Self {
        band(score, &BandThresholds::default())
    }

    pub fn is_passing(&self) -> bool {
        !matches!(self, ScoreBand::Incorrect)
    }
}

#[inline(always)]
fn clamp_score(score: i32) -> u8 {
    score.clamp(0, MAX_SCORE as i32) as u8
}

pub fn band(score: i32, thresholds: &BandThresholds) -> ScoreBand {
    let s = clamp_score(score);
    if s >= thresholds.band_excellent {
        ScoreBand::Excellent
    } else if s >= thresholds.band_good {
        ScoreBand::Good
    } else if s >= thresholds.band_acceptable {
        ScoreBand::Acceptable
    } else {
        ScoreBand::Incorrect
    }
}

/// True when the attempt should be queued for remediation.
///
/// The cutoff sits above the acceptable edge: scores in `[acceptable, cutoff)`
/// band as passing yet are still remediated.
pub fn requires_reinforcement(score: i32, thresholds: &BandThresholds) -> bool {
    clamp_score(score) < thresholds.reinforcement_cutoff
}
