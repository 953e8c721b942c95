use crate::config::AssistParams;
use crate::consts::MAX_SCORE;

/// Reduction factor for one assist, chosen from the difficulty/ability gap.
///
/// Without both values (or with non-finite ones) the base factor applies.
pub fn reduction_factor(
    card_difficulty: Option<f32>,
    ability_level: Option<f32>,
    params: &AssistParams,
) -> f32 {
    match (card_difficulty, ability_level) {
        (Some(d), Some(a)) if d.is_finite() && a.is_finite() => {
            let gap = d - a;
            if gap > params.assist_gap {
                params.assist_lenient_factor
            } else if gap < -params.assist_gap {
                params.assist_strict_factor
            } else {
                params.assist_base_factor
            }
        }
        _ => params.assist_base_factor,
    }
}

/// Lowers a score for assists used during the attempt.
///
/// The factor compounds per assist. A score that was passing (at or above
/// `ok_threshold`) is never pushed below `ok_threshold`.
pub fn apply_assist_penalty(
    score: i32,
    assist_count: u32,
    card_difficulty: Option<f32>,
    ability_level: Option<f32>,
    ok_threshold: u8,
    params: &AssistParams,
) -> u8 {
    let score = score.clamp(0, MAX_SCORE as i32);
    if assist_count == 0 {
        return score as u8;
    }

    let factor = reduction_factor(card_difficulty, ability_level, params).clamp(0.0, 1.0);
    let exponent = assist_count.min(i32::MAX as u32) as i32;
    let penalized = score as f32 * factor.powi(exponent);

    let floor = ok_threshold.min(MAX_SCORE) as f32;
    let adjusted = if score as f32 >= floor && penalized < floor {
        floor
    } else {
        penalized.round()
    };

    adjusted.clamp(0.0, MAX_SCORE as f32) as u8
}
