use super::types::FusionResult;
use crate::config::FusionParams;
use crate::consts::MAX_SCORE;
use tracing::debug;

/// Highest fused score a given quality may reach. Nondecreasing in `quality`.
pub fn quality_cap(quality: u8, params: &FusionParams) -> f32 {
    if quality < params.low_quality_threshold {
        params.low_quality_ceiling as f32
    } else {
        (quality as f32 + params.confidence_headroom as f32).min(MAX_SCORE as f32)
    }
}

/// Points removed for drawing the wrong number of strokes.
pub fn stroke_mismatch_penalty(stroke_count: usize, expected: usize, params: &FusionParams) -> f32 {
    let ratio = stroke_count.abs_diff(expected) as f32 / expected.max(1) as f32;
    (params.stroke_mismatch_penalty * ratio)
        .min(params.max_stroke_mismatch_penalty)
        .max(0.0)
}

/// Blends the geometric quality with an external recognizer's confidence.
///
/// Without a usable confidence the quality passes through untouched. With one, the
/// blend is capped by [`quality_cap`] so a confident recognizer cannot lift a poor
/// drawing, then the stroke mismatch penalty is taken off.
pub fn fuse(
    confidence: Option<f32>,
    quality: u8,
    stroke_count: usize,
    expected: usize,
    params: &FusionParams,
) -> FusionResult {
    let quality = quality.min(MAX_SCORE);
    let confidence = match confidence {
        Some(c) if c.is_finite() => c.clamp(0.0, 1.0),
        Some(_) => {
            debug!("Non-finite recognizer confidence; falling back to quality");
            return FusionResult {
                final_score: quality,
                ..Default::default()
            };
        }
        None => {
            debug!("No recognizer confidence; quality passes through");
            return FusionResult {
                final_score: quality,
                ..Default::default()
            };
        }
    };

    let w = params.fusion_quality_weight.clamp(0.0, 1.0);
    let blend = w * quality as f32 + (1.0 - w) * 100.0 * confidence;
    let cap = quality_cap(quality, params);
    let capped = blend > cap;
    let penalty = stroke_mismatch_penalty(stroke_count, expected, params);

    let final_score = (blend.min(cap) - penalty)
        .round()
        .clamp(0.0, MAX_SCORE as f32) as u8;

    FusionResult {
        final_score,
        used_confidence: true,
        capped,
        stroke_penalty: penalty.round() as u8,
    }
}
