use super::matcher::shape_similarity;
use super::normalize::normalize;
use super::types::QualityResult;
use crate::config::{MatchParams, QualityWeights};
use crate::consts::MAX_SCORE;
use crate::geometry::{InkSample, Template};
use tracing::debug;

/// `1 - min(1, |ink - expected| / expected)`.
pub fn stroke_count_fidelity(ink_strokes: usize, expected: usize) -> f32 {
    let expected = expected.max(1);
    let diff = ink_strokes.abs_diff(expected) as f32;
    1.0 - (diff / expected as f32).min(1.0)
}

/// Blends shape similarity and stroke fidelity into a 0..=100 grade.
pub fn combine(similarity: f32, fidelity: f32, weights: &QualityWeights) -> u8 {
    let raw = 100.0 * (weights.weight_shape * similarity + weights.weight_stroke_count * fidelity);
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, MAX_SCORE as f32) as u8
}

/// Grades ink against a template. Blank or unreadable ink scores 0.
pub fn score(
    ink: &InkSample,
    template: &Template,
    weights: &QualityWeights,
    params: &MatchParams,
) -> QualityResult {
    let expected = template.expected_stroke_count.max(1);

    let Some(ink_norm) = normalize(&ink.strokes) else {
        debug!("No usable ink points; quality is 0");
        return QualityResult::empty(expected);
    };
    let Some(template_norm) = normalize(&template.strokes) else {
        debug!("Template '{}' has no usable geometry", template.glyph);
        return QualityResult::empty(expected);
    };

    let report = shape_similarity(&ink_norm, &template_norm, template.tolerance, params);
    let ink_strokes = ink_norm.stroke_count();
    let fidelity = stroke_count_fidelity(ink_strokes, expected);
    let score = combine(report.similarity, fidelity, weights);

    debug!(
        "Quality '{}': similarity={:.3} fidelity={:.3} density={:.3} -> {}",
        template.glyph, report.similarity, fidelity, report.density_factor, score
    );

    QualityResult {
        score,
        shape_similarity: report.similarity,
        stroke_count_fidelity: fidelity,
        density_factor: report.density_factor,
        ink_strokes,
        expected_strokes: expected,
        matching: Some(report),
    }
}
