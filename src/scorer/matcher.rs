use super::metrics::{euclidean_dist, mean_pointwise_dist, resample};
use super::normalize::NormalizedStrokes;
use super::types::MatchReport;
use crate::config::MatchParams;
use crate::consts::{FRAME_EXTENT, MIN_TOLERANCE};
use crate::geometry::Point;
use std::f32::consts::SQRT_2;

/// Template stroke plus the ink strokes (in drawing order) standing in for it.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeGroup {
    pub template: usize,
    pub ink: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pairing {
    pub groups: Vec<StrokeGroup>,
    pub unpaired_ink: Vec<usize>,
    pub unpaired_template: Vec<usize>,
    pub fragments_joined: usize,
}

impl Pairing {
    pub fn unpaired(&self) -> usize {
        self.unpaired_ink.len() + self.unpaired_template.len()
    }
}

/// Start-to-start plus end-to-end distance. Both slices must be non-empty.
///
/// A fragment that merely starts at a junction shared with another stroke still
/// ends far from that stroke's end, so it loses to the stroke actually drawn there.
pub fn endpoint_distance(ink: &[Point], reference: &[Point]) -> f32 {
    euclidean_dist(&ink[0], &reference[0])
        + euclidean_dist(&ink[ink.len() - 1], &reference[reference.len() - 1])
}

/// Assigns ink strokes to template strokes.
///
/// Equal counts pair by drawing order. Otherwise pairs are taken greedily by
/// ascending [`endpoint_distance`] (ties: lower ink index, then lower template
/// index), and each leftover ink stroke is joined to the group whose current end
/// is nearest its start, provided that gap is within `join_radius`.
pub fn pair_strokes(ink: &[Vec<Point>], template: &[Vec<Point>], join_radius: f32) -> Pairing {
    if ink.len() == template.len() {
        return Pairing {
            groups: (0..ink.len())
                .map(|i| StrokeGroup {
                    template: i,
                    ink: vec![i],
                })
                .collect(),
            ..Default::default()
        };
    }

    let mut candidates = Vec::with_capacity(ink.len() * template.len());
    for (i, s) in ink.iter().enumerate() {
        for (j, t) in template.iter().enumerate() {
            candidates.push((endpoint_distance(s, t), i, j));
        }
    }
    candidates.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });

    let mut ink_used = vec![false; ink.len()];
    let mut template_used = vec![false; template.len()];
    let mut groups = Vec::new();
    for &(_, i, j) in &candidates {
        if !ink_used[i] && !template_used[j] {
            ink_used[i] = true;
            template_used[j] = true;
            groups.push(StrokeGroup {
                template: j,
                ink: vec![i],
            });
        }
    }
    groups.sort_by_key(|g| g.template);

    let mut unpaired_ink = Vec::new();
    let mut fragments_joined = 0;
    for i in (0..ink.len()).filter(|&i| !ink_used[i]) {
        let start = &ink[i][0];
        let mut best: Option<(usize, f32)> = None;
        for (g, group) in groups.iter().enumerate() {
            let tail = group
                .ink
                .last()
                .and_then(|&last| ink[last].last())
                .copied()
                .unwrap_or(*start);
            let gap = euclidean_dist(&tail, start);
            if gap <= join_radius && best.map_or(true, |(_, d)| gap < d) {
                best = Some((g, gap));
            }
        }
        match best {
            Some((g, _)) => {
                groups[g].ink.push(i);
                fragments_joined += 1;
            }
            None => unpaired_ink.push(i),
        }
    }

    let unpaired_template = (0..template.len())
        .filter(|&j| !template_used[j])
        .collect();

    Pairing {
        groups,
        unpaired_ink,
        unpaired_template,
        fragments_joined,
    }
}

/// Similarity of one stroke path to its reference, in `[0, 1]`.
pub fn stroke_similarity(ink: &[Point], reference: &[Point], tolerance: f32, samples: usize) -> f32 {
    let samples = samples.max(2);
    let a = resample(ink, samples);
    let b = resample(reference, samples);
    let distance = mean_pointwise_dist(&a, &b) / (FRAME_EXTENT * SQRT_2);
    (1.0 - distance / tolerance.max(MIN_TOLERANCE)).max(0.0)
}

/// Multiplier in `(0, 1]` punishing ink that travels far more than the template needs.
pub fn density_factor(path_ratio: f32, params: &MatchParams) -> f32 {
    if !path_ratio.is_finite() || path_ratio <= params.density_ratio_limit {
        return 1.0;
    }
    (params.density_ratio_limit / path_ratio)
        .powf(params.density_penalty_exponent)
        .clamp(0.0, 1.0)
}

/// Compares normalized ink against a normalized template.
pub fn shape_similarity(
    ink: &NormalizedStrokes,
    template: &NormalizedStrokes,
    tolerance: f32,
    params: &MatchParams,
) -> MatchReport {
    let pairing = pair_strokes(&ink.strokes, &template.strokes, params.fragment_join_radius);

    let stroke_similarities: Vec<f32> = pairing
        .groups
        .iter()
        .map(|g| {
            let path: Vec<Point> = g
                .ink
                .iter()
                .flat_map(|&i| ink.strokes[i].iter().copied())
                .collect();
            stroke_similarity(
                &path,
                &template.strokes[g.template],
                tolerance,
                params.resample_points,
            )
        })
        .collect();

    let mean = if stroke_similarities.is_empty() {
        0.0
    } else {
        stroke_similarities.iter().sum::<f32>() / stroke_similarities.len() as f32
    };
    let raw_similarity =
        (mean - params.unpaired_stroke_penalty * pairing.unpaired() as f32).clamp(0.0, 1.0);

    let spacing = params.min_sample_spacing;
    let template_length = template.total_path_length(spacing);
    let path_ratio = if template_length > f32::EPSILON {
        ink.total_path_length(spacing) / template_length
    } else {
        1.0
    };
    let density = density_factor(path_ratio, params);

    MatchReport {
        similarity: (raw_similarity * density).clamp(0.0, 1.0),
        raw_similarity,
        density_factor: density,
        path_ratio,
        paired: pairing.groups.len(),
        unpaired: pairing.unpaired(),
        fragments_joined: pairing.fragments_joined,
        stroke_similarities,
    }
}
