use crate::error::IfResult;
use crate::geometry::{InkSample, Point, Stroke, Template};
use crate::scorer::metrics::resample;
use fastrand::Rng;

/// Knobs for rendering a template as a learner-like attempt.
#[derive(Debug, Clone)]
pub struct SynthParams {
    pub canvas: f32,
    pub points_per_stroke: usize,
    // Per-point noise as a fraction of the drawn glyph size
    pub jitter: f32,
    pub reverse: bool,
    pub split: bool,
    // Number of extra back-and-forth passes over each stroke
    pub scribble_passes: usize,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            canvas: 400.0,
            points_per_stroke: 24,
            jitter: 0.0,
            reverse: false,
            split: false,
            scribble_passes: 0,
        }
    }
}

/// Renders `template` onto a square canvas at a random size and position.
pub fn synthesize_attempt(
    template: &Template,
    params: &SynthParams,
    rng: &mut Rng,
) -> IfResult<InkSample> {
    let canvas = params.canvas.max(1.0);
    let size = canvas * (0.5 + 0.4 * rng.f32());
    let origin_x = (canvas - size) * rng.f32();
    let origin_y = (canvas - size) * rng.f32();
    let noise = params.jitter.max(0.0) * size;

    let mut strokes: Vec<Stroke> = Vec::with_capacity(template.strokes.len() + 1);
    for reference in &template.strokes {
        let mut points: Vec<Point> = resample(&reference.points, params.points_per_stroke.max(2))
            .into_iter()
            .map(|p| {
                Point::new(
                    origin_x + p.x * size + (rng.f32() - 0.5) * 2.0 * noise,
                    origin_y + p.y * size + (rng.f32() - 0.5) * 2.0 * noise,
                )
            })
            .collect();
        if params.reverse {
            points.reverse();
        }
        for pass in 0..params.scribble_passes {
            let mut back: Vec<Point> = points.clone();
            if pass % 2 == 0 {
                back.reverse();
            }
            points.extend(back.into_iter().skip(1));
        }
        strokes.push(Stroke::new(points));
    }

    if params.split {
        if let Some(first) = strokes.first_mut() {
            if first.points.len() >= 4 {
                let mid = first.points.len() / 2;
                let tail = first.points[mid..].to_vec();
                first.points.truncate(mid + 1);
                strokes.insert(1, Stroke::new(tail));
            }
        }
    }

    InkSample::new(strokes, canvas, canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::BuiltinGlyph;

    #[test]
    fn same_seed_same_ink() {
        let t = BuiltinGlyph::Ten.template();
        let p = SynthParams {
            jitter: 0.02,
            ..Default::default()
        };
        let a = synthesize_attempt(&t, &p, &mut Rng::with_seed(9)).unwrap();
        let b = synthesize_attempt(&t, &p, &mut Rng::with_seed(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn split_adds_one_stroke() {
        let t = BuiltinGlyph::Ten.template();
        let p = SynthParams {
            split: true,
            ..Default::default()
        };
        let ink = synthesize_attempt(&t, &p, &mut Rng::with_seed(1)).unwrap();
        assert_eq!(ink.stroke_count(), 3);
        assert_eq!(ink.strokes[0].points.last(), ink.strokes[1].points.first());
    }
}
