#![allow(dead_code)] // Not every test binary uses every helper

use inkforge::geometry::{InkSample, Point, Stroke};

pub const CANVAS: f32 = 400.0;

/// Pointer samples emitted per polyline segment by [`InkBuilder::line`].
pub const SAMPLES_PER_SEGMENT: usize = 20;

/// Linear interpolation along a polyline, mimicking a pointer sampled at a fixed rate.
pub fn densify(coords: &[(f32, f32)], per_segment: usize) -> Vec<Point> {
    let mut out = Vec::new();
    let Some(&(x0, y0)) = coords.first() else {
        return out;
    };
    out.push(Point::new(x0, y0));
    for w in coords.windows(2) {
        let ((ax, ay), (bx, by)) = (w[0], w[1]);
        for k in 1..=per_segment {
            let t = k as f32 / per_segment as f32;
            out.push(Point::new(ax + (bx - ax) * t, ay + (by - ay) * t));
        }
    }
    out
}

/// Traces a stroke back and forth `passes` extra times without lifting the pen.
pub fn scribble(points: &[Point], passes: usize) -> Vec<Point> {
    let mut out = points.to_vec();
    for pass in 0..passes {
        let mut back = out.clone();
        if pass % 2 == 0 {
            back.reverse();
        }
        out.extend(back.into_iter().skip(1));
    }
    out
}

/// Builder for ink samples to keep tests readable.
pub struct InkBuilder {
    strokes: Vec<Stroke>,
    width: f32,
    height: f32,
}

impl InkBuilder {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            width: CANVAS,
            height: CANVAS,
        }
    }

    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Densely sampled polyline.
    pub fn line(mut self, coords: &[(f32, f32)]) -> Self {
        self.strokes
            .push(Stroke::new(densify(coords, SAMPLES_PER_SEGMENT)));
        self
    }

    /// Exactly the given points, no interpolation.
    pub fn raw(mut self, coords: &[(f32, f32)]) -> Self {
        self.strokes.push(Stroke::from_coords(coords));
        self
    }

    pub fn points(mut self, points: Vec<Point>) -> Self {
        self.strokes.push(Stroke::new(points));
        self
    }

    pub fn build(self) -> InkSample {
        InkSample::new(self.strokes, self.width, self.height).expect("test canvas is valid")
    }
}

impl Default for InkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// 十 drawn in the middle of a 400px canvas, horizontal first.
pub const TEN_H: [(f32, f32); 2] = [(100.0, 187.5), (300.0, 187.5)];
pub const TEN_V: [(f32, f32); 2] = [(200.0, 100.0), (200.0, 300.0)];

pub fn clean_ten() -> InkSample {
    InkBuilder::new().line(&TEN_H).line(&TEN_V).build()
}

pub fn clean_mouth() -> InkSample {
    InkBuilder::new()
        .line(&[(100.0, 100.0), (100.0, 300.0)])
        .line(&[(100.0, 100.0), (300.0, 100.0), (300.0, 300.0)])
        .line(&[(100.0, 300.0), (300.0, 300.0)])
        .build()
}

/// Maps canvas coordinates through `scale` then `offset`.
pub fn transform(coords: &[(f32, f32)], scale: f32, offset: (f32, f32)) -> Vec<(f32, f32)> {
    coords
        .iter()
        .map(|&(x, y)| (x * scale + offset.0, y * scale + offset.1))
        .collect()
}
