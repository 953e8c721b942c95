use crate::consts::{FRAME_EXTENT, MIN_EXTENT};
use crate::geometry::{BoundingBox, Point, Stroke};
use tracing::debug;

/// Strokes translated and uniformly scaled into the unit comparison frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStrokes {
    pub strokes: Vec<Vec<Point>>,
    /// Multiplier applied to source units.
    pub scale: f32,
}

impl NormalizedStrokes {
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Summed arc length with points closer than `min_spacing` thinned out,
    /// so pointer tremor at high sampling rates does not inflate it.
    pub fn total_path_length(&self, min_spacing: f32) -> f32 {
        self.strokes
            .iter()
            .map(|s| super::metrics::thinned_path_length(s, min_spacing))
            .sum()
    }
}

/// Fits a stroke set into the `FRAME_EXTENT` square, centered, aspect ratio preserved.
///
/// Non-finite points are dropped, as are strokes left with no points. Returns `None`
/// when nothing remains. Ink and template geometry go through the same function so
/// they land in one frame regardless of canvas size or template placement.
pub fn normalize(strokes: &[Stroke]) -> Option<NormalizedStrokes> {
    let bbox = BoundingBox::from_points(strokes.iter().flat_map(|s| s.points.iter()))?;

    let (width, height) = (bbox.width(), bbox.height());
    let mut span = width.max(height);
    if span <= f32::EPSILON {
        debug!("Degenerate bounding box, substituting minimum extent");
        span = MIN_EXTENT;
    }
    let scale = FRAME_EXTENT / span;

    let offset_x = (FRAME_EXTENT - width * scale) / 2.0;
    let offset_y = (FRAME_EXTENT - height * scale) / 2.0;

    let normalized: Vec<Vec<Point>> = strokes
        .iter()
        .map(|s| {
            s.points
                .iter()
                .filter(|p| p.is_finite())
                .map(|p| {
                    Point::new(
                        (p.x - bbox.min_x) * scale + offset_x,
                        (p.y - bbox.min_y) * scale + offset_y,
                    )
                })
                .collect::<Vec<_>>()
        })
        .filter(|s| !s.is_empty())
        .collect();

    Some(NormalizedStrokes {
        strokes: normalized,
        scale,
    })
}
