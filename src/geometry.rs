use crate::error::{IfResult, InkForgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One pen-down to pen-up motion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(f32, f32)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// The learner's captured handwriting plus the canvas it was drawn on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkSample {
    pub strokes: Vec<Stroke>,
    pub width: f32,
    pub height: f32,
}

impl InkSample {
    pub fn new(strokes: Vec<Stroke>, width: f32, height: f32) -> IfResult<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(InkForgeError::Validation(format!(
                "canvas must have positive dimensions (got {}x{})",
                width, height
            )));
        }
        Ok(Self {
            strokes,
            width,
            height,
        })
    }

    /// Blank canvas; scores 0 against every template.
    pub fn empty(width: f32, height: f32) -> IfResult<Self> {
        Self::new(Vec::new(), width, height)
    }

    /// Strokes carrying at least one point. This is the count used for stroke fidelity.
    pub fn stroke_count(&self) -> usize {
        self.strokes.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    pub fn is_blank(&self) -> bool {
        self.point_count() == 0
    }
}

/// Reference geometry for a target glyph, in unit space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub glyph: String,
    pub strokes: Vec<Stroke>,
    pub expected_stroke_count: usize,
    pub tolerance: f32,
}

impl Template {
    pub fn new(
        glyph: &str,
        strokes: Vec<Stroke>,
        expected_stroke_count: usize,
        tolerance: f32,
    ) -> IfResult<Self> {
        let template = Self {
            glyph: glyph.to_string(),
            strokes,
            expected_stroke_count,
            tolerance,
        };
        template.validate()?;
        Ok(template)
    }

    /// Content checks. A template failing these is a content defect, not learner input.
    pub fn validate(&self) -> IfResult<()> {
        if self.expected_stroke_count == 0 {
            return Err(InkForgeError::Template(format!(
                "'{}': expected_stroke_count must be at least 1",
                self.glyph
            )));
        }
        if self.strokes.is_empty() {
            return Err(InkForgeError::Template(format!(
                "'{}': no reference strokes",
                self.glyph
            )));
        }
        if let Some(idx) = self.strokes.iter().position(Stroke::is_empty) {
            return Err(InkForgeError::Template(format!(
                "'{}': reference stroke {} is empty",
                self.glyph, idx
            )));
        }
        if self
            .strokes
            .iter()
            .flat_map(|s| s.points.iter())
            .any(|p| !p.is_finite())
        {
            return Err(InkForgeError::Template(format!(
                "'{}': reference strokes contain non-finite coordinates",
                self.glyph
            )));
        }
        if !(self.tolerance > 0.0 && self.tolerance <= 1.0) {
            return Err(InkForgeError::Template(format!(
                "'{}': tolerance must lie in (0, 1] (got {})",
                self.glyph, self.tolerance
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let template: Template = serde_json::from_str(&content)?;
        template.validate()?;
        info!(
            "Loaded template '{}' ({} strokes) from {}",
            template.glyph,
            template.strokes.len(),
            path.display()
        );
        Ok(template)
    }
}

/// Axis-aligned extent of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    /// `None` when the iterator yields no finite point.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut bbox: Option<BoundingBox> = None;
        for p in points.into_iter().filter(|p| p.is_finite()) {
            let b = bbox.get_or_insert(BoundingBox {
                min_x: p.x,
                min_y: p.y,
                max_x: p.x,
                max_y: p.y,
            });
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        bbox
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}
