use crate::geometry::{Stroke, Template};
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

const DEFAULT_TOLERANCE: f32 = 0.3;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum BuiltinGlyph {
    One,
    Two,
    Three,
    Ten,
    Mouth,
    Person,
    Nail,
}

impl BuiltinGlyph {
    pub fn character(&self) -> &'static str {
        match self {
            Self::One => "一",
            Self::Two => "二",
            Self::Three => "三",
            Self::Ten => "十",
            Self::Mouth => "口",
            Self::Person => "人",
            Self::Nail => "丁",
        }
    }

    // Unit-space reference strokes, y grows downward, in standard stroke order.
    fn coords(&self) -> Vec<Vec<(f32, f32)>> {
        match self {
            Self::One => vec![vec![(0.1, 0.5), (0.9, 0.5)]],
            Self::Two => vec![
                vec![(0.25, 0.3), (0.75, 0.3)],
                vec![(0.1, 0.7), (0.9, 0.7)],
            ],
            Self::Three => vec![
                vec![(0.2, 0.2), (0.8, 0.2)],
                vec![(0.3, 0.5), (0.7, 0.5)],
                vec![(0.1, 0.8), (0.9, 0.8)],
            ],
            Self::Ten => vec![
                vec![(0.1, 0.45), (0.9, 0.45)],
                vec![(0.5, 0.1), (0.5, 0.9)],
            ],
            // Left side, then the top-right corner, then the closing base
            Self::Mouth => vec![
                vec![(0.2, 0.2), (0.2, 0.8)],
                vec![(0.2, 0.2), (0.8, 0.2), (0.8, 0.8)],
                vec![(0.2, 0.8), (0.8, 0.8)],
            ],
            Self::Person => vec![
                vec![(0.5, 0.1), (0.45, 0.5), (0.15, 0.9)],
                vec![(0.45, 0.45), (0.85, 0.9)],
            ],
            // Hooked vertical
            Self::Nail => vec![
                vec![(0.1, 0.2), (0.9, 0.2)],
                vec![(0.5, 0.2), (0.5, 0.85), (0.4, 0.8)],
            ],
        }
    }

    pub fn template(&self) -> Template {
        let strokes: Vec<Stroke> = self
            .coords()
            .iter()
            .map(|c| Stroke::from_coords(c))
            .collect();
        Template {
            glyph: self.character().to_string(),
            expected_stroke_count: strokes.len(),
            strokes,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Accepts either the enum name (`ten`) or the character itself (`十`).
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::from_str(&name.to_lowercase())
            .ok()
            .or_else(|| Self::iter().find(|g| g.character() == name))
    }
}

pub fn get_all_glyphs() -> HashMap<BuiltinGlyph, Template> {
    BuiltinGlyph::iter().map(|g| (g, g.template())).collect()
}
