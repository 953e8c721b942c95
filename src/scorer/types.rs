use super::bands::ScoreBand;
use crate::geometry::InkSample;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    // Final shape similarity, after the scribble penalty
    pub similarity: f32,
    // Mean pair similarity minus unpaired-stroke penalties
    pub raw_similarity: f32,
    pub density_factor: f32,
    // Ink path length over template path length, both normalized
    pub path_ratio: f32,

    pub paired: usize,
    pub unpaired: usize,
    pub fragments_joined: usize,
    pub stroke_similarities: Vec<f32>,
}

/// Purely geometric grade of an attempt.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityResult {
    pub score: u8,

    // Diagnostics (explainability only)
    pub shape_similarity: f32,
    pub stroke_count_fidelity: f32,
    pub density_factor: f32,
    pub ink_strokes: usize,
    pub expected_strokes: usize,
    pub matching: Option<MatchReport>,
}

impl QualityResult {
    /// Result for a blank canvas.
    pub fn empty(expected_strokes: usize) -> Self {
        Self {
            score: 0,
            density_factor: 1.0,
            expected_strokes,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FusionResult {
    pub final_score: u8,
    pub used_confidence: bool,
    pub capped: bool,
    pub stroke_penalty: u8,
}

/// Everything the surrounding application knows about one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub ink: InkSample,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub assist_count: u32,
    #[serde(default)]
    pub card_difficulty: Option<f32>,
    #[serde(default)]
    pub ability_level: Option<f32>,
}

impl Attempt {
    pub fn new(ink: InkSample) -> Self {
        Self {
            ink,
            confidence: None,
            assist_count: 0,
            card_difficulty: None,
            ability_level: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_assists(mut self, assist_count: u32) -> Self {
        self.assist_count = assist_count;
        self
    }

    pub fn with_difficulty(mut self, card_difficulty: f32, ability_level: f32) -> Self {
        self.card_difficulty = Some(card_difficulty);
        self.ability_level = Some(ability_level);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub quality: QualityResult,
    pub fusion: FusionResult,
    // After the assist penalty; this is what gets banded
    pub final_score: u8,
    pub band: ScoreBand,
    pub requires_reinforcement: bool,
}
