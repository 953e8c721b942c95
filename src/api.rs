use crate::geometry::{InkSample, Stroke, Template};
use crate::scorer::{Attempt, AttemptOutcome, ScoreBand, Scorer};
use serde::{Deserialize, Serialize};

/// Scoring request as sent by the host application.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub strokes: Vec<Stroke>,
    pub canvas_width: f32,
    pub canvas_height: f32,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub assist_count: u32,
    #[serde(default)]
    pub card_difficulty: Option<f32>,
    #[serde(default)]
    pub ability_level: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub glyph: String,
    pub quality_score: u8,
    pub fused_score: u8,
    pub final_score: u8,
    pub band: ScoreBand,
    pub requires_reinforcement: bool,

    pub shape_similarity: f32,
    pub stroke_count_fidelity: f32,
    pub density_factor: f32,
    pub used_confidence: bool,
    pub capped_by_quality: bool,
}

impl ScoreResponse {
    pub fn from_outcome(glyph: &str, outcome: &AttemptOutcome) -> Self {
        Self {
            glyph: glyph.to_string(),
            quality_score: outcome.quality.score,
            fused_score: outcome.fusion.final_score,
            final_score: outcome.final_score,
            band: outcome.band,
            requires_reinforcement: outcome.requires_reinforcement,
            shape_similarity: outcome.quality.shape_similarity,
            stroke_count_fidelity: outcome.quality.stroke_count_fidelity,
            density_factor: outcome.quality.density_factor,
            used_confidence: outcome.fusion.used_confidence,
            capped_by_quality: outcome.fusion.capped,
        }
    }
}

/// Service: score one request against a template.
///
/// Only a malformed canvas is rejected; everything else about the ink is
/// absorbed by the pipeline's fallbacks.
pub fn score_request(
    scorer: &Scorer,
    template: &Template,
    request: ScoreRequest,
) -> Result<ScoreResponse, String> {
    let ink = InkSample::new(request.strokes, request.canvas_width, request.canvas_height)
        .map_err(|e| e.to_string())?;

    let attempt = Attempt {
        ink,
        confidence: request.confidence,
        assist_count: request.assist_count,
        card_difficulty: request.card_difficulty,
        ability_level: request.ability_level,
    };

    let outcome = scorer.evaluate(&attempt, template);
    Ok(ScoreResponse::from_outcome(&template.glyph, &outcome))
}

/// Service: same as [`score_request`] with JSON in and out.
pub fn score_request_json(
    scorer: &Scorer,
    template: &Template,
    request_json: &str,
) -> Result<String, String> {
    let request: ScoreRequest = serde_json::from_str(request_json).map_err(|e| e.to_string())?;
    let response = score_request(scorer, template, request)?;
    serde_json::to_string(&response).map_err(|e| e.to_string())
}
