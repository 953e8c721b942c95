pub mod assist;
pub mod bands;
pub mod engine;
pub mod fusion;
pub mod matcher;
pub mod metrics;
pub mod normalize;
pub mod quality;
pub mod types;

pub use self::bands::ScoreBand;
pub use self::types::{Attempt, AttemptOutcome, FusionResult, MatchReport, QualityResult};
use crate::config::Config;
use crate::error::IfResult;
use crate::geometry::{InkSample, Template};

/// Stateless scoring facade bound to one set of tuning constants.
///
/// Cheap to clone and safe to share across threads; no call mutates it.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub config: Config,
}

impl Scorer {
    pub fn new(config: Config) -> IfResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn score(&self, ink: &InkSample, template: &Template) -> QualityResult {
        quality::score(ink, template, &self.config.quality, &self.config.matching)
    }

    pub fn fuse(
        &self,
        confidence: Option<f32>,
        quality_score: u8,
        stroke_count: usize,
        expected_stroke_count: usize,
    ) -> FusionResult {
        fusion::fuse(
            confidence,
            quality_score,
            stroke_count,
            expected_stroke_count,
            &self.config.fusion,
        )
    }

    pub fn apply_assist_penalty(
        &self,
        score: i32,
        assist_count: u32,
        card_difficulty: Option<f32>,
        ability_level: Option<f32>,
    ) -> u8 {
        assist::apply_assist_penalty(
            score,
            assist_count,
            card_difficulty,
            ability_level,
            self.config.bands.band_acceptable,
            &self.config.assist,
        )
    }

    pub fn band(&self, score: i32) -> ScoreBand {
        bands::band(score, &self.config.bands)
    }

    pub fn requires_reinforcement(&self, score: i32) -> bool {
        bands::requires_reinforcement(score, &self.config.bands)
    }

    pub fn evaluate(&self, attempt: &Attempt, template: &Template) -> AttemptOutcome {
        engine::evaluate(self, attempt, template)
    }

    pub fn evaluate_batch(&self, jobs: &[(Attempt, &Template)]) -> Vec<AttemptOutcome> {
        engine::evaluate_batch(self, jobs)
    }
}
