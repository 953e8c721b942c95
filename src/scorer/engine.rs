use super::types::{Attempt, AttemptOutcome};
use super::{assist, bands, fusion, quality, Scorer};
use crate::geometry::Template;
use rayon::prelude::*;

/// Full pipeline for one attempt: quality, fusion, assist penalty, band.
pub fn evaluate(scorer: &Scorer, attempt: &Attempt, template: &Template) -> AttemptOutcome {
    let cfg = &scorer.config;

    let quality = quality::score(&attempt.ink, template, &cfg.quality, &cfg.matching);

    let fusion = fusion::fuse(
        attempt.confidence,
        quality.score,
        quality.ink_strokes,
        quality.expected_strokes,
        &cfg.fusion,
    );

    let final_score = assist::apply_assist_penalty(
        fusion.final_score as i32,
        attempt.assist_count,
        attempt.card_difficulty,
        attempt.ability_level,
        cfg.bands.band_acceptable,
        &cfg.assist,
    );

    AttemptOutcome {
        quality,
        fusion,
        final_score,
        band: bands::band(final_score as i32, &cfg.bands),
        requires_reinforcement: bands::requires_reinforcement(final_score as i32, &cfg.bands),
    }
}

/// Evaluates independent attempts in parallel. Output order matches input order.
pub fn evaluate_batch(scorer: &Scorer, jobs: &[(Attempt, &Template)]) -> Vec<AttemptOutcome> {
    jobs.par_iter()
        .map(|(attempt, template)| evaluate(scorer, attempt, template))
        .collect()
}
