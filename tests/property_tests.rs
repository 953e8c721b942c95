mod common;

use common::*;
use inkforge::config::{AssistParams, FusionParams};
use inkforge::geometry::{InkSample, Point, Stroke};
use inkforge::glyphs::BuiltinGlyph;
use inkforge::scorer::assist::apply_assist_penalty;
use inkforge::scorer::fusion::fuse;
use inkforge::scorer::{ScoreBand, Scorer};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_point()(
        x in -5000.0..5000.0f32,
        y in -5000.0..5000.0f32,
        poison in 0u8..20
    ) -> Point {
        // Occasionally feed garbage coordinates
        match poison {
            0 => Point::new(f32::NAN, y),
            1 => Point::new(x, f32::INFINITY),
            _ => Point::new(x, y),
        }
    }
}

prop_compose! {
    fn arb_ink()(
        strokes in prop::collection::vec(prop::collection::vec(arb_point(), 0..30), 0..6)
    ) -> InkSample {
        InkSample::new(strokes.into_iter().map(Stroke::new).collect(), CANVAS, CANVAS).unwrap()
    }
}

fn arb_glyph() -> impl Strategy<Value = BuiltinGlyph> {
    prop_oneof![
        Just(BuiltinGlyph::One),
        Just(BuiltinGlyph::Two),
        Just(BuiltinGlyph::Three),
        Just(BuiltinGlyph::Ten),
        Just(BuiltinGlyph::Mouth),
        Just(BuiltinGlyph::Person),
        Just(BuiltinGlyph::Nail),
    ]
}

fn arb_confidence() -> impl Strategy<Value = Option<f32>> {
    prop_oneof![
        Just(None),
        Just(Some(f32::NAN)),
        (-2.0..3.0f32).prop_map(Some),
    ]
}

// 十 with the vertical stroke drifted `offset` units right of centre.
fn drifted_ten(offset: u32) -> InkSample {
    let x = 50.0 + offset as f32;
    InkBuilder::new()
        .line(&[(0.0, 50.0), (100.0, 50.0)])
        .line(&[(x, 0.0), (x, 100.0)])
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn quality_is_total(ink in arb_ink(), glyph in arb_glyph()) {
        let r = Scorer::default().score(&ink, &glyph.template());
        prop_assert!(r.score <= 100);
        prop_assert!(r.shape_similarity.is_finite());
        prop_assert!((0.0..=1.0).contains(&r.shape_similarity));
        prop_assert!((0.0..=1.0).contains(&r.density_factor));
    }

    #[test]
    fn pipeline_is_total(
        ink in arb_ink(),
        glyph in arb_glyph(),
        confidence in arb_confidence(),
        assists in 0u32..8,
        difficulty in prop::option::of(-10.0..10.0f32),
        ability in prop::option::of(-10.0..10.0f32),
    ) {
        let mut attempt = inkforge::scorer::Attempt::new(ink).with_assists(assists);
        attempt.confidence = confidence;
        attempt.card_difficulty = difficulty;
        attempt.ability_level = ability;

        let s = Scorer::default();
        let o = s.evaluate(&attempt, &glyph.template());
        prop_assert!(o.final_score <= 100);
        prop_assert_eq!(o.band, s.band(o.final_score as i32));
        prop_assert_eq!(o.requires_reinforcement, s.requires_reinforcement(o.final_score as i32));
    }

    #[test]
    fn drift_never_improves_score(a in 0u32..40, b in 0u32..40) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let s = Scorer::default();
        let t = BuiltinGlyph::Ten.template();
        let near_score = s.score(&drifted_ten(near), &t).score;
        let far_score = s.score(&drifted_ten(far), &t).score;
        prop_assert!(
            near_score >= far_score,
            "offset {} scored {}, offset {} scored {}",
            near, near_score, far, far_score
        );
    }

    #[test]
    fn fallback_is_identity(q in 0u8..=100, drawn in 0usize..10, expected in 0usize..10) {
        let r = fuse(None, q, drawn, expected, &FusionParams::default());
        prop_assert_eq!(r.final_score, q);
    }

    #[test]
    fn fusion_respects_cap(q in 0u8..40, c in -1.0..2.0f32, drawn in 0usize..10, expected in 0usize..10) {
        let r = fuse(Some(c), q, drawn, expected, &FusionParams::default());
        prop_assert!(r.final_score <= 55);
    }

    #[test]
    fn fusion_monotonic_in_quality(
        q1 in 0u8..=100,
        q2 in 0u8..=100,
        c in 0.0..=1.0f32,
        drawn in 0usize..10,
        expected in 1usize..6,
    ) {
        let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        let p = FusionParams::default();
        let f_lo = fuse(Some(c), lo, drawn, expected, &p).final_score;
        let f_hi = fuse(Some(c), hi, drawn, expected, &p).final_score;
        prop_assert!(f_lo <= f_hi);
    }

    #[test]
    fn mismatch_never_helps(
        q in 0u8..=100,
        c in 0.0..=1.0f32,
        expected in 1usize..6,
        d1 in 0usize..6,
        d2 in 0usize..6,
    ) {
        let (small, large) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let p = FusionParams::default();
        let close = fuse(Some(c), q, expected + small, expected, &p).final_score;
        let far = fuse(Some(c), q, expected + large, expected, &p).final_score;
        prop_assert!(far <= close);
    }

    #[test]
    fn assist_stays_in_range(
        score in -1000i32..1000,
        assists in 0u32..50,
        difficulty in prop::option::of(-10.0..10.0f32),
        ability in prop::option::of(-10.0..10.0f32),
    ) {
        let out = apply_assist_penalty(score, assists, difficulty, ability, 45, &AssistParams::default());
        let clamped = score.clamp(0, 100);
        prop_assert!(out <= 100);
        prop_assert!(out as i32 <= clamped);
        if clamped >= 45 {
            prop_assert!(out >= 45);
        }
    }

    #[test]
    fn band_is_total(score in any::<i32>()) {
        let b = ScoreBand::from_score(score);
        prop_assert_eq!(b, ScoreBand::from_score(score.clamp(0, 100)));
    }
}
