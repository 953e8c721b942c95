use inkforge::config::AssistParams;
use inkforge::scorer::assist::{apply_assist_penalty, reduction_factor};
use inkforge::scorer::Scorer;
use rstest::rstest;

const OK: u8 = 45;

// --- BASE MODE ---
#[rstest]
#[case(72, 58)] // 57.6 rounds to 58
#[case(100, 80)]
#[case(57, 46)] // 45.6 stays above the floor
#[case(56, 45)] // 44.8 would demote a pass; floored
#[case(50, 45)] // 40.0 floored
#[case(45, 45)]
#[case(44, 35)] // already failing, no floor
#[case(10, 8)]
#[case(0, 0)]
fn test_single_assist_base_mode(#[case] score: i32, #[case] expected: u8) {
    let s = Scorer::default();
    assert_eq!(s.apply_assist_penalty(score, 1, None, None), expected);
}

#[test]
fn test_zero_assists_leave_score_alone() {
    let s = Scorer::default();
    for score in [0, 12, 45, 72, 100] {
        assert_eq!(
            s.apply_assist_penalty(score, 0, Some(9.0), Some(0.0)),
            score as u8
        );
    }
}

#[test]
fn test_assists_compound() {
    let s = Scorer::default();
    // 100 * 0.8^2 = 64
    assert_eq!(s.apply_assist_penalty(100, 2, None, None), 64);
    // 100 * 0.8^3 = 51.2
    assert_eq!(s.apply_assist_penalty(100, 3, None, None), 51);
    // Many assists still cannot push a passing score under the floor
    assert_eq!(s.apply_assist_penalty(100, 40, None, None), OK);
    // A failing score keeps shrinking
    assert_eq!(s.apply_assist_penalty(40, 3, None, None), 20);
}

#[test]
fn test_floor_never_demotes_a_pass() {
    let s = Scorer::default();
    for score in OK as i32..=100 {
        for assists in 1..6 {
            let out = s.apply_assist_penalty(score, assists, None, None);
            assert!(out >= OK, "{} with {} assists fell to {}", score, assists, out);
            assert!(out as i32 <= score);
        }
    }
}

// --- DIFFICULTY CONTEXT ---
#[rstest]
#[case(6.0, 2.0, 0.90)] // card far harder than learner: lenient
#[case(2.0, 6.0, 0.70)] // card far easier than learner: strict
#[case(3.0, 2.0, 0.80)]
#[case(4.0, 2.0, 0.80)] // gap of exactly 2 is not beyond the band
#[case(0.0, 2.0, 0.80)]
fn test_factor_follows_difficulty_gap(
    #[case] difficulty: f32,
    #[case] ability: f32,
    #[case] factor: f32,
) {
    let p = AssistParams::default();
    assert_eq!(reduction_factor(Some(difficulty), Some(ability), &p), factor);
}

#[rstest]
#[case(Some(6.0), Some(2.0), 90)]
#[case(Some(2.0), Some(6.0), 70)]
#[case(Some(2.0), Some(2.0), 80)]
#[case(None, Some(2.0), 80)]
#[case(Some(6.0), None, 80)]
fn test_difficulty_scales_penalty(
    #[case] difficulty: Option<f32>,
    #[case] ability: Option<f32>,
    #[case] expected: u8,
) {
    let s = Scorer::default();
    assert_eq!(s.apply_assist_penalty(100, 1, difficulty, ability), expected);
}

#[test]
fn test_strict_mode_still_respects_floor() {
    // 60 * 0.7 = 42 would demote a pass
    let s = Scorer::default();
    assert_eq!(s.apply_assist_penalty(60, 1, Some(0.0), Some(5.0)), OK);
}

#[rstest]
#[case(-30, 0)]
#[case(250, 80)]
#[case(i32::MAX, 80)]
#[case(i32::MIN, 0)]
fn test_out_of_range_input_is_clamped(#[case] score: i32, #[case] expected: u8) {
    let p = AssistParams::default();
    assert_eq!(apply_assist_penalty(score, 1, None, None, OK, &p), expected);
}
