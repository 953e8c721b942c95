use inkforge::config::BandThresholds;
use inkforge::scorer::bands::{band, requires_reinforcement};
use inkforge::scorer::{ScoreBand, Scorer};
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case(100, ScoreBand::Excellent)]
#[case(80, ScoreBand::Excellent)]
#[case(79, ScoreBand::Good)]
#[case(65, ScoreBand::Good)]
#[case(64, ScoreBand::Acceptable)]
#[case(45, ScoreBand::Acceptable)]
#[case(44, ScoreBand::Incorrect)]
#[case(0, ScoreBand::Incorrect)]
#[case(-5, ScoreBand::Incorrect)]
#[case(150, ScoreBand::Excellent)]
fn test_band_edges(#[case] score: i32, #[case] expected: ScoreBand) {
    assert_eq!(Scorer::default().band(score), expected);
    assert_eq!(ScoreBand::from_score(score), expected);
}

#[rstest]
#[case(49, true)]
#[case(50, false)]
#[case(47, true)] // passing band, still remediated
#[case(44, true)]
#[case(0, true)]
#[case(-5, true)]
#[case(100, false)]
#[case(150, false)]
fn test_reinforcement_cutoff(#[case] score: i32, #[case] expected: bool) {
    assert_eq!(Scorer::default().requires_reinforcement(score), expected);
}

#[test]
fn test_cutoff_and_band_edge_are_distinct() {
    let s = Scorer::default();
    let remediated_passes: Vec<i32> = (0..=100)
        .filter(|&x| s.band(x).is_passing() && s.requires_reinforcement(x))
        .collect();
    assert_eq!(remediated_passes, vec![45, 46, 47, 48, 49]);

    // Every failing score is remediated
    assert!((0..45).all(|x| s.requires_reinforcement(x)));
}

#[test]
fn test_custom_thresholds() {
    let t = BandThresholds {
        band_excellent: 90,
        band_good: 70,
        band_acceptable: 50,
        reinforcement_cutoff: 55,
    };
    assert_eq!(band(85, &t), ScoreBand::Good);
    assert_eq!(band(50, &t), ScoreBand::Acceptable);
    assert!(requires_reinforcement(54, &t));
    assert!(!requires_reinforcement(55, &t));
}

#[test]
fn test_band_names() {
    let names: Vec<String> = ScoreBand::iter().map(|b| b.to_string()).collect();
    assert_eq!(names, vec!["excellent", "good", "acceptable", "incorrect"]);

    assert_eq!(ScoreBand::from_str("ok").unwrap(), ScoreBand::Acceptable);
    assert_eq!(ScoreBand::from_str("acceptable").unwrap(), ScoreBand::Acceptable);
    assert!(ScoreBand::from_str("passable").is_err());

    let json = serde_json::to_string(&ScoreBand::Acceptable).unwrap();
    assert_eq!(json, "\"acceptable\"");
}
