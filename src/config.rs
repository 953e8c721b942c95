use crate::consts::*;
use crate::error::{IfResult, InkForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub quality: QualityWeights,
    #[command(flatten)]
    pub matching: MatchParams,
    #[command(flatten)]
    pub fusion: FusionParams,
    #[command(flatten)]
    pub assist: AssistParams,
    #[command(flatten)]
    pub bands: BandThresholds,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityWeights {
    // Shape correctness must weigh at least as much as stroke count.
    #[arg(long, default_value_t = DEFAULT_WEIGHT_SHAPE)]
    pub weight_shape: f32,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_STROKE_COUNT)]
    pub weight_stroke_count: f32,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            weight_shape: DEFAULT_WEIGHT_SHAPE,
            weight_stroke_count: DEFAULT_WEIGHT_STROKE_COUNT,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParams {
    #[arg(long, default_value_t = DEFAULT_RESAMPLE_POINTS)]
    pub resample_points: usize,

    // Subtracted from the mean similarity once per stroke left without a partner
    #[arg(long, default_value_t = DEFAULT_UNPAIRED_STROKE_PENALTY)]
    pub unpaired_stroke_penalty: f32,

    // Frame units; a leftover ink stroke starting this close to a paired
    // stroke's end is treated as its continuation.
    #[arg(long, default_value_t = DEFAULT_FRAGMENT_JOIN_RADIUS)]
    pub fragment_join_radius: f32,

    // === SCRIBBLE REJECTION ===
    #[arg(long, default_value_t = DEFAULT_DENSITY_RATIO_LIMIT)]
    pub density_ratio_limit: f32,
    #[arg(long, default_value_t = DEFAULT_DENSITY_PENALTY_EXPONENT)]
    pub density_penalty_exponent: f32,
    // Frame units; path length ignores wobble finer than this
    #[arg(long, default_value_t = DEFAULT_MIN_SAMPLE_SPACING)]
    pub min_sample_spacing: f32,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            resample_points: DEFAULT_RESAMPLE_POINTS,
            unpaired_stroke_penalty: DEFAULT_UNPAIRED_STROKE_PENALTY,
            fragment_join_radius: DEFAULT_FRAGMENT_JOIN_RADIUS,
            density_ratio_limit: DEFAULT_DENSITY_RATIO_LIMIT,
            density_penalty_exponent: DEFAULT_DENSITY_PENALTY_EXPONENT,
            min_sample_spacing: DEFAULT_MIN_SAMPLE_SPACING,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionParams {
    // Share of the blend taken by the quality score; the rest is confidence
    #[arg(long, default_value_t = DEFAULT_FUSION_QUALITY_WEIGHT)]
    pub fusion_quality_weight: f32,

    #[arg(long, default_value_t = DEFAULT_LOW_QUALITY_THRESHOLD)]
    pub low_quality_threshold: u8,
    #[arg(long, default_value_t = DEFAULT_LOW_QUALITY_CEILING)]
    pub low_quality_ceiling: u8,
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_HEADROOM)]
    pub confidence_headroom: u8,

    // Points per 100% stroke-count mismatch
    #[arg(long, default_value_t = DEFAULT_STROKE_MISMATCH_PENALTY)]
    pub stroke_mismatch_penalty: f32,
    #[arg(long, default_value_t = DEFAULT_MAX_STROKE_MISMATCH_PENALTY)]
    pub max_stroke_mismatch_penalty: f32,
}

impl Default for FusionParams {
    fn default() -> Self {
        Self {
            fusion_quality_weight: DEFAULT_FUSION_QUALITY_WEIGHT,
            low_quality_threshold: DEFAULT_LOW_QUALITY_THRESHOLD,
            low_quality_ceiling: DEFAULT_LOW_QUALITY_CEILING,
            confidence_headroom: DEFAULT_CONFIDENCE_HEADROOM,
            stroke_mismatch_penalty: DEFAULT_STROKE_MISMATCH_PENALTY,
            max_stroke_mismatch_penalty: DEFAULT_MAX_STROKE_MISMATCH_PENALTY,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistParams {
    #[arg(long, default_value_t = DEFAULT_ASSIST_BASE_FACTOR)]
    pub assist_base_factor: f32,
    // Card much harder than the learner
    #[arg(long, default_value_t = DEFAULT_ASSIST_LENIENT_FACTOR)]
    pub assist_lenient_factor: f32,
    // Card much easier than the learner
    #[arg(long, default_value_t = DEFAULT_ASSIST_STRICT_FACTOR)]
    pub assist_strict_factor: f32,
    #[arg(long, default_value_t = DEFAULT_ASSIST_GAP)]
    pub assist_gap: f32,
}

impl Default for AssistParams {
    fn default() -> Self {
        Self {
            assist_base_factor: DEFAULT_ASSIST_BASE_FACTOR,
            assist_lenient_factor: DEFAULT_ASSIST_LENIENT_FACTOR,
            assist_strict_factor: DEFAULT_ASSIST_STRICT_FACTOR,
            assist_gap: DEFAULT_ASSIST_GAP,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    #[arg(long, default_value_t = DEFAULT_BAND_EXCELLENT)]
    pub band_excellent: u8,
    #[arg(long, default_value_t = DEFAULT_BAND_GOOD)]
    pub band_good: u8,
    // Also the "OK" floor protected by the assist penalty
    #[arg(long, default_value_t = DEFAULT_BAND_ACCEPTABLE)]
    pub band_acceptable: u8,
    // Above the acceptable edge: low passing scores are still remediated
    #[arg(long, default_value_t = DEFAULT_REINFORCEMENT_CUTOFF)]
    pub reinforcement_cutoff: u8,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            band_excellent: DEFAULT_BAND_EXCELLENT,
            band_good: DEFAULT_BAND_GOOD,
            band_acceptable: DEFAULT_BAND_ACCEPTABLE,
            reinforcement_cutoff: DEFAULT_REINFORCEMENT_CUTOFF,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IfResult<Self> {
        let path = path.as_ref();
        info!("Loading scoring config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects weight sets the pipeline cannot honour.
    pub fn validate(&self) -> IfResult<()> {
        let q = &self.quality;
        if q.weight_shape < 0.0 || q.weight_stroke_count < 0.0 {
            return Err(InkForgeError::Config(
                "quality weights must be non-negative".to_string(),
            ));
        }
        if (q.weight_shape + q.weight_stroke_count - 1.0).abs() > 1e-3 {
            return Err(InkForgeError::Config(format!(
                "weight_shape + weight_stroke_count must equal 1.0 (got {:.3})",
                q.weight_shape + q.weight_stroke_count
            )));
        }
        if q.weight_shape < q.weight_stroke_count {
            return Err(InkForgeError::Config(
                "weight_shape must be >= weight_stroke_count".to_string(),
            ));
        }

        let m = &self.matching;
        if m.resample_points < 2 {
            return Err(InkForgeError::Config(
                "resample_points must be at least 2".to_string(),
            ));
        }
        if m.density_ratio_limit < 1.0 {
            return Err(InkForgeError::Config(
                "density_ratio_limit must be >= 1.0".to_string(),
            ));
        }
        if !(m.min_sample_spacing >= 0.0 && m.min_sample_spacing < FRAME_EXTENT) {
            return Err(InkForgeError::Config(
                "min_sample_spacing must lie in [0, 1)".to_string(),
            ));
        }

        let f = &self.fusion;
        if !(0.0..=1.0).contains(&f.fusion_quality_weight) {
            return Err(InkForgeError::Config(
                "fusion_quality_weight must lie in [0, 1]".to_string(),
            ));
        }

        let a = &self.assist;
        for (name, factor) in [
            ("assist_base_factor", a.assist_base_factor),
            ("assist_lenient_factor", a.assist_lenient_factor),
            ("assist_strict_factor", a.assist_strict_factor),
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(InkForgeError::Config(format!(
                    "{} must lie in (0, 1] (got {})",
                    name, factor
                )));
            }
        }

        let b = &self.bands;
        if !(b.band_excellent >= b.band_good
            && b.band_good >= b.band_acceptable
            && b.band_excellent <= MAX_SCORE)
        {
            return Err(InkForgeError::Config(
                "band thresholds must satisfy excellent >= good >= acceptable".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlays arguments that were typed on the command line onto a file-loaded config.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(quality, weight_shape);
        update_if_present!(quality, weight_stroke_count);

        update_if_present!(matching, resample_points);
        update_if_present!(matching, unpaired_stroke_penalty);
        update_if_present!(matching, fragment_join_radius);
        update_if_present!(matching, density_ratio_limit);
        update_if_present!(matching, density_penalty_exponent);
        update_if_present!(matching, min_sample_spacing);

        update_if_present!(fusion, fusion_quality_weight);
        update_if_present!(fusion, low_quality_threshold);
        update_if_present!(fusion, low_quality_ceiling);
        update_if_present!(fusion, confidence_headroom);
        update_if_present!(fusion, stroke_mismatch_penalty);
        update_if_present!(fusion, max_stroke_mismatch_penalty);

        update_if_present!(assist, assist_base_factor);
        update_if_present!(assist, assist_lenient_factor);
        update_if_present!(assist, assist_strict_factor);
        update_if_present!(assist, assist_gap);

        update_if_present!(bands, band_excellent);
        update_if_present!(bands, band_good);
        update_if_present!(bands, band_acceptable);
        update_if_present!(bands, reinforcement_cutoff);
    }
}
