/// Side length of the square comparison frame every stroke set is normalized into.
pub const FRAME_EXTENT: f32 = 1.0;

/// Substituted for a zero bounding-box extent (single point, or all points equal).
pub const MIN_EXTENT: f32 = 1.0;

/// Smallest tolerance the matcher will divide by.
pub const MIN_TOLERANCE: f32 = 0.01;

// === MATCHING ===
pub const DEFAULT_RESAMPLE_POINTS: usize = 16;
pub const DEFAULT_UNPAIRED_STROKE_PENALTY: f32 = 0.15;
pub const DEFAULT_FRAGMENT_JOIN_RADIUS: f32 = 0.2;
pub const DEFAULT_DENSITY_RATIO_LIMIT: f32 = 1.5;
pub const DEFAULT_DENSITY_PENALTY_EXPONENT: f32 = 2.0;
pub const DEFAULT_MIN_SAMPLE_SPACING: f32 = 0.02;

// === QUALITY ===
pub const DEFAULT_WEIGHT_SHAPE: f32 = 0.75;
pub const DEFAULT_WEIGHT_STROKE_COUNT: f32 = 0.25;

// === FUSION ===
pub const DEFAULT_FUSION_QUALITY_WEIGHT: f32 = 0.6;
pub const DEFAULT_LOW_QUALITY_THRESHOLD: u8 = 40;
pub const DEFAULT_LOW_QUALITY_CEILING: u8 = 55;
pub const DEFAULT_CONFIDENCE_HEADROOM: u8 = 25;
pub const DEFAULT_STROKE_MISMATCH_PENALTY: f32 = 10.0;
pub const DEFAULT_MAX_STROKE_MISMATCH_PENALTY: f32 = 20.0;

// === ASSIST ===
pub const DEFAULT_ASSIST_BASE_FACTOR: f32 = 0.80;
pub const DEFAULT_ASSIST_LENIENT_FACTOR: f32 = 0.90;
pub const DEFAULT_ASSIST_STRICT_FACTOR: f32 = 0.70;
pub const DEFAULT_ASSIST_GAP: f32 = 2.0;

// === BANDS ===
pub const DEFAULT_BAND_EXCELLENT: u8 = 80;
pub const DEFAULT_BAND_GOOD: u8 = 65;
pub const DEFAULT_BAND_ACCEPTABLE: u8 = 45;
pub const DEFAULT_REINFORCEMENT_CUTOFF: u8 = 50;

pub const MAX_SCORE: u8 = 100;
