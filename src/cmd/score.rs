use crate::reports;
use clap::Args;
use inkforge::config::Config;
use inkforge::error::IfResult;
use inkforge::loader::{load_ink_file, resolve_template};
use inkforge::scorer::{Attempt, Scorer};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Template JSON file or built-in glyph name (e.g. `ten`, `口`)
    #[arg(short, long)]
    pub template: String,

    /// Ink capture: `.json` InkSample or `stroke,x,y` CSV
    #[arg(short, long)]
    pub ink: String,

    #[arg(long, default_value_t = 400.0)]
    pub canvas_width: f32,
    #[arg(long, default_value_t = 400.0)]
    pub canvas_height: f32,

    /// Recognizer confidence in [0, 1]; omit when the recognizer is unavailable
    #[arg(long)]
    pub confidence: Option<f32>,

    #[arg(long, default_value_t = 0)]
    pub assists: u32,

    #[arg(long, requires = "ability")]
    pub difficulty: Option<f32>,
    #[arg(long, requires = "difficulty")]
    pub ability: Option<f32>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) -> IfResult<()> {
    let template = resolve_template(&args.template)?;
    let ink = load_ink_file(&args.ink, args.canvas_width, args.canvas_height)?;
    info!(
        "Scoring {} strokes against '{}'",
        ink.stroke_count(),
        template.glyph
    );

    let mut attempt = Attempt::new(ink).with_assists(args.assists);
    attempt.confidence = args.confidence;
    attempt.card_difficulty = args.difficulty;
    attempt.ability_level = args.ability;

    let outcome = scorer.evaluate(&attempt, &template);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        reports::print_outcome(&template.glyph, &outcome);
    }
    Ok(())
}
