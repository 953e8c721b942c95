use crate::reports;
use clap::Args;
use fastrand::Rng;
use inkforge::config::Config;
use inkforge::error::IfResult;
use inkforge::loader::resolve_template;
use inkforge::scorer::{Attempt, AttemptOutcome, Scorer};
use inkforge::synth::{synthesize_attempt, SynthParams};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Template JSON file or built-in glyph name
    #[arg(short, long, default_value = "ten")]
    pub glyph: String,

    #[arg(short = 'n', long, default_value_t = 20)]
    pub count: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Per-point noise as a fraction of glyph size
    #[arg(long, default_value_t = 0.03)]
    pub jitter: f32,

    #[arg(long, default_value_t = false)]
    pub split: bool,

    #[arg(long, default_value_t = false)]
    pub reverse: bool,

    #[arg(long, default_value_t = 0)]
    pub scribble_passes: usize,

    #[arg(long)]
    pub confidence: Option<f32>,
}

pub fn run(args: SimulateArgs, scorer: Arc<Scorer>) -> IfResult<()> {
    let template = resolve_template(&args.glyph)?;
    let params = SynthParams {
        jitter: args.jitter,
        reverse: args.reverse,
        split: args.split,
        scribble_passes: args.scribble_passes,
        ..Default::default()
    };

    let mut rng = match args.seed {
        Some(s) => Rng::with_seed(s),
        None => Rng::new(),
    };

    info!(
        "Synthesizing {} attempts of '{}' (jitter {:.3})",
        args.count, template.glyph, args.jitter
    );

    let mut jobs = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let ink = synthesize_attempt(&template, &params, &mut rng)?;
        let mut attempt = Attempt::new(ink);
        attempt.confidence = args.confidence;
        jobs.push((attempt, &template));
    }

    let outcomes = scorer.evaluate_batch(&jobs);
    let rows: Vec<(String, String, AttemptOutcome)> = outcomes
        .into_iter()
        .enumerate()
        .map(|(i, o)| (format!("#{}", i + 1), template.glyph.clone(), o))
        .collect();

    reports::print_batch(&rows);
    reports::print_band_summary(rows.iter().map(|(_, _, o)| o));
    Ok(())
}
