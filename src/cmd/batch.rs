use crate::reports;
use clap::Args;
use inkforge::config::Config;
use inkforge::error::IfResult;
use inkforge::geometry::Template;
use inkforge::loader::{load_ink_file, resolve_template};
use inkforge::scorer::{Attempt, AttemptOutcome, Scorer};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON list of attempts; relative paths resolve against the manifest's directory
    #[arg(short, long)]
    pub manifest: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Deserialize)]
pub struct BatchEntry {
    pub id: String,
    pub template: String,
    pub ink: String,
    #[serde(default = "default_canvas")]
    pub canvas_width: f32,
    #[serde(default = "default_canvas")]
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

fn default_canvas() -> f32 {
    400.0
}

fn resolve(base: &Path, name: &str) -> String {
    let candidate: PathBuf = base.join(name);
    if candidate.exists() {
        candidate.to_string_lossy().into_owned()
    } else {
        name.to_string()
    }
}

pub fn run(args: BatchArgs, scorer: Arc<Scorer>) -> IfResult<()> {
    let manifest_path = Path::new(&args.manifest);
    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let entries: Vec<BatchEntry> = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
    info!("Loaded {} attempts from {}", entries.len(), args.manifest);

    let mut templates: HashMap<String, Template> = HashMap::new();
    let mut loaded: Vec<(String, String, Attempt)> = Vec::with_capacity(entries.len());

    for entry in entries {
        let template_key = resolve(base, &entry.template);
        if !templates.contains_key(&template_key) {
            match resolve_template(&template_key) {
                Ok(t) => {
                    templates.insert(template_key.clone(), t);
                }
                Err(e) => {
                    warn!("[{}] skipped: {}", entry.id, e);
                    continue;
                }
            }
        }

        let ink_path = base.join(&entry.ink);
        let ink = match load_ink_file(&ink_path, entry.canvas_width, entry.canvas_height) {
            Ok(ink) => ink,
            Err(e) => {
                warn!("[{}] skipped: {}", entry.id, e);
                continue;
            }
        };

        let attempt = Attempt {
            ink,
            confidence: entry.confidence,
            assist_count: entry.assist_count,
            card_difficulty: entry.card_difficulty,
            ability_level: entry.ability_level,
        };
        loaded.push((entry.id, template_key, attempt));
    }

    let jobs: Vec<(Attempt, &Template)> = loaded
        .iter()
        .map(|(_, key, attempt)| (attempt.clone(), &templates[key]))
        .collect();
    let outcomes = scorer.evaluate_batch(&jobs);

    let rows: Vec<(String, String, AttemptOutcome)> = loaded
        .iter()
        .zip(jobs.iter())
        .zip(outcomes)
        .map(|(((id, _, _), (_, template)), outcome)| (id.clone(), template.glyph.clone(), outcome))
        .collect();

    if args.json {
        let json: Vec<_> = rows
            .iter()
            .map(|(id, glyph, outcome)| {
                serde_json::json!({ "id": id, "glyph": glyph, "outcome": outcome })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        reports::print_batch(&rows);
        reports::print_band_summary(rows.iter().map(|(_, _, o)| o));
    }
    Ok(())
}
