use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use inkforge::scorer::{AttemptOutcome, ScoreBand};
use std::collections::HashMap;
use strum::IntoEnumIterator;

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::Acceptable => Color::Yellow,
        ScoreBand::Incorrect => Color::Red,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_outcome(glyph: &str, o: &AttemptOutcome) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Stage").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let q = &o.quality;
    table.add_row(vec![Cell::new("Glyph"), Cell::new(glyph)]);
    table.add_row(vec![
        Cell::new("Strokes (ink / expected)"),
        Cell::new(format!("{} / {}", q.ink_strokes, q.expected_strokes)),
    ]);
    table.add_row(vec![
        Cell::new("Shape similarity"),
        Cell::new(format!("{:.3}", q.shape_similarity)),
    ]);
    table.add_row(vec![
        Cell::new("Stroke fidelity"),
        Cell::new(format!("{:.3}", q.stroke_count_fidelity)),
    ]);
    table.add_row(vec![
        Cell::new("Density factor"),
        Cell::new(format!("{:.3}", q.density_factor)),
    ]);
    if let Some(m) = &q.matching {
        table.add_row(vec![
            Cell::new("Paired / unpaired / joined"),
            Cell::new(format!(
                "{} / {} / {}",
                m.paired, m.unpaired, m.fragments_joined
            )),
        ]);
    }
    table.add_row(vec![
        Cell::new("Quality score"),
        Cell::new(q.score).fg(Color::Cyan),
    ]);
    let fused_note = match (o.fusion.used_confidence, o.fusion.capped) {
        (false, _) => " (no confidence)",
        (true, true) => " (capped)",
        (true, false) => "",
    };
    table.add_row(vec![
        Cell::new("Fused score"),
        Cell::new(format!("{}{}", o.fusion.final_score, fused_note)),
    ]);
    table.add_row(vec![
        Cell::new("Final score").add_attribute(Attribute::Bold),
        Cell::new(o.final_score).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Band"),
        Cell::new(o.band).fg(band_color(o.band)),
    ]);
    table.add_row(vec![
        Cell::new("Needs reinforcement"),
        Cell::new(if o.requires_reinforcement { "yes" } else { "no" }),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

pub fn print_batch(rows: &[(String, String, AttemptOutcome)]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Attempt").add_attribute(Attribute::Bold),
        Cell::new("Glyph"),
        Cell::new("Strk"),
        Cell::new("Shape"),
        Cell::new("Dens"),
        Cell::new("Qual").fg(Color::Cyan),
        Cell::new("Fused"),
        Cell::new("Final").add_attribute(Attribute::Bold),
        Cell::new("Band"),
        Cell::new("Reinf"),
    ]);

    for i in 2..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (id, glyph, o) in rows {
        let q = &o.quality;
        table.add_row(vec![
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(glyph),
            Cell::new(format!("{}/{}", q.ink_strokes, q.expected_strokes)),
            Cell::new(format!("{:.2}", q.shape_similarity)),
            Cell::new(format!("{:.2}", q.density_factor)),
            Cell::new(q.score).fg(Color::Cyan),
            Cell::new(o.fusion.final_score),
            Cell::new(o.final_score).add_attribute(Attribute::Bold),
            Cell::new(o.band).fg(band_color(o.band)),
            Cell::new(if o.requires_reinforcement { "yes" } else { "" }),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_band_summary<'a, I>(outcomes: I)
where
    I: IntoIterator<Item = &'a AttemptOutcome>,
{
    let mut counts: HashMap<ScoreBand, usize> = HashMap::new();
    let mut total = 0usize;
    let mut reinforce = 0usize;
    let mut score_sum = 0u64;
    for o in outcomes {
        *counts.entry(o.band).or_default() += 1;
        total += 1;
        score_sum += o.final_score as u64;
        if o.requires_reinforcement {
            reinforce += 1;
        }
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Band").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share"),
    ]);
    for band in ScoreBand::iter() {
        let n = counts.get(&band).copied().unwrap_or(0);
        let share = if total > 0 {
            100.0 * n as f32 / total as f32
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(band).fg(band_color(band)),
            Cell::new(n),
            Cell::new(format!("{:.0}%", share)),
        ]);
    }
    println!("\n{}", table);

    let mean = if total > 0 {
        score_sum as f32 / total as f32
    } else {
        0.0
    };
    println!(
        "Attempts: {}  Mean final score: {:.1}  Reinforcement queued: {}",
        total, mean, reinforce
    );
}
