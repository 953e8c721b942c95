use crate::error::{IfResult, InkForgeError};
use crate::geometry::{InkSample, Point, Stroke, Template};
use crate::glyphs::BuiltinGlyph;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Parses `stroke,x,y` rows into an ink sample.
///
/// Rows are grouped by stroke id in order of first appearance; points keep file
/// order within a stroke. Rows that cannot be parsed are skipped and logged.
pub fn read_ink_csv<R: Read>(reader: R, width: f32, height: f32) -> IfResult<InkSample> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut order: HashMap<String, usize> = HashMap::new();
    let mut strokes: Vec<Stroke> = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 3 {
            skipped += 1;
            continue;
        }
        let (x, y) = match (rec[1].parse::<f32>(), rec[2].parse::<f32>()) {
            (Ok(x), Ok(y)) if x.is_finite() && y.is_finite() => (x, y),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let id = rec[0].to_string();
        let idx = *order.entry(id).or_insert_with(|| {
            strokes.push(Stroke::default());
            strokes.len() - 1
        });
        strokes[idx].points.push(Point::new(x, y));
    }

    if skipped > 0 {
        warn!("Skipped {} invalid ink rows", skipped);
    }
    debug!("Parsed {} strokes from ink CSV", strokes.len());

    InkSample::new(strokes, width, height)
}

pub fn load_ink_csv<P: AsRef<Path>>(path: P, width: f32, height: f32) -> IfResult<InkSample> {
    let file = File::open(path.as_ref())?;
    read_ink_csv(file, width, height)
}

pub fn load_ink_json<P: AsRef<Path>>(path: P) -> IfResult<InkSample> {
    let file = File::open(path.as_ref())?;
    let ink: InkSample = serde_json::from_reader(file)?;
    // Re-run canvas validation; deserialization bypasses the constructor
    InkSample::new(ink.strokes, ink.width, ink.height)
}

/// Loads ink by extension: `.json` carries its own canvas, anything else is CSV.
pub fn load_ink_file<P: AsRef<Path>>(path: P, width: f32, height: f32) -> IfResult<InkSample> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_ink_json(path),
        _ => load_ink_csv(path, width, height),
    }
}

/// Resolves a template argument: an existing JSON file, else a built-in glyph name.
pub fn resolve_template(name: &str) -> IfResult<Template> {
    let path = Path::new(name);
    if path.exists() {
        return Template::load_from_file(path);
    }
    BuiltinGlyph::lookup(name)
        .map(|g| g.template())
        .ok_or_else(|| {
            InkForgeError::Template(format!(
                "'{}' is neither a template file nor a built-in glyph",
                name
            ))
        })
}
