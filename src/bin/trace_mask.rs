use mask_contours::io::{load_mask_image, save_outline_image, write_json_file};
use mask_contours::{find_contours, BorderKind, Contour, TraceOptions};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Deserialize)]
pub struct TraceToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub trace: TraceOptions,
    pub output: TraceOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceOutputConfig {
    pub contours_json: PathBuf,
    pub outline_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TraceToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let buffer = load_mask_image(&config.input)?;
    let mask = buffer.as_view();
    let start = Instant::now();
    let contours = find_contours(&mask, config.trace)
        .map_err(|e| format!("Failed to trace {}: {e}", config.input.display()))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    if let Some(outline_path) = &config.output.outline_image {
        save_outline_image(&contours, buffer.width(), buffer.height(), outline_path)?;
        println!("Saved outline image to {}", outline_path.display());
    }

    let summary = TraceSummary {
        width: buffer.width(),
        height: buffer.height(),
        threshold: config.trace.threshold,
        min_perimeter: config.trace.min_perimeter,
        contour_count: contours.len(),
        outer_count: contours
            .iter()
            .filter(|c| c.kind == BorderKind::Outer)
            .count(),
        hole_count: contours
            .iter()
            .filter(|c| c.kind == BorderKind::Hole)
            .count(),
        elapsed_ms,
        contours: contours.contours,
    };
    write_json_file(&config.output.contours_json, &summary)?;

    println!(
        "Saved {} contours ({} outer, {} holes) to {}",
        summary.contour_count,
        summary.outer_count,
        summary.hole_count,
        config.output.contours_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: trace_mask <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceSummary {
    width: usize,
    height: usize,
    threshold: f32,
    min_perimeter: usize,
    contour_count: usize,
    outer_count: usize,
    hole_count: usize,
    elapsed_ms: f64,
    contours: Vec<Contour>,
}
