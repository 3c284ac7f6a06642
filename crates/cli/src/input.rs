//! Segment input: JSON graph files or CSV tables.
//!
//! - JSON: `{"segments": [[x1, y1, x2, y2], ...]}`
//! - CSV: header with at least `x1,y1,x2,y2`; integer columns are accepted.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use roadnet::api::{Point, Segment};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct GraphFile {
    segments: Vec<[f64; 4]>,
}

const COLUMNS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Read segments in file order from `.json` or `.csv`.
pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => bail!(
            "unsupported input {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<Segment>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: GraphFile =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(file.segments.into_iter().map(to_segment).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Segment>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let mut cols: Vec<Vec<f64>> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let series = df
            .column(name)
            .with_context(|| format!("missing column `{name}`"))?
            .cast(&DataType::Float64)?;
        let values = series
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("row {row}: empty `{name}`")))
            .collect::<Result<Vec<f64>>>()?;
        cols.push(values);
    }
    Ok((0..df.height())
        .map(|r| to_segment([cols[0][r], cols[1][r], cols[2][r], cols[3][r]]))
        .collect())
}

fn to_segment([x1, y1, x2, y2]: [f64; 4]) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}
