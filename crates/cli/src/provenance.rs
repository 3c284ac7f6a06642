//! `<stem>.provenance.json` records for generated borders.
//!
//! A record pins down how a borders file was made: roadnet version and code
//! revision, the road parameters, and the graph file it was read from.
//! Rerunning `cli generate` with the recorded parameters on the recorded input
//! reproduces the file exactly.

use anyhow::{Context, Result};
use roadnet::api::{MergePolicy, RoadParams};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Generation parameters as written to the record.
#[derive(Debug, Serialize)]
pub struct Params {
    pub width: f64,
    pub roundness: u32,
    pub policy: &'static str,
    pub segments: usize,
}

impl Params {
    pub fn new(road: RoadParams, merge: MergePolicy, segments: usize) -> Self {
        Self {
            width: road.width,
            roundness: road.roundness,
            policy: policy_name(merge),
            segments,
        }
    }
}

pub fn policy_name(merge: MergePolicy) -> &'static str {
    match merge {
        MergePolicy::MultiBreak => "multi-break",
        MergePolicy::Union => "union",
    }
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    code_rev: String,
    roadnet: &'static str,
    params: &'a Params,
    input: String,
    borders: String,
}

/// Record sidecar path for a borders file: `out/city.json` → `out/city.provenance.json`.
pub fn sidecar_path(borders: &Path) -> PathBuf {
    let stem = borders
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("borders");
    borders.with_file_name(format!("{stem}.provenance.json"))
}

/// Write the record for `borders` (built from `input`) and return its path.
pub fn record(borders: &Path, input: &Path, params: &Params) -> Result<PathBuf> {
    let path = sidecar_path(borders);
    let doc = Record {
        code_rev: current_git_rev(),
        roadnet: roadnet::VERSION,
        params,
        input: input.display().to_string(),
        borders: borders.display().to_string(),
    };
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
