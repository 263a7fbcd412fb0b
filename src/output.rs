use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::stats::AnalysisResult;

pub const REPORT_NAME_LEN: usize = 10;

/// Encodes the result as JSON with one member per line and no indentation.
pub fn serialize(result: &AnalysisResult) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b""));
    result
        .serialize(&mut serializer)
        .context("Failed to encode analysis result as JSON")?;
    Ok(buf)
}

/// Random string of uppercase ASCII letters.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect()
}

pub fn report_file_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}.json", random_name(rng, REPORT_NAME_LEN))
}

/// Creates a new randomly named report in `dir` and writes `data` to it.
///
/// Fails if a file with the generated name already exists; an existing
/// report is never overwritten.
pub fn write_report<R: Rng + ?Sized>(dir: &Path, data: &[u8], rng: &mut R) -> Result<PathBuf> {
    let start_time = Instant::now();
    let path = dir.join(report_file_name(rng));
    info!(action = "start", component = "report_write", path = ?path, "Creating report file");

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o660);
    }

    let mut file = options
        .open(&path)
        .with_context(|| format!("Failed to create report file {:?}", path))?;
    file.write_all(data)
        .with_context(|| format!("Failed to write report file {:?}", path))?;

    info!(
        action = "complete",
        component = "report_write",
        bytes = data.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Report written"
    );
    Ok(path)
}
