use anyhow::{Context, Result};
use rand::Rng;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::{analyzer, output, stats::AnalysisResult, utils::format_number, Args};

/// Reads the whole source file. Each byte of an invalid UTF-8 sequence
/// becomes its own U+FFFD.
pub fn read_source(path: &Path) -> Result<String> {
    let start_time = Instant::now();
    info!(action = "start", component = "source_read", path = ?path, "Reading source file");

    let bytes = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let text = decode_per_byte(&bytes);

    info!(
        action = "complete",
        component = "source_read",
        bytes = bytes.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Source file read"
    );
    Ok(text)
}

fn decode_per_byte(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        text.extend(chunk.invalid().iter().map(|_| char::REPLACEMENT_CHARACTER));
    }
    text
}

pub fn analyze_file(args: &Args) -> Result<AnalysisResult> {
    let text = read_source(Path::new(&args.fpath))?;

    let start_time = Instant::now();
    let result = analyzer::analyze(&args.fpath, &text);
    info!(
        action = "complete",
        component = "analysis",
        words = result.words,
        characters = result.characters,
        unique_words = result.word_frequencies.len(),
        unique_letters = result.letter_frequencies.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Analysis completed"
    );

    Ok(result)
}

pub fn run<R: Rng + ?Sized>(args: &Args, rng: &mut R) -> Result<PathBuf> {
    let total_start_time = Instant::now();
    info!("Starting text analysis");

    let result = analyze_file(args)?;
    let data = output::serialize(&result)?;
    let path = output::write_report(&args.output_dir, &data, rng)?;
    println!("Saved {}", path.display());

    if let Some(top) = args.top {
        print_analysis_results(&result, top);
    }

    info!(
        duration_ms = total_start_time.elapsed().as_millis(),
        "Run completed successfully"
    );
    Ok(path)
}

/// Entries ordered by descending count, ties by key.
fn ranked(frequencies: &BTreeMap<String, usize>) -> Vec<(&String, &usize)> {
    let mut sorted: Vec<(&String, &usize)> = frequencies.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    sorted
}

pub fn print_analysis_results(result: &AnalysisResult, top: usize) {
    println!("\n--- {} Text Analysis ---", result.filename);
    println!("Words: {}", format_number(result.words));
    println!("Characters: {}", format_number(result.characters));
    println!(
        "Unique words: {}, unique letters: {}",
        format_number(result.word_frequencies.len()),
        format_number(result.letter_frequencies.len())
    );

    let words = ranked(&result.word_frequencies);
    println!("\nTop {} most frequent words:", std::cmp::min(top, words.len()));
    for (word, count) in words.iter().take(top) {
        println!("- {}: {}", word, format_number(**count));
    }

    let letters = ranked(&result.letter_frequencies);
    println!(
        "\nTop {} most frequent letters:",
        std::cmp::min(top, letters.len())
    );
    for (letter, count) in letters.iter().take(top) {
        println!("- {:?}: {}", letter, format_number(**count));
    }
}
