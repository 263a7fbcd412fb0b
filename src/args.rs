use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wordstat",
    about = "Count words and letters in a text file and save the frequencies as JSON",
    version,
    long_about = None
)]
pub struct Args {
    /// File path to read from
    #[arg(short, long)]
    pub fpath: String,

    /// Directory where the JSON report is created
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Seed for the report file name generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of most frequent words and letters to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
