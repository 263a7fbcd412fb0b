use time::macros::format_description;
use time::UtcOffset;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays free for the saved path and summary.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        offset,
        format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: usize) -> String {
    num.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.fpath.trim().is_empty() {
        anyhow::bail!("Use --fpath <FILE> to pass a file to analyze");
    }

    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
    }

    if !args.output_dir.is_dir() {
        anyhow::bail!("Output directory not found: {:?}", args.output_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn validate_rejects_empty_path_and_zero_top() {
        let empty = Args::try_parse_from(["wordstat", "--fpath", ""]).unwrap();
        assert!(validate_args(&empty).is_err());

        let zero = Args::try_parse_from(["wordstat", "--fpath", "a.txt", "--top", "0"]).unwrap();
        assert!(validate_args(&zero).is_err());
    }

    #[test]
    fn validate_rejects_missing_output_dir() {
        let args =
            Args::try_parse_from(["wordstat", "-f", "a.txt", "-o", "no/such/output/dir"]).unwrap();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let args = Args::try_parse_from(["wordstat", "-f", "a.txt"]).unwrap();
        assert!(validate_args(&args).is_ok());
    }
}
