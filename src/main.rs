use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

use wordstat::utils::{setup_logging, validate_args};
use wordstat::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Err(e) = run(&args, &mut rng) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
