use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use compare_headers::{build_options, compare_dirs, write_report, Args, Summary};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let opts = build_options(&args)?;

    let results = compare_dirs(&args.dir1, &args.dir2, &opts)?;
    let summary = Summary::from_results(&results);

    if !opts.dry_run {
        write_report(&results, &opts.output)
            .with_context(|| format!("Could not write report to {}", opts.output.display()))?;
    }

    println!("== Header comparison: Summary ==");
    println!("Files compared:   {}", summary.total());
    println!("Match:            {}", summary.matched);
    println!("Mismatch:         {}", summary.mismatched);
    println!("Missing:          {}", summary.missing);
    if opts.dry_run {
        println!("Dry run: report not written");
    } else {
        println!("Report at:        {}", opts.output.display());
    }

    Ok(())
}
