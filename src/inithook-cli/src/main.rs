//! inithook - insert boot hooks into a boot configuration file.
//!
//! Inserts the `lvm2` and/or `encrypt` hooks into the `HOOKS=(...)` line of
//! a `mkinitcpio.conf`-style file, immediately after the `block` hook,
//! backing up any pre-existing output file to `<output>.bak`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use inithook_conf::{DEFAULT_CONF_PATH, InsertOptions, insert_hooks};

/// Insert lvm2/encrypt boot hooks after the block hook.
#[derive(Parser, Debug)]
#[command(name = "inithook")]
#[command(author, version)]
#[command(about = "Insert lvm2/encrypt boot hooks into a boot configuration file")]
struct Cli {
    /// Insert the lvm2 hook
    #[arg(short = 'l', long = "lvm2")]
    lvm2: bool,

    /// Insert the encrypt hook
    #[arg(short = 'e', long = "encrypt")]
    encrypt: bool,

    /// Enable debug-level logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Input configuration file
    #[arg(value_name = "INPUT_FILE", default_value = DEFAULT_CONF_PATH)]
    input: PathBuf,

    /// Output file (same as input if unspecified)
    #[arg(value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

/// Set up stderr logging, honoring RUST_LOG when set.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = cli.input;
    let output = cli.output.unwrap_or_else(|| input.clone());

    let options = InsertOptions {
        lvm: cli.lvm2,
        encrypt: cli.encrypt,
    };

    let report = insert_hooks(&input, &output, &options)
        .with_context(|| format!("could not update {}", output.display()))?;

    if !report.written {
        println!("No hooks to add");
    } else if report.inserted.is_empty() {
        println!("Requested hooks already present in {}", output.display());
    } else {
        println!(
            "Inserted {} into {}",
            report.inserted.join(", "),
            output.display()
        );
    }

    Ok(())
}
