#![deny(clippy::pedantic)]
#![deny(clippy::cargo)]
// Our dependencies transitively depend on different versions of the same
// crates. Remove once they no longer do.
#![allow(clippy::multiple_crate_versions)]
use std::env;

use anyhow::Result;
use clap::Parser;
use clap_derive::Args;
use condstore::parse::best_effort_i64;
use condstore::store::offer;
use log::debug;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[clap(flatten)]
    store: StoreArgs,
}

#[derive(Clone, Debug, Args)]
struct StoreArgs {
    /// Candidate value; stored only when it exceeds 10
    #[arg(allow_hyphen_values = true)]
    number: Option<String>,
}

/// Run me eg like `cargo run -- 42`
fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    let Some(raw) = cli.store.number else {
        let program = env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned());
        println!("No argument provided.");
        println!("Syntax: {program} <number>");
        return Ok(());
    };
    let value = best_effort_i64(&raw);
    debug!("parsed {raw:?} as {value}");
    let cell = offer(value);
    match cell.value() {
        Some(stored) => println!("The stored value is: {stored}"),
        None => println!("No value was computed."),
    }
    Ok(())
}
