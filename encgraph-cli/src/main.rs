// encgraph-cli/src/main.rs
//
// Entry point for the `encgraph` binary.
//
// Parses the command line, initializes logging, runs the comparison over the
// current working directory layout and maps any failure to a one-line
// message on stderr with exit status 1.

use clap::Parser;
use encgraph_cli::{Cli, logging, run_graph};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_graph(&cli) {
        log::debug!("Run failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
