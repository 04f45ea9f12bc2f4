use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::error;

use mediathek_cdns::output::{print_banner, print_report};
use mediathek_cdns::utils::{setup_logging, validate_args};
use mediathek_cdns::{discover_domains, Args, MediathekClient};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    let client = match MediathekClient::new(&args.endpoint) {
        Ok(client) => client,
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    print_banner(&mut io::stdout().lock(), &args.terms, args.size)?;
    let report = discover_domains(&client, &args.terms, args.size);

    print_report(&mut io::stdout().lock(), &report)?;
    Ok(())
}
