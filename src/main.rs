mod cli;
mod logging;
mod table;

use std::process::ExitCode;

use clap::Parser;
use cli::Arguments;
use tracing::{debug, info};

const VERSION: &str = concat!(env!("MPSSH_VERSION"), " ", env!("MPSSH_BUILD_HASH"));

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init_logging(args.verbose);

    let hosts = match hostlist::load(&args.load_options()) {
        Ok(hosts) => hosts,
        Err(e) => {
            debug!(kind = %e.kind(), "host list load failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stats = hosts.stats();
    if stats.skipped > 0 {
        info!(skipped = stats.skipped, "ignored host lines without a hostname");
    }

    let procs = stats.clamp_concurrency(args.procs);
    info!(hosts = stats.count, procs, "host list ready");

    if args.list {
        print!("{}", table::render(&hosts));
        return ExitCode::SUCCESS;
    }

    println!("[*] read ({}) hosts from the list", stats.count);
    if let Some(label) = &args.label {
        println!("[*] using hosts labelled \"{label}\"");
    }
    println!("[*] up to {procs} parallel ssh sessions");

    ExitCode::SUCCESS
}
