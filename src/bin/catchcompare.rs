use std::{
    env,
    io::{self, IsTerminal},
    process,
};

use catchcompare::{AuditConfig, CompareError, cli::CommandLineConfig, render_report, run_audit};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    };

    match run(&config) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(config: &CommandLineConfig) -> Result<String, CompareError> {
    let audit_config = AuditConfig::load()?;
    let outcome = run_audit(&config.sequential, &config.parallel, &audit_config)?;
    Ok(render_report(&outcome))
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catchcompare=error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}
