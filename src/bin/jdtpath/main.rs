//! jdtpath CLI - classpath resolution for Java workspaces

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use jdtpath::resolver::ClasspathError;
use jdtpath::util::diagnostic::emit;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ClasspathError>() {
            Some(err) => emit(&err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("jdtpath=debug")
    } else {
        EnvFilter::new("jdtpath=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let global = commands::GlobalArgs {
        workspace: cli.workspace,
        use_global_config: !cli.no_global_config,
        verbose: cli.verbose,
    };

    // Execute command
    match cli.command {
        Commands::Classpath(args) => commands::classpath::execute(&global, args),
        Commands::Projects(args) => commands::projects::execute(&global, args),
        Commands::Runtimes(args) => commands::runtimes::execute(&global, args),
    }
}
