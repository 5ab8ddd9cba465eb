//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use jdtpath::core::ContainerArguments;
use jdtpath::ops::OutputFormat;

/// jdtpath - resolve Java project classpaths
#[derive(Parser)]
#[command(name = "jdtpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long, global = true, env = "JDTPATH_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Ignore ~/.jdtpath/config.toml
    #[arg(long, global = true)]
    pub no_global_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved classpath of a project
    Classpath(ClasspathArgs),

    /// List workspace projects
    Projects(ProjectsArgs),

    /// List registered Java runtimes
    Runtimes(RuntimesArgs),
}

#[derive(Args)]
pub struct ClasspathArgs {
    /// Project name
    pub project: String,

    /// Compute the runtime classpath (follow non-exported entries)
    #[arg(long)]
    pub runtime: bool,

    /// Print paths inside the workspace relative to its root
    #[arg(long)]
    pub relative: bool,

    /// Fail when a library file does not exist
    #[arg(long)]
    pub strict: bool,

    /// Print the boot classpath instead of the main classpath
    #[arg(long)]
    pub boot: bool,

    /// Container argument, e.g. `--arg target.platform=galileo`
    #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = ContainerArguments::parse_pair)]
    pub arguments: Vec<(String, String)>,

    /// Output format: lines, path or json
    #[arg(long, default_value = "lines")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ProjectsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RuntimesArgs {
    /// Also list each runtime's libraries
    #[arg(long)]
    pub libraries: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
