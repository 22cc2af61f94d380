//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pmk::builder::HookSet;

/// pmk - A small build helper for C/C++ projects
#[derive(Parser)]
#[command(name = "pmk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a pmk.toml in the current directory
    Init(InitArgs),

    /// Build the project
    Build(BuildArgs),

    /// Run the built program
    Run(RunArgs),

    /// Fill `includes` and `files` by tracing an entry point's includes
    #[command(visible_alias = "aigenerate")]
    Generate(GenerateArgs),

    /// Rewrite the config file using the current template
    Update(UpdateArgs),

    /// Run the shell commands from the config file
    Shell(ShellArgs),

    /// Print the pmk version
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Config file selection shared by most commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArg {
    /// Path to the config file (defaults to pmk.toml)
    #[arg(short, long = "config", value_name = "FILE", env = "PMK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Project name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Compiler to use
    #[arg(long)]
    pub compiler: Option<String>,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Run shell.before and shell.after around the build
    #[arg(short, long)]
    pub shell: bool,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Build before running
    #[arg(short, long)]
    pub build: bool,

    /// Arguments passed to the program
    #[arg(last = true)]
    pub args: Vec<String>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Entry point source file (e.g. src/main.cpp)
    pub entry: PathBuf,

    #[command(flatten)]
    pub config: ConfigArg,

    /// Write the updated config to this file instead
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the discovered lists as JSON without writing anything
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Discard the file and create a fresh one
    #[arg(short, long)]
    pub new: bool,
}

#[derive(Args)]
pub struct ShellArgs {
    /// Which commands to run: all, before, after, seq, misc
    #[arg(default_value = "all", value_parser = parse_hook_set)]
    pub which: HookSet,

    #[command(flatten)]
    pub config: ConfigArg,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

fn parse_hook_set(s: &str) -> Result<HookSet, String> {
    s.parse()
}
