//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::policy::{ScanPolicy, DEFAULT_MAX_DEPTH};

/// structmap - generate a Markdown map of a project's structure.
#[derive(Parser, Debug)]
#[command(name = "structmap")]
#[command(
    author,
    version,
    about,
    long_about = r#"structmap walks a project tree and writes PROJECT_STRUCTURE_AUTO.md at its root.

The document lists file and directory totals, file counts per extension, a tree of
the project layout, and the Gradle, CMake and Node.js modules found in it.

Hidden entries (except .github) and build/dependency/IDE directories such as
build, node_modules and .idea are skipped everywhere.

Examples:
    structmap
    structmap --root ../project generate
    structmap check
    structmap stats --pretty
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to scan (defaults to the current directory).\n\n\
The structure document is written at the top of this directory and all paths in it\n\
are relative to it."
    )]
    pub root: PathBuf,

    /// Maximum depth of the rendered tree.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_name = "N",
        long_help = "Maximum depth of the rendered tree.\n\n\
Deeper entries are left out of the tree but still counted in the statistics."
    )]
    pub max_depth: usize,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors. NO_COLOR is honored as well."
    )]
    pub no_color: bool,

    /// Quiet mode (no progress messages).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print debug diagnostics for each pass on stderr.\n\n\
RUST_LOG overrides this when set."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the structure document (default command).
    #[command(
        long_about = "Scan ROOT and overwrite ROOT/PROJECT_STRUCTURE_AUTO.md with a fresh\n\
structure document.\n\n\
Examples:\n\
  structmap generate\n\
  structmap generate --stdout > structure.md\n"
    )]
    Generate {
        /// Print the document instead of writing it.
        #[arg(long)]
        stdout: bool,
    },

    /// Verify the saved document matches the current tree.
    #[command(
        long_about = "Regenerate the document in memory and compare it with the saved\n\
PROJECT_STRUCTURE_AUTO.md, ignoring the generation timestamp.\n\n\
Exits with a non-zero status when the file is missing or out of date, which makes\n\
it suitable for CI.\n\n\
Example:\n\
  structmap check\n"
    )]
    Check,

    /// Print the collected statistics as JSON.
    #[command(
        long_about = "Run every pass and print totals, extension counts, modules and tree\n\
lines as a single JSON object.\n\n\
Example:\n\
  structmap stats --pretty\n"
    )]
    Stats {
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);
    let policy = ScanPolicy::with_max_depth(cli.max_depth);

    match cli.command.unwrap_or(Commands::Generate { stdout: false }) {
        Commands::Generate { stdout } => {
            crate::flows::generate::run_generate(&root, &policy, stdout, cli.quiet)
        }
        Commands::Check => crate::flows::generate::run_check(&root, &policy, cli.quiet),
        Commands::Stats { pretty } => crate::flows::generate::run_stats(&root, &policy, pretty),
    }
}
