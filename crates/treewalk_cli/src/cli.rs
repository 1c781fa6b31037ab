//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// treewalk - Event-driven walker for markup trees
#[derive(Parser)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a JSON tree and print the serializer output
    Walk {
        /// Path to the JSON tree
        tree: PathBuf,

        /// Built-in serializer to run
        #[arg(short, long, value_enum, default_value_t = Format::Outline)]
        format: Format,

        /// Options file (JSON or JSONC)
        #[arg(short, long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Skip whitespace-only text nodes
        #[arg(long)]
        ignore_whitespace: bool,

        /// Report tags of the root element too
        #[arg(long)]
        include_root: bool,

        /// Abort the walk when an element with this tag name opens
        #[arg(long, value_name = "TAG")]
        stop_at: Option<String>,
    },

    /// List the events fired during a walk
    Events,
}

/// Built-in serializers selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per tag and text node
    Outline,
    /// Compact bracketed trace
    Trace,
    /// Re-serialized markup
    Markup,
    /// One line per event
    Events,
}
