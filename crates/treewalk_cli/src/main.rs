//! treewalk CLI
//!
//! Loads a markup tree from JSON, walks it with one of the built-in
//! serializers and prints the result.

mod cli;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, Format};
use treewalk_core::{
    Event, Serializer, TraversalError, TreeNode, WalkContext, WalkError, WalkOptions, Walker,
    serializers,
};
use treewalk_dom::{DomArena, DomNode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(reported_error) => {
            if reported_error {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs a command. Returns true if a walk reported an error through the
/// `error` event.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Walk {
            tree,
            format,
            options,
            ignore_whitespace,
            include_root,
            stop_at,
        } => {
            let options = resolve_options(options.as_deref(), ignore_whitespace, include_root)?;
            run_walk(&tree, format, options, stop_at.as_deref())
        }
        Commands::Events => {
            for event in Event::ALL {
                println!("{}", event);
            }
            Ok(false)
        }
    }
}

/// Loads the options file, then applies command line flags on top.
fn resolve_options(
    path: Option<&Path>,
    ignore_whitespace: bool,
    include_root: bool,
) -> Result<WalkOptions> {
    let mut options = match path {
        Some(path) => WalkOptions::from_file(path).into_diagnostic()?,
        None => WalkOptions::default(),
    };

    if ignore_whitespace {
        options = options.ignore_whitespace(true);
    }
    if include_root {
        options = options.ignore_root_node(false);
    }

    debug!("Walk options: {:?}", options);
    Ok(options)
}

fn run_walk(
    tree: &Path,
    format: Format,
    options: WalkOptions,
    stop_at: Option<&str>,
) -> Result<bool> {
    let source = fs::read_to_string(tree)
        .map_err(|e| miette::miette!("Failed to read tree from {}: {}", tree.display(), e))?;

    let arena = DomArena::new();
    let root = arena
        .load_json_str(&source)
        .map_err(WalkError::from)
        .into_diagnostic()?;
    debug!(
        "Loaded {} ({} bytes allocated)",
        tree.display(),
        arena.allocated_bytes()
    );

    match format {
        Format::Events => {
            let mut serializer = Serializer::new();
            stop_at_tag(&mut serializer, stop_at);
            serializers::event_log(&mut serializer);
            let (entries, reported_error) = walk(root, &serializer, options)?;
            for entry in entries.unwrap_or_default() {
                println!("{}", entry);
            }
            Ok(reported_error)
        }
        Format::Outline | Format::Trace | Format::Markup => {
            let mut serializer = Serializer::new();
            stop_at_tag(&mut serializer, stop_at);
            match format {
                Format::Outline => serializers::outline(&mut serializer),
                Format::Trace => serializers::trace(&mut serializer),
                _ => serializers::markup(&mut serializer),
            };
            let (output, reported_error) = walk(root, &serializer, options)?;
            let output = output.unwrap_or_default();
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(reported_error)
        }
    }
}

/// Aborts the walk when an element named `tag` opens.
///
/// Registered ahead of the preset, so the preset never sees that tag and
/// reports the failure through its `error` listener instead.
fn stop_at_tag<N: TreeNode, B>(serializer: &mut Serializer<N, B>, tag: Option<&str>) {
    let Some(tag) = tag else {
        return;
    };
    let tag = tag.to_string();
    serializer.on(Event::TagOpen, move |ctx: &mut WalkContext<N, B>| match ctx.current() {
        Some(node) if node.node_name().eq_ignore_ascii_case(&tag) => {
            Err(TraversalError::listener(format!("stopped at <{}>", tag)))
        }
        _ => Ok(()),
    });
}

/// Walks `root` once and returns the buffer and whether `error` fired.
fn walk<'a, B>(
    root: &'a DomNode<'a>,
    serializer: &Serializer<&'a DomNode<'a>, B>,
    options: WalkOptions,
) -> Result<(Option<B>, bool)> {
    let mut walker = Walker::new(root, serializer, options);
    walker.walk().into_diagnostic()?;

    let reported_error = match &walker.context().error {
        Some(err) => {
            warn!("Walk reported an error: {}", err);
            true
        }
        None => false,
    };
    Ok((walker.into_results(), reported_error))
}
