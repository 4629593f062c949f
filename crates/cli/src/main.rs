// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! argtree-demo - a package-manager style CLI driven by argtree-core

mod color;
mod demo;
mod env;
mod exit_error;
mod help;
mod output;
mod table;

use anyhow::Result;
use argtree_core::{Command, ParseOutcome};

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

fn main() {
    if let Err(e) = run() {
        let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// When the top-level message already contains every cause, the chain is
/// dropped. Otherwise it is rendered like anyhow's Debug output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging(colorize: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(colorize))
        .try_init();
}

/// Walk `path` from the root command.
fn command_at<'a>(root: &'a Command, path: &[String]) -> Option<&'a Command> {
    path.iter().try_fold(root, |command, name| command.command(name))
}

fn run() -> Result<()> {
    let colorize = color::should_colorize();
    setup_logging(colorize);

    let mut parser = demo::build_parser()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = parser.parse(&args).map_err(ExitError::from)?;

    match outcome {
        ParseOutcome::Help(page) => {
            let suppressed = command_at(parser.root(), &page.path)
                .is_some_and(|command| command.values().is_set("no-color"));
            print!(
                "{}",
                help::format_help(&page, parser.style(), colorize && !suppressed)
            );
        }
        ParseOutcome::Version(line) => println!("{line}"),
        ParseOutcome::Dispatched { path, values } => {
            let format = OutputFormat::from_selection(values.selection("output"));
            let colorize = colorize && !values.is_set("no-color");
            let text =
                output::render_dispatched(parser.program(), &path, &values, format, colorize)?;
            print!("{text}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
