// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `my-program` command tree: a package-manager style CLI with fifteen
//! subcommands and a pip-like set of global options.

use argtree_core::{
    ArgumentParser, Command, DefinitionError, Element, OptionValues, ParserSettings,
    DEFAULT_VERSION_TEMPLATE,
};

use crate::output::FORMAT_CHOICES;

pub const PROGRAM: &str = "my-program";
pub const VERSION: &str = "0.0.1";

/// Choices for `--exists-action`.
pub const EXISTS_ACTIONS: [&str; 5] = ["switch", "ignore", "wipe", "backup", "abort"];

const COMMANDS: [(&str, &str); 15] = [
    ("install", "Install packages."),
    ("download", "Download packages."),
    ("uninstall", "Uninstall packages."),
    ("freeze", "Output installed packages in requirements format."),
    ("list", "List installed packages."),
    ("show", "Show information about installed packages."),
    ("check", "Verify installed packages have compatible dependencies."),
    ("config", "Manage local and global configuration."),
    ("search", "Search the index for packages."),
    ("cache", "Inspect and manage the wheel cache."),
    ("wheel", "Build wheels from your requirements."),
    ("hash", "Compute hashes of package archives."),
    ("completion", "A helper command used for command completion."),
    ("debug", "Show information useful for debugging."),
    ("help", "Show help for commands."),
];

pub fn build_parser() -> Result<ArgumentParser, DefinitionError> {
    let mut parser = ArgumentParser::new(ParserSettings {
        version: Some(VERSION.to_string()),
        help: "This is my program".to_string(),
        version_template: Some(DEFAULT_VERSION_TEMPLATE.to_string()),
        ..ParserSettings::new(PROGRAM)
    })?;

    for (name, help) in COMMANDS {
        let mut command = Command::new([name])?.with_help(help).on_run(move |values| {
            log_run(name, values);
        });
        add_command_options(name, &mut command)?;
        add_display_options(&mut command)?;
        parser.add_command(command, None)?;
    }

    add_general_options(parser.root_mut())?;
    add_display_options(parser.root_mut())?;
    parser.root_mut().set_callback(|values| log_run(PROGRAM, values));
    Ok(parser)
}

fn log_run(command: &str, values: &OptionValues) {
    tracing::info!(command, options = values.len(), "command selected");
}

/// Options every command accepts so output can be controlled at any depth.
fn add_display_options(command: &mut Command) -> Result<(), DefinitionError> {
    command.add_flag("no-color", &["no-color"], "Suppress colored output.")?;
    command.add_selection_option(
        "output",
        &["o", "output"],
        "format",
        &FORMAT_CHOICES,
        "Result format: human or json.",
    )
}

fn add_general_options(root: &mut Command) -> Result<(), DefinitionError> {
    root.add_flag(
        "isolated",
        &["isolated"],
        "Run in an isolated mode, ignoring environment variables and user configuration.",
    )?;
    root.add_flag("verbose", &["v", "verbose"], "Give more output.")?;
    root.add_flag("quiet", &["q", "quiet"], "Give less output.")?;
    root.add_string_option("log", &["log"], "path", "Path to a verbose appending log.")?;
    root.add_flag("no-input", &["no-input"], "Disable prompting for input.")?;
    root.add_string_option(
        "proxy",
        &["proxy"],
        "proxy",
        "Specify a proxy in the form [user:passwd@]proxy.server:port.",
    )?;
    root.add_int_option(
        "retries",
        &["retries"],
        "n",
        "Maximum number of retries each connection should attempt.",
    )?;
    root.add_float_option(
        "timeout",
        &["timeout"],
        "sec",
        "Set the socket timeout (default 15 seconds).",
    )?;
    root.add_selection_option(
        "exists-action",
        &["exists-action"],
        "action",
        &EXISTS_ACTIONS,
        "Default action when a path already exists.",
    )?;
    root.add_string_option(
        "trusted-host",
        &["trusted-host"],
        "hostname",
        "Mark this host or host:port pair as trusted.",
    )?;
    root.add_string_option("cert", &["cert"], "path", "Path to alternate CA bundle.")?;
    root.add_string_option(
        "client-cert",
        &["client-cert"],
        "path",
        "Path to SSL client certificate.",
    )?;
    root.add_string_option("cache-dir", &["cache-dir"], "dir", "Store the cache data in <dir>.")?;
    root.add_flag("no-cache-dir", &["no-cache-dir"], "Disable the cache.")?;
    root.add_list_option(
        "nums",
        &["nums"],
        "list",
        Element::Int,
        "Nested integer list, e.g. [1,2,[3,4]].",
    )?;
    root.add_string_option(
        "use-feature",
        &["use-feature"],
        "feature",
        "Enable new functionality, that may be backward incompatible.",
    )
}

fn add_command_options(name: &str, command: &mut Command) -> Result<(), DefinitionError> {
    match name {
        "install" | "download" | "wheel" => {
            command.add_string_option(
                "requirement",
                &["r", "requirement"],
                "file",
                "Install from the given requirements file.",
            )?;
            command.add_list_option(
                "packages",
                &["p", "packages"],
                "names",
                Element::Text,
                "Package names, e.g. [requests, flask].",
            )?;
            if name == "install" {
                command.add_flag("upgrade", &["U", "upgrade"], "Upgrade all specified packages.")?;
                command.add_string_option("target", &["t", "target"], "dir", "Install into <dir>.")?;
            }
            Ok(())
        }
        "uninstall" => command.add_flag("yes", &["y", "yes"], "Don't ask for confirmation."),
        "list" | "freeze" => {
            command.add_flag("user", &["user"], "Only output packages installed in user-site.")?;
            command.add_flag("local", &["l", "local"], "Skip globally-installed packages.")
        }
        "show" => command.add_flag("files", &["f", "files"], "Show the full list of installed files."),
        "hash" => command.add_selection_option(
            "algorithm",
            &["a", "algorithm"],
            "algo",
            &["sha256", "sha384", "sha512"],
            "The hash algorithm to use.",
        ),
        "cache" => {
            let mut dir = Command::new(["dir"])?
                .with_help("Show the cache directory.")
                .on_run(|values| log_run("cache dir", values));
            add_display_options(&mut dir)?;
            command.add_command(dir, None)?;
            let mut purge = Command::new(["purge", "clear"])?
                .with_help("Remove all items from the cache.")
                .on_run(|values| log_run("cache purge", values));
            add_display_options(&mut purge)?;
            command.add_command(purge, None)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
