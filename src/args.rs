//! This module defines the command line arguments the server accepts.

use std::{io::IsTerminal, path::PathBuf};
use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;


#[derive(Debug, Parser)]
#[command(about = "GraphQL API for pizza places, owners, makers and recipes.", version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) cmd: Command,

    /// Whether to use colors when printing to the terminal.
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    pub(crate) color: ColorWhen,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    /// Starts the HTTP server.
    Serve {
        #[command(flatten)]
        shared: Shared,
    },

    /// Outputs a template for the configuration file (which includes
    /// descriptions of all options).
    WriteConfig {
        /// Target file. If not specified, the template is written to stdout.
        target: Option<PathBuf>,
    },

    /// Exports the API as GraphQL schema (SDL).
    ExportApiSchema {
        /// Target file. If not specified, the schema is written to stdout.
        target: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Args)]
pub(crate) struct Shared {
    /// Path to the configuration file. If this is not specified, the server
    /// will try `PIZZERIA_CONFIG_PATH`, `config.toml` and
    /// `/etc/pizzeria/config.toml`, in that order, and fall back to the
    /// built-in defaults.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl Args {
    pub(crate) fn stdout_color(&self) -> ColorChoice {
        self.color.to_color_choice(std::io::stdout().is_terminal())
    }

    pub(crate) fn stderr_color(&self) -> ColorChoice {
        self.color.to_color_choice(std::io::stderr().is_terminal())
    }
}

impl ColorWhen {
    fn to_color_choice(self, is_terminal: bool) -> ColorChoice {
        match self {
            Self::Always => ColorChoice::Always,
            Self::Never => ColorChoice::Never,
            Self::Auto if is_terminal => ColorChoice::Auto,
            Self::Auto => ColorChoice::Never,
        }
    }
}
