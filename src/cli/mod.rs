// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sort-priority command-line interface.
//!
//! Three subcommands: `index` runs the processor over a directory of
//! documents, `settings` shows the bundle weight table for an index, and
//! `resolve` prints the weight a single bundle gets.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sort-priority",
    about = "Bundle-weighted sort priority for search indexes",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct LogArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "sort_priority=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign sort weights to a directory of JSON documents
    Index {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Output directory for items.json
        #[arg(short, long)]
        output: String,

        /// Processor settings file (overrides the manifest's config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sort written items by weight ("asc" or "desc")
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show the bundle weight table for an index
    Settings {
        /// Input directory containing manifest.json
        #[arg(short, long)]
        input: String,

        /// Processor settings file (overrides the manifest's config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the weight a bundle resolves to
    Resolve {
        /// Bundle key; omit to get the default weight
        bundle: Option<String>,

        /// Processor settings file; defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
