// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the siftbox command-line interface.
//!
//! Two subcommands: `search` runs a query against an `index.json` the same
//! way the page widget does, and `inspect` summarizes an index together with
//! the options a site params file resolves to.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "siftbox",
    about = "Search-as-you-type fuzzy search over a static site index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index.json file and display results
    Search {
        /// Path to index.json
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results (overrides the params file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Site params JSON file (`{"fuseOpts": {...}}`)
        #[arg(short, long)]
        params: Option<String>,

        /// Print the result view as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Inspect an index.json file
    Inspect {
        /// Path to index.json
        file: String,

        /// Site params JSON file (`{"fuseOpts": {...}}`)
        #[arg(short, long)]
        params: Option<String>,
    },
}
