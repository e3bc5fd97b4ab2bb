/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand};
use skylog_catalog::MagnitudeLimit;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skylog-catalog")]
#[command(about = "Build and search the bilingual skylog celestial catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Build the catalog from the Messier and bright-star sources")]
    Build {
        /// Messier source (JSON array or {"data": [...]})
        #[arg(long)]
        messier: PathBuf,

        /// Bright-star source with namesAlt entries
        #[arg(long)]
        bsc5p: PathBuf,

        /// Output file [default: catalog_ko_en.json]
        #[arg(long)]
        out: Option<PathBuf>,

        /// Faintest visual magnitude kept, or `none` [default: 6.5]
        #[arg(long = "bsc5p-mag", value_parser = parse_magnitude_limit)]
        bsc5p_mag: Option<MagnitudeLimit>,

        /// Keep only stars with at least one common name
        #[arg(long = "bsc5p-commonnames-only")]
        bsc5p_commonnames_only: bool,

        /// Configuration file [default: ./skylog.toml when present]
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write the build report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    #[command(about = "Look up objects in a built catalog")]
    Find {
        #[arg(long, default_value = "catalog_ko_en.json")]
        catalog: PathBuf,

        query: String,

        /// List every match instead of the best one
        #[arg(long)]
        all: bool,

        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the JSON schema of catalog records
    #[cfg(feature = "schema")]
    Schema,

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_magnitude_limit(s: &str) -> Result<MagnitudeLimit, String> {
    s.parse()
}
