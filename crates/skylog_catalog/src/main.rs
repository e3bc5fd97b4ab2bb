/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command, OutputFormat};
use skylog_catalog::io::load_catalog;
use skylog_catalog::{find, find_all, BuildOptions, CatalogBuilder, Config};
use skylog_core::CelestialRecord;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            messier,
            bsc5p,
            out,
            bsc5p_mag,
            bsc5p_commonnames_only,
            config,
            report,
        } => {
            let config = match &config {
                Some(path) => Config::load(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => Config::load_from_project()
                    .context("failed to load project config")?
                    .unwrap_or_default(),
            };

            let mut options = BuildOptions::new(messier, bsc5p).with_config(
                &config,
                out,
                bsc5p_mag,
                bsc5p_commonnames_only,
            );
            options.report = report;

            let builder = CatalogBuilder::new(config.transliterator(), options.filter());
            let build = builder
                .run(&options)
                .with_context(|| format!("failed to build {}", options.output.display()))?;

            println!(
                "Wrote {} objects to {}",
                build.records.len(),
                options.output.display()
            );
        }

        Command::Find {
            catalog,
            query,
            all,
            format,
        } => {
            let records = load_catalog(&catalog)
                .with_context(|| format!("failed to read catalog {}", catalog.display()))?;

            if all {
                let matches = find_all(&records, &query);
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
                    OutputFormat::Text => {
                        if matches.is_empty() {
                            println!("No objects match '{query}'");
                        }
                        for m in &matches {
                            println!("{:<10} {}", format!("{:?}", m.kind), summary(m.record));
                        }
                    }
                }
            } else {
                match (find(&records, &query), format) {
                    (Some(record), OutputFormat::Json) => {
                        println!("{}", serde_json::to_string_pretty(record)?)
                    }
                    (Some(record), OutputFormat::Text) => println!("{}", summary(record)),
                    (None, OutputFormat::Json) => println!("null"),
                    (None, OutputFormat::Text) => println!("No objects match '{query}'"),
                }
            }
        }

        #[cfg(feature = "schema")]
        Command::Schema => {
            let schema = schemars::schema_for!(Vec<CelestialRecord>);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn summary(record: &CelestialRecord) -> String {
    let magnitude = record
        .magnitude
        .map_or_else(|| "-".to_string(), |m| format!("{m:.2}"));
    format!(
        "{} [{}] {} / {}  RA {}  Dec {}  mag {}",
        record.id,
        record.catalog,
        record.name_en,
        record.name_kr,
        record.ra.as_deref().unwrap_or("-"),
        record.dec.as_deref().unwrap_or("-"),
        magnitude
    )
}
