use anyhow::Context;
use clap::{Parser, ValueEnum};
use roster::{RosterEntry, storage::delimited};
use serde_json::json;
use tracing::instrument;

use super::{load_existing_roster, output};

#[derive(Debug, Parser)]
pub struct List {
    /// Sort the roster before listing
    #[arg(long, value_name = "FIELD")]
    sort: Option<SortField>,

    /// Only list students in this group (exact, case-sensitive match)
    #[arg(long)]
    group: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

/// Fields the roster can be sorted by.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum SortField {
    Name,
    Id,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl List {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &roster::Config) -> anyhow::Result<()> {
        let mut roster = load_existing_roster(&config.data_file)?;

        match self.sort {
            Some(SortField::Name) => roster.sort_by_name(),
            Some(SortField::Id) => roster.sort_by_id(),
            None => {}
        }

        let entries: Vec<&RosterEntry> = match &self.group {
            Some(group) => roster.filter_by_group(group).collect(),
            None => roster.iter().collect(),
        };

        match self.output {
            OutputFormat::Table => {
                if output::print_entries(entries.iter().copied()) == 0 && self.group.is_some() {
                    output::print_known_groups(roster.groups());
                }
            }
            OutputFormat::Json => render_json(&entries)?,
            OutputFormat::Csv => render_csv(&entries)?,
        }
        Ok(())
    }
}

fn render_json(entries: &[&RosterEntry]) -> anyhow::Result<()> {
    let rows: Vec<_> = entries
        .iter()
        .map(|entry| {
            json!({
                "id": entry.id(),
                "name": entry.name(),
                "email": entry.email(),
                "group": entry.group(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(std::io::stdout(), &rows)
        .context("failed to render json output")?;
    println!();
    Ok(())
}

fn render_csv(entries: &[&RosterEntry]) -> anyhow::Result<()> {
    delimited::write(entries.iter().copied(), std::io::stdout().lock())
        .context("failed to render csv output")
}
