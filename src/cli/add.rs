use anyhow::Context;
use clap::Parser;
use roster::{Config, LoadError, Record, Roster, RosterEntry};
use tracing::instrument;

use super::{load_roster, output::Tone};

#[derive(Debug, Parser)]
pub struct Add {
    /// The student's number (a non-negative integer)
    #[arg(long)]
    id: String,

    /// The student's full name
    #[arg(long)]
    name: String,

    /// The student's email address
    #[arg(long, default_value = "")]
    email: String,

    /// The student's group
    #[arg(long)]
    group: String,
}

impl Add {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = &config.data_file;
        let mut roster = match load_roster(path) {
            Ok(roster) => roster,
            Err(LoadError::NotFound(_)) => {
                tracing::info!("{} does not exist, starting a new roster", path.display());
                Roster::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to load roster from {}", path.display()));
            }
        };

        if !Record::validate_email(&self.email) {
            tracing::warn!("'{}' does not look like an email address", self.email);
        }

        let entry = RosterEntry::parse(&self.id, self.name, self.email, self.group)?;
        for existing in roster.find_by_id(entry.id()) {
            Tone::Notice.say(format_args!("Id {} is already used by {existing}", entry.id()));
        }
        roster.add(entry);

        roster.save_to_file_with(path, config)?;
        if let Some(added) = roster.entries().last() {
            Tone::Saved.say(format_args!("Added {added}"));
        }
        tracing::info!("Saved {} students to {}", roster.len(), path.display());
        Ok(())
    }
}
