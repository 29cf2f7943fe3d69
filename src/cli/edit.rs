use anyhow::Context;
use clap::Parser;
use roster::{Config, Field};
use tracing::instrument;

use super::{load_existing_roster, output::Tone};

#[derive(Debug, Parser)]
pub struct Edit {
    /// The student's position in the data file, starting at 1
    position: usize,

    /// The field to change: id, name, email or group (column labels are
    /// also accepted)
    field: Field,

    /// The new value
    value: String,
}

impl Edit {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = &config.data_file;
        let mut roster = load_existing_roster(path)?;

        let count = roster.len();
        let entry = self
            .position
            .checked_sub(1)
            .and_then(|index| roster.get_mut(index))
            .with_context(|| {
                format!(
                    "no student at position {} (the roster has {count})",
                    self.position
                )
            })?;

        let before = entry.value(self.field);
        entry.set_field(self.field, &self.value)?;
        Tone::Saved.say(format_args!(
            "Changed {} from '{before}' to '{}': {entry}",
            self.field,
            entry.value(self.field)
        ));

        roster.save_to_file_with(path, config)?;
        tracing::info!("Saved {} students to {}", roster.len(), path.display());
        Ok(())
    }
}
