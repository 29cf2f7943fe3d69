use std::path::{Path, PathBuf};

mod add;
mod edit;
mod list;
mod output;
mod session;

use add::Add;
use anyhow::Context;
use clap::ArgAction;
use edit::Edit;
use list::List;
use output::Tone;
use roster::{Config, LoadError, Record, Roster};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(long, default_value = "roster.toml", global = true)]
    config: PathBuf,

    /// The roster data file (overrides the configured file)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config =
            Config::load_or_default(&self.config).map_err(|e| anyhow::anyhow!("{e}"))?;
        if let Some(file) = self.file {
            config.data_file = file;
        }

        self.command.unwrap_or(Command::Session).run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive session (default)
    ///
    /// Counts the files in a directory, prints the roster sorted by name and
    /// by id, filters it by group, then adds a new student and saves.
    Session,

    /// Count the regular files in a directory
    Count(Count),

    /// List students, optionally sorted and filtered by group
    List(List),

    /// Add a student and save the roster
    Add(Add),

    /// Change one field of a student and save the roster
    Edit(Edit),

    /// Check whether a string looks like an email address
    CheckEmail(CheckEmail),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Session => session::run(config)?,
            Self::Count(command) => command.run()?,
            Self::List(command) => command.run(config)?,
            Self::Add(command) => command.run(config)?,
            Self::Edit(command) => command.run(config)?,
            Self::CheckEmail(command) => command.run(),
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Count {
    /// The directory to count files in
    directory: PathBuf,
}

impl Count {
    #[instrument]
    fn run(self) -> anyhow::Result<()> {
        let count = Roster::count_files_in_directory(&self.directory)?;
        tracing::info!("Counted {count} files");
        println!("{count}");
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct CheckEmail {
    /// The text to check
    email: String,
}

impl CheckEmail {
    fn run(self) {
        if Record::validate_email(&self.email) {
            Tone::Saved.say(format_args!("'{}' looks like an email address", self.email));
        } else {
            Tone::Notice.say(format_args!(
                "'{}' does not look like an email address",
                self.email
            ));
        }
    }
}

/// Loads the roster from `path`.
///
/// A missing file is reported as [`LoadError::NotFound`] so callers can
/// decide whether to start from an empty roster.
fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let mut roster = Roster::new();
    roster.load_from_file(path)?;
    tracing::info!("Loaded {} students from {}", roster.len(), path.display());
    Ok(roster)
}

/// Loads the roster from `path`, failing with context if it cannot be read.
fn load_existing_roster(path: &Path) -> anyhow::Result<Roster> {
    load_roster(path).with_context(|| format!("failed to load roster from {}", path.display()))
}
