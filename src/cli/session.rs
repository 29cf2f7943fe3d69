//! The interactive session.
//!
//! Walks the operator through counting files, reviewing the roster, and
//! adding a student.

use std::path::Path;

use anyhow::Context;
use dialoguer::Input;
use roster::{Config, LoadError, Roster, RosterEntry};
use tracing::instrument;

use super::{
    load_roster,
    output::{Tone, print_entries, print_known_groups},
};

#[instrument(level = "debug", skip(config))]
pub fn run(config: &Config) -> anyhow::Result<()> {
    let directory = prompt("Directory to count files in", false)?;
    let directory = directory.trim();
    let count = Roster::count_files_in_directory(Path::new(directory))?;
    println!("\nFiles in directory '{directory}': {count}\n");

    let path = &config.data_file;
    let mut roster = match load_roster(path) {
        Ok(roster) => roster,
        Err(LoadError::NotFound(_)) => {
            Tone::Notice.say(format_args!("File {} not found!", path.display()));
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to load roster from {}", path.display()));
        }
    };

    println!();
    Tone::Heading.say("Students sorted by name:");
    roster.sort_by_name();
    print_entries(&roster);

    println!();
    Tone::Heading.say("Students sorted by number:");
    roster.sort_by_id();
    print_entries(&roster);

    println!();
    let group = prompt("Group to filter by", true)?;
    println!();
    Tone::Heading.say(format_args!("Students in group {group}:"));
    if print_entries(roster.filter_by_group(&group)) == 0 {
        print_known_groups(roster.groups());
    }

    println!();
    Tone::Heading.say("Adding a new student:");
    let id = prompt("Number", false)?;
    let name = prompt("Full name", false)?;
    let email = prompt("Email", true)?;
    let group = prompt("Group", true)?;
    let entry = RosterEntry::parse(&id, name, email, group)?;
    roster.add(entry);

    roster.save_to_file_with(path, config)?;
    println!();
    Tone::Saved.say("New student added, data saved to file.");
    Ok(())
}

fn prompt(text: &str, allow_empty: bool) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt(text)
        .allow_empty(allow_empty)
        .interact_text()
        .context("failed to read input")
}
