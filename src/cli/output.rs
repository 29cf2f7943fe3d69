//! Console output for roster commands.
//!
//! Styling is applied only when stdout supports colour.

use std::fmt::Display;

use owo_colors::OwoColorize;
use roster::RosterEntry;

fn colour_enabled() -> bool {
    supports_color::on_cached(supports_color::Stream::Stdout).is_some()
}

/// How a line of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A section title, such as "Students sorted by name".
    Heading,
    /// A change to the roster that was saved.
    Saved,
    /// Something the operator should look at, such as a missing data file.
    Notice,
    /// Filler shown in place of an empty result.
    Muted,
}

impl Tone {
    fn paint(self, text: &str) -> String {
        if !colour_enabled() {
            return text.to_string();
        }
        match self {
            Self::Heading => text.bold().to_string(),
            Self::Saved => text.green().to_string(),
            Self::Notice => text.yellow().to_string(),
            Self::Muted => text.dimmed().to_string(),
        }
    }

    /// Prints `message` on its own line in this tone.
    pub fn say(self, message: impl Display) {
        println!("{}", self.paint(&message.to_string()));
    }
}

/// Prints one line per entry, or a placeholder if there are none.
///
/// Returns the number of entries printed.
pub fn print_entries<'a>(entries: impl IntoIterator<Item = &'a RosterEntry>) -> usize {
    let mut printed = 0;
    for entry in entries {
        println!("{entry}");
        printed += 1;
    }
    if printed == 0 {
        Tone::Muted.say("(no students)");
    }
    printed
}

/// Prints the groups present in the roster, as a hint after an empty filter.
pub fn print_known_groups<'a>(groups: impl IntoIterator<Item = &'a str>) {
    let known: Vec<String> = groups.into_iter().map(|group| format!("'{group}'")).collect();
    if known.is_empty() {
        Tone::Muted.say("The roster has no groups yet.");
    } else {
        Tone::Muted.say(format_args!("Known groups: {}", known.join(", ")));
    }
}
