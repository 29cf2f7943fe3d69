//! The owning collection of roster entries.

use std::{
    collections::BTreeSet,
    fmt,
    ops::Index,
    path::Path,
};

use crate::{
    domain::{Config, RosterEntry},
    storage::{self, DirectoryError, LoadError, SaveError},
};

/// An ordered collection of [`RosterEntry`] values.
///
/// Insertion order is kept until one of the sort methods is called. Sorting
/// happens in place. Neither ids nor names are required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the end of the roster.
    pub fn add(&mut self, entry: RosterEntry) {
        self.entries.push(entry);
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the roster has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if there is one.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RosterEntry> {
        self.entries.get(index)
    }

    /// Returns the entry at `index` for modification, if there is one.
    ///
    /// Changes go through the entry's validating setters.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut RosterEntry> {
        self.entries.get_mut(index)
    }

    /// The entries in their current order.
    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Iterates over the entries in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }

    /// Sorts the entries by name, in place.
    ///
    /// Names are compared by code point. The sort is stable, so entries with
    /// equal names keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Sorts the entries by ascending id, in place.
    ///
    /// The sort is stable, so entries with equal ids keep their relative
    /// order.
    pub fn sort_by_id(&mut self) {
        self.entries.sort_by_key(RosterEntry::id);
    }

    /// Lazily yields the entries whose group is exactly `group`.
    ///
    /// Matching is case-sensitive and does not trim. Entries are produced in
    /// the roster's current order.
    pub fn filter_by_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a RosterEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.group() == group)
    }

    /// Lazily yields the entries with the given id.
    pub fn find_by_id(&self, id: u64) -> impl Iterator<Item = &RosterEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.id() == id)
    }

    /// The distinct group labels present in the roster.
    #[must_use]
    pub fn groups(&self) -> BTreeSet<&str> {
        self.entries.iter().map(RosterEntry::group).collect()
    }

    /// Counts the regular files directly inside `directory`.
    ///
    /// This is independent of any roster; see
    /// [`storage::count_files_in_directory`].
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] if the directory cannot be listed.
    pub fn count_files_in_directory(directory: &Path) -> Result<usize, DirectoryError> {
        storage::count_files_in_directory(directory)
    }

    /// Writes the roster to `path` as a delimited text file.
    ///
    /// Any existing file is overwritten. Entries are written in their current
    /// order, preceded by a byte order mark and the fixed header row.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the file cannot be created or written.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SaveError> {
        self.save_to_file_with(path, &Config::default())
    }

    /// Writes the roster to `path`, using the output settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the file cannot be created or written.
    pub fn save_to_file_with(&self, path: &Path, config: &Config) -> Result<(), SaveError> {
        storage::delimited::save(&self.entries, path, config.write_bom)
    }

    /// Reads entries from the delimited text file at `path` and appends them.
    ///
    /// Existing entries are kept. The file is fully parsed before anything is
    /// appended, so on error the roster is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist, or another
    /// [`LoadError`] if it cannot be read or parsed.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let loaded = storage::delimited::load(path)?;
        tracing::debug!(
            "Appending {} entries loaded from {}",
            loaded.len(),
            path.display()
        );
        for entry in loaded {
            self.add(entry);
        }
        Ok(())
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Roster(entries={})", self.entries.len())
    }
}

impl Index<usize> for Roster {
    type Output = RosterEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Roster {
    type Item = RosterEntry;
    type IntoIter = std::vec::IntoIter<RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<RosterEntry> for Roster {
    fn extend<T: IntoIterator<Item = RosterEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<T: IntoIterator<Item = RosterEntry>>(iter: T) -> Self {
        let mut roster = Self::new();
        roster.extend(iter);
        roster
    }
}
