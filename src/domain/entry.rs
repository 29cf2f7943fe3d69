use std::{fmt, str::FromStr};

use crate::domain::record::{Record, ValidationError, parse_id};

/// One of the four fields of a [`RosterEntry`].
///
/// Each field has a fixed column label used in the data file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// The numeric identifier.
    Id,
    /// The full name.
    Name,
    /// The contact email.
    Email,
    /// The group or class label.
    Group,
}

impl Field {
    /// All fields, in column order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Email, Self::Group];

    /// The column label written to, and expected in, the data file header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "№",
            Self::Name => "ФИО",
            Self::Email => "email",
            Self::Group => "группа",
        }
    }

    /// The field's lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known field.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown field '{0}': expected one of id, name, email, group")]
pub struct UnknownFieldError(String);

impl FromStr for Field {
    type Err = UnknownFieldError;

    /// Accepts either the field name or its column label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s || field.label() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// A member of a roster: a [`Record`] plus the group they belong to.
///
/// Group values are free text and are never normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    record: Record,
    group: String,
}

impl RosterEntry {
    /// Creates a new entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the record fields are invalid.
    pub fn new(
        id: u64,
        name: String,
        email: String,
        group: String,
    ) -> Result<Self, ValidationError> {
        let record = Record::new(id, name, email)?;
        Ok(Self { record, group })
    }

    /// Creates a new entry from text input, parsing the id.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the id is not a non-negative integer
    /// or the name is empty.
    pub fn parse(
        id: &str,
        name: String,
        email: String,
        group: String,
    ) -> Result<Self, ValidationError> {
        let record = Record::parse(id, name, email)?;
        Ok(Self { record, group })
    }

    /// Wraps an existing record.
    #[must_use]
    pub const fn from_record(record: Record, group: String) -> Self {
        Self { record, group }
    }

    /// The underlying identity and contact record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// The entry's numeric identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.record.id()
    }

    /// The full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.record.name()
    }

    /// The contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.record.email()
    }

    /// The group label.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Replaces the id.
    pub const fn set_id(&mut self, id: u64) {
        self.record.set_id(id);
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is empty; the entry is
    /// left unchanged.
    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        self.record.set_name(name)
    }

    /// Replaces the email.
    pub fn set_email(&mut self, email: String) {
        self.record.set_email(email);
    }

    /// Replaces the group.
    pub fn set_group(&mut self, group: String) {
        self.group = group;
    }

    /// Sets a field from its text form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `value` is not valid for `field`. The
    /// entry is left unchanged in that case.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), ValidationError> {
        match field {
            Field::Id => self.set_id(parse_id(value)?),
            Field::Name => self.set_name(value.to_string())?,
            Field::Email => self.set_email(value.to_string()),
            Field::Group => self.set_group(value.to_string()),
        }
        Ok(())
    }

    /// The text form of a field, as written to the data file.
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Id => self.id().to_string(),
            Field::Name => self.name().to_string(),
            Field::Email => self.email().to_string(),
            Field::Group => self.group.clone(),
        }
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(id={}, name='{}', group='{}')",
            self.id(),
            self.name(),
            self.group
        )
    }
}
