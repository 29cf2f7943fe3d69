use std::{fmt, str::FromStr};

use non_empty_string::NonEmptyString;

/// Errors raised when a field is given a value of the wrong kind.
///
/// Validation always happens before a field is overwritten, so a failed
/// assignment leaves the value it was applied to unchanged.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The id was not a non-negative integer.
    #[error("wrong type for field: id ('{0}' is not a non-negative integer)")]
    InvalidId(String),

    /// The name was empty.
    #[error("wrong type for field: name (must be non-empty text)")]
    EmptyName,
}

/// The identity and contact details of a person.
///
/// Fields are private; every mutation goes through a setter that validates
/// the new value first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: u64,
    name: NonEmptyString,
    email: String,
}

impl Record {
    /// Creates a new record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is empty.
    pub fn new(id: u64, name: String, email: String) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: parse_name(name)?,
            email,
        })
    }

    /// Creates a new record from text input, parsing the id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] if `id` is not a non-negative
    /// integer, or [`ValidationError::EmptyName`] if `name` is empty.
    pub fn parse(id: &str, name: String, email: String) -> Result<Self, ValidationError> {
        Self::new(parse_id(id)?, name, email)
    }

    /// The record's numeric identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The person's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact email, exactly as given.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replaces the id.
    pub const fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is empty, in which case
    /// the current name is kept.
    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        self.name = parse_name(name)?;
        Ok(())
    }

    /// Replaces the email.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Checks whether `email` looks like an email address.
    ///
    /// The text must contain an `@`, and the part after the last `@` must
    /// contain a `.`. This is never applied automatically.
    ///
    /// ```
    /// use roster::Record;
    ///
    /// assert!(Record::validate_email("anna@example.com"));
    /// assert!(!Record::validate_email("anna@localhost"));
    /// ```
    #[must_use]
    pub fn validate_email(email: &str) -> bool {
        email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(id={}, name='{}')", self.id, self.name)
    }
}

/// Parses an id from text.
///
/// Surrounding whitespace is ignored.
pub(crate) fn parse_id(s: &str) -> Result<u64, ValidationError> {
    u64::from_str(s.trim()).map_err(|_| ValidationError::InvalidId(s.to_string()))
}

fn parse_name(name: String) -> Result<NonEmptyString, ValidationError> {
    NonEmptyString::new(name).map_err(|_| ValidationError::EmptyName)
}
