//! Plain-text Roster Management
//!
//! A roster is an ordered list of students, stored as a comma-separated file.

pub mod domain;
pub use domain::{Config, Field, Record, Roster, RosterEntry, ValidationError};

/// Filesystem storage for rosters.
pub mod storage;
pub use storage::{DirectoryError, LoadError, ParseError, SaveError};
