//! Domain models for roster management.
//!
//! This module contains the person record, the roster entry that extends it
//! with a group, the roster collection itself, and configuration.

/// Identity and contact records.
pub mod record;
pub use record::{Record, ValidationError};

/// Roster entries and their fields.
pub mod entry;
pub use entry::{Field, RosterEntry, UnknownFieldError};

pub mod roster;
pub use roster::Roster;

mod config;
pub use config::Config;
