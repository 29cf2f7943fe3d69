/// Delimited text persistence for rosters.
pub mod delimited;
mod directory;

pub use delimited::{LoadError, ParseError, SaveError};
pub use directory::{DirectoryError, count_files_in_directory};
