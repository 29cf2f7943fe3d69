use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration for the roster tool.
///
/// Settings are read from a TOML file. Missing settings take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// The roster data file, relative to the working directory.
    pub data_file: PathBuf,

    /// Whether saved files start with a UTF-8 byte order mark.
    ///
    /// Spreadsheet tools use the mark to detect the encoding. Files are
    /// accepted with or without it when loading.
    pub write_bom: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            write_bom: default_write_bom(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration, or the defaults if no file exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. The
    /// defaults are never substituted for a file that is present.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.csv")
}

const fn default_write_bom() -> bool {
    true
}

/// The serialized versions of the configuration.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: PathBuf,

        #[serde(default = "default_write_bom")]
        write_bom: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                write_bom,
            } => Self {
                data_file,
                write_bom,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndata_file = \"students.csv\"\nwrite_bom = false\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.data_file, PathBuf::from("students.csv"));
        assert!(!config.write_bom);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nwrite_bom = \"yes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn invalid_file_is_reported_instead_of_defaulted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndata_file = \"students.csv\"\nwrite_bom = \"no\"\n")
            .unwrap();

        let error = Config::load_or_default(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let actual: Config =
            toml::from_str("_version = \"1\"\ndata_file = \"students.csv\"\n").unwrap();
        assert_eq!(actual.data_file, PathBuf::from("students.csv"));
        assert!(actual.write_bom);
    }
}
