//! Comma-separated persistence for roster entries.
//!
//! Files are UTF-8 with an optional leading byte order mark, which
//! spreadsheet tools use to detect the encoding. The first row is the header
//! `№,ФИО,email,группа`; every following row is one entry. Columns are
//! matched by label when reading, so their order in the header is not
//! significant.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use csv::StringRecord;

use crate::domain::{Field, RosterEntry, ValidationError};

/// The UTF-8 byte order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors raised when a file's content does not match the roster schema.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file has no header row.
    #[error("missing header row")]
    MissingHeader,

    /// The header does not contain a required column.
    #[error("header is missing column '{}'", .0.label())]
    MissingColumn(Field),

    /// A row has a different number of fields than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        /// The line the row starts on.
        line: u64,
        /// The number of header columns.
        expected: usize,
        /// The number of fields in the row.
        found: usize,
    },

    /// A field value is not valid for its column.
    #[error("line {line}: {source}")]
    InvalidField {
        /// The line the row starts on.
        line: u64,
        /// The validation failure.
        source: ValidationError,
    },

    /// The text is not well-formed delimited text (for example, not UTF-8).
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Errors raised when loading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file content is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error raised when a roster file cannot be written.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct SaveError {
    path: PathBuf,
    source: io::Error,
}

impl SaveError {
    /// The path that could not be written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of the underlying I/O failure.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Writes `entries` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns a [`SaveError`] if the file cannot be created or written.
pub fn save(entries: &[RosterEntry], path: &Path, bom: bool) -> Result<(), SaveError> {
    save_to_path(entries, path, bom).map_err(|source| SaveError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Saved {} entries to {}", entries.len(), path.display());
    Ok(())
}

fn save_to_path(entries: &[RosterEntry], path: &Path, bom: bool) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    if bom {
        writer.write_all(BOM)?;
    }
    write(entries, &mut writer)?;
    writer.flush()
}

/// Writes the header and one row per entry to `writer`.
///
/// Rows end with CRLF; fields are quoted only when they need to be. No byte
/// order mark is written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write<'a, W: Write>(
    entries: impl IntoIterator<Item = &'a RosterEntry>,
    writer: W,
) -> io::Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(Field::ALL.map(Field::label))?;
    for entry in entries {
        csv.write_record(Field::ALL.map(|field| entry.value(field)))?;
    }
    csv.flush()
}

/// Reads every entry from the file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist,
/// [`LoadError::Io`] if it cannot be read, and [`LoadError::Parse`] if its
/// content is malformed.
pub fn load(path: &Path) -> Result<Vec<RosterEntry>, LoadError> {
    let file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(io_error),
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;

    let entries = read(strip_bom(&bytes))?;
    tracing::debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(BOM).unwrap_or(bytes)
}

/// Parses the header and every row.
pub(crate) fn read<R: Read>(reader: R) -> Result<Vec<RosterEntry>, ParseError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv.records();

    let header = records.next().ok_or(ParseError::MissingHeader)??;
    let columns = Columns::from_header(&header)?;

    records
        .map(|record| columns.entry(&record?))
        .collect()
}

/// The position of each field within a row, as given by the header.
#[derive(Debug)]
struct Columns {
    width: usize,
    positions: [usize; 4],
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, ParseError> {
        let mut positions = [0; 4];
        for (position, field) in positions.iter_mut().zip(Field::ALL) {
            *position = header
                .iter()
                .position(|label| label == field.label())
                .ok_or(ParseError::MissingColumn(field))?;
        }
        Ok(Self {
            width: header.len(),
            positions,
        })
    }

    fn entry(&self, record: &StringRecord) -> Result<RosterEntry, ParseError> {
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() != self.width {
            return Err(ParseError::ColumnCount {
                line,
                expected: self.width,
                found: record.len(),
            });
        }

        let [id, name, email, group] = self
            .positions
            .map(|position| record.get(position).unwrap_or_default());

        RosterEntry::parse(id, name.to_string(), email.to_string(), group.to_string())
            .map_err(|source| ParseError::InvalidField { line, source })
    }
}
