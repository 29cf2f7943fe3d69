//! Counting the files in a directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// Errors raised when a directory cannot be listed.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Nothing exists at the path.
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory exists but could not be read.
    #[error("directory not accessible: {}: {source}", .path.display())]
    NotAccessible {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

/// Counts the regular files directly inside `directory`.
///
/// Only immediate children are considered. Subdirectories, symbolic links
/// (even those pointing at files) and special files are not counted.
///
/// # Errors
///
/// Returns a [`DirectoryError`] if `directory` does not exist, is not a
/// directory, or cannot be read.
pub fn count_files_in_directory(directory: &Path) -> Result<usize, DirectoryError> {
    let metadata = fs::metadata(directory).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => DirectoryError::NotFound(directory.to_path_buf()),
        _ => DirectoryError::NotAccessible {
            path: directory.to_path_buf(),
            source: io_error,
        },
    })?;

    if !metadata.is_dir() {
        return Err(DirectoryError::NotADirectory(directory.to_path_buf()));
    }

    let mut count = 0;
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|walk_error| DirectoryError::NotAccessible {
            path: walk_error
                .path()
                .unwrap_or(directory)
                .to_path_buf(),
            source: walk_error.into(),
        })?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }

    tracing::debug!("Found {count} files in {}", directory.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn counts_files_but_not_subdirectories() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.txt", "b.csv", "c"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join("sub")).unwrap();

        assert_eq!(count_files_in_directory(tmp.path()).unwrap(), 3);
    }

    #[test]
    fn nested_files_are_not_counted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("nested.txt"), "").unwrap();

        assert_eq!(count_files_in_directory(tmp.path()).unwrap(), 1);
    }

    #[test]
    fn empty_directory_has_no_files() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(count_files_in_directory(tmp.path()).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_counted() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.txt");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("link.txt")).unwrap();

        assert_eq!(count_files_in_directory(tmp.path()).unwrap(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_not_accessible() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not restrict a privileged user.
        let readable = fs::read_dir(&locked).is_ok();
        let result = count_files_in_directory(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        let error = result.unwrap_err();
        assert!(matches!(error, DirectoryError::NotAccessible { path, .. } if path == locked));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        let error = count_files_in_directory(&missing).unwrap_err();
        assert!(matches!(error, DirectoryError::NotFound(path) if path == missing));
    }

    #[test]
    fn file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let error = count_files_in_directory(&file).unwrap_err();
        assert!(matches!(error, DirectoryError::NotADirectory(_)));
    }
}
