/// File moving primitives for the organize pass.
///
/// This module resolves collision-free destination paths and moves single
/// files into their category directory, creating the directory on demand.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors that can occur during file organization operations.
#[derive(Debug)]
pub enum OrganizeError {
    /// The target path is not an existing directory.
    InvalidTargetDir { path: PathBuf },
    /// Listing the target directory failed.
    ReadDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl OrganizeError {
    /// True when the underlying filesystem error was a permission failure.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::DirectoryCreationFailed { source, .. } => {
                source.kind() == ErrorKind::PermissionDenied
            }
            Self::FileMoveFailed { source_error, .. } => {
                source_error.kind() == ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTargetDir { path } => {
                write!(f, "'{}' is not a valid folder path", path.display())
            }
            Self::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Final counters of one organize pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Files moved into a category directory.
    pub moved: usize,
    /// Files that could not be moved.
    pub failed: usize,
}

/// Splits a filename into stem and extension at the last dot.
///
/// The extension keeps its leading dot; names without one (including dotfiles
/// like `.gitignore`) yield an empty extension. `archive.tar.gz` splits into
/// `("archive.tar", ".gz")`.
pub fn split_extension(filename: &str) -> (&str, &str) {
    // Leading dots are part of the stem, not an extension separator.
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(idx) => filename.split_at(leading + idx),
        None => (filename, ""),
    }
}

/// Resolves where a file named `filename` should land inside `dest_dir`.
///
/// With `overwrite` set, the plain `dest_dir/filename` join is returned even
/// if something already lives there. Otherwise a numeric disambiguator
/// `" (n)"` is inserted before the extension, counting up from 1 until the
/// candidate path is unoccupied.
///
/// The existence check and the later move are not atomic; a concurrent
/// external writer can still claim the returned path first.
///
/// # Examples
///
/// ```no_run
/// use shelve::file_organizer::resolve_destination;
/// use std::path::Path;
///
/// let dest = resolve_destination(Path::new("/downloads/Images"), "photo.jpg", false);
/// assert!(!dest.exists());
/// ```
pub fn resolve_destination(dest_dir: &Path, filename: &str, overwrite: bool) -> PathBuf {
    let candidate = dest_dir.join(filename);
    if overwrite || !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = split_extension(filename);
    let mut counter = 1;
    loop {
        let candidate = dest_dir.join(format!("{} ({}){}", stem, counter, extension));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Organizes files by moving them into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Moves a file into its category directory within the base path.
    ///
    /// The category directory is created if it does not exist. The
    /// destination is resolved via [`resolve_destination`], so with
    /// `overwrite` unset a name collision gets a numeric disambiguator
    /// instead of clobbering the occupant.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The root directory where category subdirectories live
    /// * `file_path` - The full path to the file to be moved
    /// * `category` - The name of the category subdirectory
    /// * `overwrite` - Replace an existing destination file instead of renaming
    ///
    /// # Returns
    ///
    /// Returns the destination path the file was moved to, or an
    /// `OrganizeError` if directory creation or the move fails.
    pub fn move_to_category(
        base_path: &Path,
        file_path: &Path,
        category: &str,
        overwrite: bool,
    ) -> OrganizeResult<PathBuf> {
        let category_path = base_path.join(category);

        if !category_path.exists() {
            fs::create_dir(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            })?;
        }

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailed {
                source: file_path.to_path_buf(),
                destination: category_path.clone(),
                source_error: std::io::Error::new(
                    ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination =
            resolve_destination(&category_path, &file_name.to_string_lossy(), overwrite);

        fs::rename(file_path, &destination).map_err(|e| OrganizeError::FileMoveFailed {
            source: file_path.to_path_buf(),
            destination: destination.clone(),
            source_error: e,
        })?;

        Ok(destination)
    }
}
