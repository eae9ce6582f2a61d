/// Directory organization by file category.
///
/// This module walks a directory tree, classifies each file through a
/// [`CategoryTable`], and moves it into a category subdirectory created next
/// to it. Collisions at the destination are resolved by appending `_1`,
/// `_2`, ... to the file stem. Failures on individual entries are collected
/// in the report instead of aborting the walk.
use crate::category::CategoryTable;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Per-invocation record of which files were moved into which categories.
///
/// Categories appear in the order they first received a file; within a
/// category, file names are recorded in move order. Names are the original
/// ones, before any collision renaming.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    entries: Vec<(String, Vec<String>)>,
}

impl OrganizeSummary {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn record(&mut self, category: &str, file_name: String) {
        if let Some((_, files)) = self.entries.iter_mut().find(|(name, _)| name == category) {
            files.push(file_name);
        } else {
            self.entries.push((category.to_string(), vec![file_name]));
        }
    }

    /// Returns the moved file names for a category, if any were moved there.
    pub fn files_for(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, files)| files.as_slice())
    }

    /// Iterates over `(category, moved file names)` pairs in first-move order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    /// Returns the number of categories that received at least one file.
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total number of files moved.
    pub fn total_files(&self) -> usize {
        self.entries.iter().map(|(_, files)| files.len()).sum()
    }

    /// Returns true if no files were moved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The outcome of one organization run.
///
/// Moves from subdirectories are merged into the same report, so one value
/// describes the whole tree.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Files moved, grouped by category.
    pub summary: OrganizeSummary,
    /// Entries whose directory creation or move failed, with the reason.
    /// Failures are isolated to the entry; the walk continues past them.
    pub failed_entries: Vec<(PathBuf, String)>,
    /// Entries that were skipped: symlinks and other special files,
    /// unreadable entries, and directories already visited this run.
    pub skipped_entries: Vec<(PathBuf, String)>,
}

impl OrganizeReport {
    fn new() -> Self {
        Self {
            summary: OrganizeSummary::new(),
            failed_entries: Vec::new(),
            skipped_entries: Vec::new(),
        }
    }

    /// Returns true if nothing was skipped and nothing failed.
    pub fn is_complete_success(&self) -> bool {
        self.failed_entries.is_empty() && self.skipped_entries.is_empty()
    }
}

/// Errors that can occur during an organization run.
#[derive(Debug)]
pub enum OrganizeError {
    /// The root path does not exist or is not a directory.
    InvalidDirectory {
        path: PathBuf,
        source: io::Error,
    },
    /// A directory listing could not be obtained.
    ReadDirFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// A category directory could not be created.
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// A file could not be moved to its destination.
    FileMoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDirectory { path, source } => {
                write!(f, "Invalid directory {}: {}", path.display(), source)
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

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Organizes files into category subdirectories.
///
/// The organizer owns the [`CategoryTable`] used for classification and is
/// otherwise stateless between runs: every call to [`Organizer::organize`]
/// builds its report from scratch.
pub struct Organizer {
    table: CategoryTable,
}

impl Organizer {
    /// Creates an organizer with the standard category table.
    pub fn new() -> Self {
        Self {
            table: CategoryTable::default(),
        }
    }

    /// Creates an organizer with a custom category table.
    pub fn with_table(table: CategoryTable) -> Self {
        Self { table }
    }

    /// Returns the category table used for classification.
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Organizes the tree rooted at `root`.
    ///
    /// Every file directly inside a visited directory whose extension matches
    /// a category is moved into `<dir>/<category>/`; everything else stays in
    /// place. Subdirectories are organized the same way, and their moves are
    /// merged into the single returned report.
    ///
    /// Only an invalid root aborts the run. Failures on individual entries
    /// are recorded in the report and the walk continues with the siblings.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::organizer::Organizer;
    /// use std::path::Path;
    ///
    /// let organizer = Organizer::new();
    /// match organizer.organize(Path::new("/path/to/downloads")) {
    ///     Ok(report) => println!("Moved {} files", report.summary.total_files()),
    ///     Err(e) => eprintln!("Organization failed: {}", e),
    /// }
    /// ```
    pub fn organize(&self, root: &Path) -> OrganizeResult<OrganizeReport> {
        let metadata = fs::metadata(root).map_err(|e| OrganizeError::InvalidDirectory {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !metadata.is_dir() {
            return Err(OrganizeError::InvalidDirectory {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            });
        }

        let mut report = OrganizeReport::new();
        let mut visited = HashSet::new();
        self.organize_tree(root, &mut report, &mut visited);
        Ok(report)
    }

    /// Organizes a single directory level, then recurses into subdirectories.
    ///
    /// The listing is snapshotted before any file is moved, so category
    /// directories created by this pass are never part of its worklist.
    /// Pre-existing directories that served as a move destination at this
    /// level are excluded from recursion too: files placed there this pass
    /// must not be picked up again by the same run. Directories are also
    /// deduplicated by canonical path, which bounds the walk on link cycles
    /// and mount loops.
    fn organize_tree(
        &self,
        dir: &Path,
        report: &mut OrganizeReport,
        visited: &mut HashSet<PathBuf>,
    ) {
        match fs::canonicalize(dir) {
            Ok(real_path) => {
                if !visited.insert(real_path) {
                    report
                        .skipped_entries
                        .push((dir.to_path_buf(), "directory already visited".to_string()));
                    return;
                }
            }
            Err(e) => {
                report
                    .skipped_entries
                    .push((dir.to_path_buf(), format!("could not resolve path: {}", e)));
                return;
            }
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                let error = OrganizeError::ReadDirFailed {
                    path: dir.to_path_buf(),
                    source: e,
                };
                report
                    .failed_entries
                    .push((dir.to_path_buf(), error.to_string()));
                return;
            }
        };

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    report
                        .failed_entries
                        .push((dir.to_path_buf(), format!("unreadable entry: {}", e)));
                    continue;
                }
            };
            match entry.file_type() {
                Ok(file_type) if file_type.is_file() => files.push(entry.path()),
                Ok(file_type) if file_type.is_dir() => subdirs.push(entry.path()),
                Ok(_) => report.skipped_entries.push((
                    entry.path(),
                    "not a regular file or directory".to_string(),
                )),
                Err(e) => report.failed_entries.push((
                    entry.path(),
                    format!("could not determine entry type: {}", e),
                )),
            }
        }

        let mut used_destinations = HashSet::new();
        for file in &files {
            let Some(category) = self.classify(file) else {
                continue;
            };
            let Some(file_name) = file.file_name() else {
                continue;
            };
            let original_name = file_name.to_string_lossy().into_owned();

            match self.move_into_category(dir, file, category) {
                Ok(_destination) => {
                    used_destinations.insert(dir.join(category));
                    report.summary.record(category, original_name);
                }
                Err(e) => report.failed_entries.push((file.clone(), e.to_string())),
            }
        }

        for subdir in &subdirs {
            if used_destinations.contains(subdir) {
                continue;
            }
            self.organize_tree(subdir, report, visited);
        }
    }

    /// Returns the category for a file path, if its extension is recognized.
    ///
    /// Extensionless files and extensions that are not valid UTF-8 have no
    /// category.
    fn classify(&self, file: &Path) -> Option<&str> {
        let extension = file.extension()?.to_str()?;
        self.table.category_for(extension)
    }

    /// Moves `file` into the category subdirectory of `dir`, creating the
    /// directory if needed and renaming on destination collisions.
    ///
    /// Returns the path the file ended up at.
    fn move_into_category(
        &self,
        dir: &Path,
        file: &Path,
        category: &str,
    ) -> OrganizeResult<PathBuf> {
        let category_dir = dir.join(category);
        create_category_dir(&category_dir)?;

        let file_name = file
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailed {
                source: file.to_path_buf(),
                destination: category_dir.clone(),
                source_error: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination = resolve_destination(&category_dir, file_name);
        move_file(file, &destination).map_err(|e| OrganizeError::FileMoveFailed {
            source: file.to_path_buf(),
            destination: destination.clone(),
            source_error: e,
        })?;

        Ok(destination)
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Organizes the tree rooted at `root` with the standard category table.
///
/// Convenience wrapper around [`Organizer::organize`].
pub fn organize(root: &Path) -> OrganizeResult<OrganizeReport> {
    Organizer::new().organize(root)
}

/// Creates a category directory, tolerating one that already exists.
fn create_category_dir(path: &Path) -> OrganizeResult<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(())
            } else {
                Err(OrganizeError::DirectoryCreationFailed {
                    path: path.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        "exists but is not a directory",
                    ),
                })
            }
        }
        Err(e) => Err(OrganizeError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Picks a destination inside `category_dir` that does not collide with an
/// existing file, appending `_1`, `_2`, ... to the stem until one is free.
fn resolve_destination(category_dir: &Path, file_name: &OsStr) -> PathBuf {
    let destination = category_dir.join(file_name);
    if !destination.exists() {
        return destination;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name.extension().map(|e| e.to_string_lossy().into_owned());

    let mut counter = 1;
    loop {
        let candidate = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let destination = category_dir.join(candidate);
        if !destination.exists() {
            return destination;
        }
        counter += 1;
    }
}

/// Moves a file, falling back to copy-and-delete when the destination is on
/// a different filesystem.
fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}
