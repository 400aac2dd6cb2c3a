use crate::TextFileError;
use std::path::Path;
use std::path::PathBuf;

/// A place fixture files can be listed and read from.
///
/// [`DirectoryFixtureRoot`](crate::DirectoryFixtureRoot) is the filesystem
/// implementation; [`InMemoryFixtureRoot`](crate::InMemoryFixtureRoot) serves
/// fixtures held in memory.
pub trait FixtureRoot: std::fmt::Debug + Sync {
    /// Human-readable location used in log messages.
    fn location(&self) -> String;

    /// Lists the direct children of this root, files and directories alike,
    /// in the root's natural order. Implementations must not recurse.
    fn list_entries(&self) -> Result<Vec<FixtureEntry>, FixtureRootError>;

    /// Reads the full text of a file previously returned by
    /// [`FixtureRoot::list_entries()`].
    fn read_entry(&self, entry: &FixtureEntry) -> Result<String, TextFileError>;
}

/// One direct child of a [`FixtureRoot`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixtureEntry {
    path: PathBuf,
    is_dir: bool,
}

impl FixtureEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Final path component, used as the assertion source name.
    pub fn file_name(&self) -> String {
        crate::fixture_parser::fixture_file_name(&self.path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureRootError {
    #[error("fixture directory `{}` does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("failed to list fixture directory `{}`: {err}", .root.display())]
    Walk {
        root: PathBuf,
        err: walkdir::Error,
    },
}
