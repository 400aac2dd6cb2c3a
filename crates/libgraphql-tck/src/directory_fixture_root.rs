use crate::text_file;
use crate::FixtureEntry;
use crate::FixtureRoot;
use crate::FixtureRootError;
use crate::TextFileError;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A fixture root backed by a directory on disk. Only direct children are
/// listed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryFixtureRoot {
    dir: PathBuf,
}

impl DirectoryFixtureRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FixtureRoot for DirectoryFixtureRoot {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn list_entries(&self) -> Result<Vec<FixtureEntry>, FixtureRootError> {
        if !self.dir.is_dir() {
            return Err(FixtureRootError::NotFound(self.dir.clone()));
        }

        let mut entries = vec![];
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(FixtureRootError::Walk {
                        root: self.dir.clone(),
                        err,
                    });
                },
                Err(err) => {
                    log::warn!("Skipping unlistable entry under {:#?}: {err}", self.dir);
                    continue;
                },
            };

            // `Path::is_dir` follows symlinks. A dangling link is listed as a
            // file and fails later when it is read.
            let path = entry.path().to_path_buf();
            log::trace!("Found fixture root entry at {path:#?}.");
            entries.push(if path.is_dir() {
                FixtureEntry::dir(path)
            } else {
                FixtureEntry::file(path)
            });
        }
        Ok(entries)
    }

    fn read_entry(&self, entry: &FixtureEntry) -> Result<String, TextFileError> {
        text_file::read_text_file(entry.path())
    }
}
