use crate::FixtureEntry;
use crate::FixtureRoot;
use crate::FixtureRootError;
use crate::TextFileError;
use indexmap::IndexMap;
use std::path::PathBuf;

#[derive(Clone, Debug)]
enum InMemoryEntry {
    Dir,
    File(String),
    Unreadable,
}

/// A fixture root whose files live in memory.
///
/// Entries are listed in insertion order. Useful for exercising fixture
/// loading without touching a filesystem.
#[derive(Clone, Debug)]
pub struct InMemoryFixtureRoot {
    name: String,
    entries: Option<IndexMap<PathBuf, InMemoryEntry>>,
}

impl InMemoryFixtureRoot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Some(IndexMap::new()),
        }
    }

    /// A root that reports itself as not existing when listed.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: None,
        }
    }

    pub fn with_file(
        mut self,
        file_name: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        self.insert(file_name.into(), InMemoryEntry::File(content.into()));
        self
    }

    pub fn with_dir(mut self, dir_name: impl Into<PathBuf>) -> Self {
        self.insert(dir_name.into(), InMemoryEntry::Dir);
        self
    }

    /// Adds a file that is listed but fails with an I/O error when read.
    pub fn with_unreadable_file(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.insert(file_name.into(), InMemoryEntry::Unreadable);
        self
    }

    fn insert(&mut self, name: PathBuf, entry: InMemoryEntry) {
        self.entries
            .get_or_insert_with(IndexMap::new)
            .insert(PathBuf::from(&self.name).join(name), entry);
    }
}

impl FixtureRoot for InMemoryFixtureRoot {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn list_entries(&self) -> Result<Vec<FixtureEntry>, FixtureRootError> {
        let Some(entries) = &self.entries else {
            return Err(FixtureRootError::NotFound(PathBuf::from(&self.name)));
        };

        Ok(entries.iter()
            .map(|(path, entry)| match entry {
                InMemoryEntry::Dir => FixtureEntry::dir(path.clone()),
                InMemoryEntry::File(_) | InMemoryEntry::Unreadable =>
                    FixtureEntry::file(path.clone()),
            })
            .collect())
    }

    fn read_entry(&self, entry: &FixtureEntry) -> Result<String, TextFileError> {
        let path = entry.path().to_path_buf();
        match self.entries.as_ref().and_then(|entries| entries.get(&path)) {
            Some(InMemoryEntry::File(content)) => Ok(content.clone()),
            Some(InMemoryEntry::Unreadable) => Err(TextFileError::Io {
                path,
                err: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }),
            Some(InMemoryEntry::Dir) | None => Err(TextFileError::NotAFile(path)),
        }
    }
}
