use crate::FixtureEntry;
use crate::FixtureRoot;
use crate::TckConfig;
use crate::TextFileError;
use std::path::Path;

/// File-name suffix every fixture file must carry (case-sensitive).
pub const FIXTURE_FILE_EXTENSION: &str = ".csv";

/// Which fixture root a file was found in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FixtureSource {
    /// Fixtures shipped by the implementation under test.
    Implementation,
    /// Fixtures shared by every implementation of the specification.
    Specification,
}

impl std::fmt::Display for FixtureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Implementation => "implementation",
            Self::Specification => "specification",
        })
    }
}

/// An eligible fixture file along with the root it can be read from.
#[derive(Clone, Debug)]
pub struct LocatedFixture<'r> {
    root: &'r dyn FixtureRoot,
    entry: FixtureEntry,
    source: FixtureSource,
}

impl<'r> LocatedFixture<'r> {
    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    pub fn file_name(&self) -> String {
        self.entry.file_name()
    }

    pub fn source(&self) -> FixtureSource {
        self.source
    }

    pub fn read(&self) -> Result<String, TextFileError> {
        self.root.read_entry(&self.entry)
    }
}

/// `true` for non-directory entries whose name ends in
/// [`FIXTURE_FILE_EXTENSION`].
pub fn is_fixture_file(entry: &FixtureEntry) -> bool {
    !entry.is_dir() && entry.file_name().ends_with(FIXTURE_FILE_EXTENSION)
}

/// Resolves the eligible fixture files of both roots.
///
/// Implementation-specific files come first, then specification files. A
/// root that cannot be listed contributes nothing: a missing implementation
/// root is logged at INFO, a failing specification root at WARN. When the
/// specification gate is disabled the specification root is not listed at
/// all.
pub fn locate_fixtures<'r>(
    config: &TckConfig,
    implementation_root: Option<&'r dyn FixtureRoot>,
    specification_root: Option<&'r dyn FixtureRoot>,
) -> Vec<LocatedFixture<'r>> {
    let mut located = vec![];

    match implementation_root {
        Some(root) => match root.list_entries() {
            Ok(entries) => located.extend(
                eligible(root, entries, FixtureSource::Implementation),
            ),
            Err(err) => log::info!(
                "No implementation specific tests found [{err}]",
            ),
        },
        None => log::info!(
            "No implementation specific tests found [no fixture root configured]",
        ),
    }

    if config.specification_tests_disabled() {
        log::info!("Specification tests are disabled; skipping specification fixtures.");
    } else {
        match specification_root {
            Some(root) => match root.list_entries() {
                Ok(entries) => located.extend(
                    eligible(root, entries, FixtureSource::Specification),
                ),
                Err(err) => log::warn!("No specification tests found [{err}]"),
            },
            None => log::warn!(
                "No specification tests found [no fixture root configured]",
            ),
        }
    }

    log::debug!("Located {} fixture files.", located.len());
    located
}

fn eligible<'r>(
    root: &'r dyn FixtureRoot,
    entries: Vec<FixtureEntry>,
    source: FixtureSource,
) -> impl Iterator<Item = LocatedFixture<'r>> {
    entries.into_iter()
        .filter(move |entry| {
            let keep = is_fixture_file(entry);
            if !keep {
                log::trace!(
                    "Skipping non-fixture entry {:#?} in {}.",
                    entry.path(),
                    root.location(),
                );
            }
            keep
        })
        .map(move |entry| LocatedFixture { root, entry, source })
}
