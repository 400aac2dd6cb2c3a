use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/tests/fixtures")
    })
}

pub fn specification_fixtures_dir() -> PathBuf {
    get_fixtures_dir().join("specification")
}

pub fn implementation_fixtures_dir() -> PathBuf {
    get_fixtures_dir().join("implementation")
}

/// Sorted file names, for comparing listings whose order is filesystem
/// dependent.
pub fn sorted_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort();
    names
}
