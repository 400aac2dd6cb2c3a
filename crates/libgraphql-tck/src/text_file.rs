use std::path::Path;
use std::path::PathBuf;

/// Loads a file that the suite treats as opaque text (a fixture file or a
/// schema document).
///
/// Content must be UTF-8. Anything else is reported as
/// [`TextFileError::NotUtf8`] and is never lossily decoded.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String, TextFileError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TextFileError::NotAFile(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|err| TextFileError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| TextFileError::NotUtf8 {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum TextFileError {
    #[error("`{}` could not be read: {err}", .path.display())]
    Io {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{}` is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error(
        "`{}` is not valid UTF-8 (first invalid byte at offset {valid_up_to})",
        .path.display(),
    )]
    NotUtf8 {
        path: PathBuf,
        valid_up_to: usize,
    },
}
impl std::cmp::PartialEq for TextFileError {
    fn eq(&self, other: &Self) -> bool {
        use TextFileError::*;
        match (self, other) {
            (Io { path: a_path, err: a_err }, Io { path: b_path, err: b_err }) =>
                a_path == b_path && a_err.kind() == b_err.kind(),

            (NotAFile(a_path), NotAFile(b_path)) => a_path == b_path,

            (NotUtf8 { path: a_path, valid_up_to: a_offset },
             NotUtf8 { path: b_path, valid_up_to: b_offset }) =>
                a_path == b_path && a_offset == b_offset,

            _ => false,
        }
    }
}
