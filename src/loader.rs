use std::fs;
use std::path::Path;

use crate::Error;

/// The document read when no path is given.
pub const DEFAULT_DOCUMENT: &str = "document.json";

/// Reads the full contents of the document at `path`.
pub fn read_document(path: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    fs::read(path).map_err(|err| Error::read(path, &err))
}

/// Reads the full contents of the document at `path`, logging and returning
/// `None` if it cannot be read.
#[must_use]
pub fn load_document(path: impl AsRef<Path>) -> Option<Vec<u8>> {
    match read_document(path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::error!("{err}");
            None
        }
    }
}
