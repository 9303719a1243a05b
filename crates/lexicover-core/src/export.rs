//! Word-list output files.
//!
//! Both derived artifacts are written as a flat JSON array of strings with
//! one-space indentation:
//!
//! ```json
//! [
//!  "apple",
//!  "banana"
//! ]
//! ```

use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, instrument};

/// Errors raised while writing a word list.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Render `words` as a one-space-indented JSON array.
///
/// # Errors
///
/// Propagates the serializer error; writing into memory cannot fail
/// otherwise.
pub fn to_json_list<S: Serialize>(words: &[S]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    words.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `words` to `path`, creating parent directories as needed.
///
/// Returns the number of words written.
///
/// # Errors
///
/// [`ExportError::Serialize`] if encoding fails, [`ExportError::Io`] if the
/// directory or file cannot be written.
#[instrument(skip_all, fields(path = %path.display(), words = words.len()))]
pub fn write_word_list<S: Serialize>(path: &Path, words: &[S]) -> Result<usize, ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = to_json_list(words).map_err(|source| ExportError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    debug!("wrote word list");
    Ok(words.len())
}
