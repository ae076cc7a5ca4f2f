//! Default on-disk locations for word lists.
//!
//! ```text
//! <base>/
//!   dictionaries/<code>.txt   one word per line
//!   stopwords/<code>.json     JSON array, or
//!   stopwords/<code>.txt      one word per line
//! ```
//!
//! The base is `<platform data dir>/polyseg` (e.g. `~/.local/share/polyseg`)
//! when the `data-dir` feature is enabled, `.` otherwise.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::language::Language;
use crate::stopwords::DirectoryStopwords;

/// Get the default base path for word lists
pub fn default_base_path() -> PathBuf {
    #[cfg(feature = "data-dir")]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("polyseg")
    }
    #[cfg(not(feature = "data-dir"))]
    {
        PathBuf::from(".")
    }
}

fn base_or_default(base_path: Option<&Path>) -> PathBuf {
    base_path
        .map(PathBuf::from)
        .unwrap_or_else(default_base_path)
}

/// Directory holding stopword lists
pub fn stopwords_dir(base_path: Option<&Path>) -> PathBuf {
    base_or_default(base_path).join("stopwords")
}

/// Directory holding dictionaries
pub fn dictionaries_dir(base_path: Option<&Path>) -> PathBuf {
    base_or_default(base_path).join("dictionaries")
}

/// Conventional dictionary file for a language
pub fn dictionary_path(language: &Language, base_path: Option<&Path>) -> PathBuf {
    dictionaries_dir(base_path).join(format!("{}.txt", language.primary()))
}

/// Stopword source reading from the stopword directory
pub fn stopword_source(base_path: Option<&Path>) -> DirectoryStopwords {
    DirectoryStopwords::new(stopwords_dir(base_path))
}

/// List all dictionary files under the base path, sorted
pub fn list_dictionary_files(base_path: Option<&Path>) -> io::Result<Vec<PathBuf>> {
    let dir = dictionaries_dir(base_path);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
