//! Dictionary loading and graph population.
//!
//! # Source Format
//!
//! Each source file is a JSON object mapping a word to the ordered list of
//! words used in its definition:
//!
//! ```json
//! {
//!   "apple": ["fruit", "tree"],
//!   "apricot": ["fruit", "orange"]
//! }
//! ```
//!
//! The conventional layout is one file per initial letter (`A.json` …
//! `Z.json`) in a single directory. Entries within a file are taken in key
//! order so population is reproducible.
//!
//! # Population Order
//!
//! [`Dictionary::populate`] inserts every vertex of the whole dataset before
//! inserting any edge. `add_edge` silently ignores missing endpoints, so
//! interleaving the two phases would drop edges to words defined later.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::graph::DirectedGraph;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while reading dictionary source files.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON object of string arrays.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DictionaryError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

// ---------------------------------------------------------------------------
// Definition / Dictionary
// ---------------------------------------------------------------------------

/// One dictionary entry: a word and the words that define it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub words: Vec<String>,
}

/// What [`Dictionary::load_dir`] read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Files parsed successfully.
    pub files_loaded: usize,
    /// Definitions appended across all loaded files.
    pub definitions: usize,
    /// Listed files that did not exist and were skipped.
    pub missing: Vec<PathBuf>,
}

/// An ordered collection of definitions. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    definitions: Vec<Definition>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, words: Vec<String>) {
        self.definitions.push(Definition {
            name: name.into(),
            words,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }

    /// Parse one source file and append its entries.
    ///
    /// Returns the number of definitions appended.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Io`] if the file cannot be read,
    /// [`DictionaryError::Parse`] if it is not an object of string arrays.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_file(&mut self, path: &Path) -> Result<usize, DictionaryError> {
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&text).map_err(|source| DictionaryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let count = entries.len();
        self.definitions.extend(
            entries
                .into_iter()
                .map(|(name, words)| Definition { name, words }),
        );
        debug!(definitions = count, "loaded dictionary file");
        Ok(count)
    }

    /// Load each of `files` from `dir`, skipping files that do not exist.
    ///
    /// # Errors
    ///
    /// Any [`DictionaryError`] other than a missing file aborts the load.
    #[instrument(skip_all, fields(dir = %dir.display(), files = files.len()))]
    pub fn load_dir<S: AsRef<str>>(
        &mut self,
        dir: &Path,
        files: &[S],
    ) -> Result<LoadSummary, DictionaryError> {
        let mut summary = LoadSummary::default();

        for file in files {
            let path = dir.join(file.as_ref());
            match self.load_file(&path) {
                Ok(count) => {
                    summary.files_loaded += 1;
                    summary.definitions += count;
                }
                Err(err) if err.is_not_found() => {
                    warn!(path = %path.display(), "dictionary file not found, skipping");
                    summary.missing.push(path);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    /// Insert every word as a vertex, then every `name → word` edge.
    pub fn populate(&self, graph: &mut DirectedGraph) {
        for definition in &self.definitions {
            graph.add_vertex(&definition.name);
            for word in &definition.words {
                graph.add_vertex(word);
            }
        }

        for definition in &self.definitions {
            for word in &definition.words {
                graph.add_edge(&definition.name, word);
            }
        }
    }

    /// Build a fresh graph from this dictionary.
    #[must_use]
    pub fn to_graph(&self) -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        self.populate(&mut graph);
        graph
    }
}

impl FromIterator<Definition> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("write dictionary file");
    }

    #[test]
    fn populate_keeps_edges_to_later_definitions() {
        let mut dict = Dictionary::new();
        // "apple" references "fruit" before "fruit" is itself defined.
        dict.push("apple", words(&["fruit"]));
        dict.push("fruit", words(&["plant"]));

        let graph = dict.to_graph();
        assert_eq!(graph.len(), 3);
        assert!(graph.has_edge("apple", "fruit"));
        assert!(graph.has_edge("fruit", "plant"));
    }

    #[test]
    fn duplicate_names_are_idempotent() {
        let mut dict = Dictionary::new();
        dict.push("cat", words(&["animal"]));
        dict.push("cat", words(&["animal", "pet"]));

        let graph = dict.to_graph();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.out_degree("cat"), 2);
        assert_eq!(graph.in_degree("animal"), 1);
    }

    #[test]
    fn load_file_reads_entries_in_key_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "A.json", r#"{"b": ["x"], "a": ["y", "z"]}"#);

        let mut dict = Dictionary::new();
        let count = dict.load_file(&dir.path().join("A.json")).expect("load");

        assert_eq!(count, 2);
        let names: Vec<&str> = dict.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(dict.iter().next().map(|d| d.words.clone()), Some(words(&["y", "z"])));
    }

    #[test]
    fn load_file_rejects_non_string_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "A.json", r#"{"a": [1, 2]}"#);

        let mut dict = Dictionary::new();
        let err = dict
            .load_file(&dir.path().join("A.json"))
            .expect_err("numbers are not words");
        assert!(matches!(err, DictionaryError::Parse { .. }));
        assert!(err.to_string().contains("A.json"));
        assert!(dict.is_empty());
    }

    #[test]
    fn load_dir_skips_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "A.json", r#"{"ant": ["insect"]}"#);
        write(dir.path(), "C.json", r#"{"cat": ["animal"], "cow": ["animal"]}"#);

        let mut dict = Dictionary::new();
        let summary = dict
            .load_dir(dir.path(), &["A.json", "B.json", "C.json"])
            .expect("load dir");

        assert_eq!(summary.files_loaded, 2);
        assert_eq!(summary.definitions, 3);
        assert_eq!(summary.missing, vec![dir.path().join("B.json")]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn load_dir_aborts_on_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "A.json", "{not json");

        let mut dict = Dictionary::new();
        let err = dict
            .load_dir(dir.path(), &["A.json"])
            .expect_err("malformed file must fail");
        assert_eq!(err.path(), dir.path().join("A.json"));
    }
}
