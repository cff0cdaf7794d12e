//! A lexicon (*kosha*) of Sanskrit word-forms.
//!
//! The kosha maps SLP1 surface forms to one or more grammatical readings
//! ([`Pada`]). It answers three queries, all of which the segmenter issues
//! on its hot path:
//!
//! - [`Kosha::contains_key`] -- exact containment
//! - [`Kosha::contains_prefix`] -- is any stored form an extension of this?
//! - [`Kosha::get_all`] -- every reading of an exact form, in insertion order
//!
//! A kosha is built offline with [`Builder`], which accumulates entries and
//! is consumed by [`Builder::finish`] into an on-disk snapshot; the two
//! phases cannot be interleaved. At query time the kosha is immutable and
//! may be shared freely across threads.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use tempfile::NamedTempFile;

use chedaka_core::Pada;

/// File name of the kosha snapshot within its data directory.
const SNAPSHOT_FILE: &str = "padas.bin";

/// Error type for kosha I/O.
#[derive(Debug, thiserror::Error)]
pub enum KoshaError {
    #[error("kosha snapshot not found at {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not decode kosha snapshot: {0}")]
    Decode(#[from] bincode::Error),
}

// ---------------------------------------------------------------------------
// Trie
// ---------------------------------------------------------------------------

/// One trie node. Children are keyed by the next byte of the key; SLP1 is
/// ASCII, so bytes and sounds coincide.
#[derive(Debug, Default)]
struct Node {
    children: HashMap<u8, usize>,
    /// Readings of the form ending at this node, in insertion order.
    entries: Vec<Pada>,
}

// ---------------------------------------------------------------------------
// Kosha
// ---------------------------------------------------------------------------

/// An immutable lexicon of (surface form, reading) pairs.
#[derive(Debug)]
pub struct Kosha {
    nodes: Vec<Node>,
    num_entries: usize,
}

impl Kosha {
    /// Load a kosha from the snapshot in the directory at `path`.
    ///
    /// Fails fast if the snapshot is missing; the segmenter must never run
    /// against a silently empty lexicon.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, KoshaError> {
        let snapshot = path.as_ref().join(SNAPSHOT_FILE);
        if !snapshot.is_file() {
            return Err(KoshaError::NotFound(snapshot));
        }
        let reader = BufReader::new(File::open(&snapshot)?);
        let entries: Vec<(String, Pada)> = bincode::deserialize_from(reader)?;
        Ok(Self::from_entries(entries))
    }

    /// Build an in-memory kosha directly from entries, preserving their
    /// order. Used by tests and by callers that assemble a lexicon without
    /// touching disk.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Pada)>) -> Self {
        let mut kosha = Self {
            nodes: vec![Node::default()],
            num_entries: 0,
        };
        for (key, pada) in entries {
            kosha.insert(&key, pada);
        }
        kosha
    }

    fn insert(&mut self, key: &str, pada: Pada) {
        let mut idx = 0;
        for &byte in key.as_bytes() {
            idx = match self.nodes[idx].children.get(&byte) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[idx].children.insert(byte, next);
                    next
                }
            };
        }
        self.nodes[idx].entries.push(pada);
        self.num_entries += 1;
    }

    /// Walk the trie along `key`. Returns the final node index, or `None`
    /// if the walk falls off the trie.
    fn walk(&self, key: &str) -> Option<usize> {
        let mut idx = 0;
        for &byte in key.as_bytes() {
            idx = *self.nodes[idx].children.get(&byte)?;
        }
        Some(idx)
    }

    /// Returns true if `key` is a stored surface form.
    pub fn contains_key(&self, key: &str) -> bool {
        self.walk(key)
            .is_some_and(|idx| !self.nodes[idx].entries.is_empty())
    }

    /// Returns true if some stored surface form begins with `prefix`.
    ///
    /// Every stored form is a prefix of itself, so
    /// `contains_key(k)` implies `contains_prefix(k)`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// All readings of the exact form `key`, in insertion order. Empty if
    /// the form is absent.
    pub fn get_all(&self, key: &str) -> &[Pada] {
        match self.walk(key) {
            Some(idx) => &self.nodes[idx].entries,
            None => &[],
        }
    }

    /// The number of (form, reading) entries.
    pub fn len(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Write-only accumulator for building a kosha snapshot.
///
/// `finish` consumes the builder, so entries cannot be added after the
/// snapshot has been written.
#[derive(Debug)]
pub struct Builder {
    path: PathBuf,
    entries: Vec<(String, Pada)>,
}

impl Builder {
    /// Create a builder that will write its snapshot into the directory at
    /// `path` (created if missing).
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Record one (surface form, reading) entry. The same form may be
    /// inserted repeatedly with different readings; lookup returns them in
    /// insertion order.
    pub fn insert(&mut self, key: &str, pada: Pada) {
        self.entries.push((key.to_string(), pada));
    }

    /// Write the snapshot and consume the builder.
    ///
    /// The write is atomic: the snapshot is serialized to a temporary file
    /// in the target directory and renamed into place.
    pub fn finish(self) -> Result<(), KoshaError> {
        fs::create_dir_all(&self.path)?;
        let tmp = NamedTempFile::new_in(&self.path)?;
        let writer = BufWriter::new(&tmp);
        bincode::serialize_into(writer, &self.entries)?;
        tmp.persist(self.path.join(SNAPSHOT_FILE))
            .map_err(|e| KoshaError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chedaka_core::pada::{Avyaya, Linga, Pratipadika, Subanta, Vacana, Vibhakti};

    fn avyaya(text: &str) -> Pada {
        Pada::Avyaya(Avyaya {
            pratipadika: Pratipadika::new(text),
        })
    }

    fn subanta(stem: &str, vibhakti: Vibhakti) -> Pada {
        Pada::Subanta(Subanta {
            pratipadika: Pratipadika::new(stem),
            linga: Linga::Pum,
            vibhakti,
            vacana: Vacana::Eka,
            is_purvapada: false,
        })
    }

    fn sample() -> Kosha {
        Kosha::from_entries([
            ("gacCati".to_string(), avyaya("gacCati")),
            ("arjunas".to_string(), subanta("arjuna", Vibhakti::V1)),
            ("arjunam".to_string(), subanta("arjuna", Vibhakti::V2)),
        ])
    }

    #[test]
    fn contains_key_exact_only() {
        let k = sample();
        assert!(k.contains_key("gacCati"));
        assert!(k.contains_key("arjunas"));
        assert!(!k.contains_key("gacCat"));
        assert!(!k.contains_key("gacCatif"));
        assert!(!k.contains_key(""));
    }

    #[test]
    fn contains_prefix() {
        let k = sample();
        assert!(k.contains_prefix("g"));
        assert!(k.contains_prefix("gacC"));
        assert!(k.contains_prefix("gacCati")); // a form is its own prefix
        assert!(k.contains_prefix("arjuna"));
        assert!(!k.contains_prefix("gacCatf"));
        assert!(k.contains_prefix("")); // trivially true
    }

    #[test]
    fn get_all_returns_empty_for_missing() {
        let k = sample();
        assert!(k.get_all("missing").is_empty());
        assert!(k.get_all("gacCat").is_empty());
    }

    #[test]
    fn homonyms_preserve_insertion_order() {
        let k = Kosha::from_entries([
            ("asti".to_string(), avyaya("first")),
            ("asti".to_string(), avyaya("second")),
        ]);
        let all = k.get_all("asti");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].lemma(), "first");
        assert_eq!(all[1].lemma(), "second");
    }

    #[test]
    fn builder_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let kosha_dir = dir.path().join("kosha");

        let mut b = Builder::new(&kosha_dir);
        b.insert("gacCati", avyaya("gacCati"));
        b.insert("arjunas", subanta("arjuna", Vibhakti::V1));
        b.finish().expect("finish");

        let k = Kosha::new(&kosha_dir).expect("load");
        assert_eq!(k.len(), 2);
        assert!(k.contains_key("gacCati"));
        assert_eq!(k.get_all("arjunas"), &[subanta("arjuna", Vibhakti::V1)]);
    }

    #[test]
    fn missing_snapshot_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Kosha::new(dir.path().join("nowhere")).unwrap_err();
        assert!(matches!(err, KoshaError::NotFound(_)));
    }

    #[test]
    fn empty_kosha() {
        let k = Kosha::from_entries([]);
        assert!(k.is_empty());
        assert!(!k.contains_key("a"));
        assert!(!k.contains_prefix("a"));
    }
}
