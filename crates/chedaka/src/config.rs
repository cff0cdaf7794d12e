//! Locations of the data files an engine instance loads at startup.

use std::path::{Path, PathBuf};

/// Paths to the three data artifacts under a common base directory:
/// the lexicon snapshot, the sandhi rule table, and the sequence model.
///
/// The layout is fixed relative to the base so that tooling which writes
/// the artifacts and the engine that reads them always agree.
#[derive(Debug, Clone)]
pub struct Config {
    base: PathBuf,
}

impl Config {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the lexicon snapshot.
    pub fn kosha(&self) -> PathBuf {
        self.base.join("kosha")
    }

    /// The sandhi rule CSV file.
    pub fn sandhi_rules(&self) -> PathBuf {
        self.base.join("sandhi-rules.csv")
    }

    /// Directory holding the sequence model CSV files.
    pub fn model(&self) -> PathBuf {
        self.base.join("model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_base() {
        let config = Config::new("/data/chedaka");
        assert_eq!(config.kosha(), PathBuf::from("/data/chedaka/kosha"));
        assert_eq!(
            config.sandhi_rules(),
            PathBuf::from("/data/chedaka/sandhi-rules.csv")
        );
        assert_eq!(config.model(), PathBuf::from("/data/chedaka/model"));
    }
}
