//! Sanskrit segmentation engine.
//!
//! Sanskrit text is written with words fused together by sandhi, the sound
//! changes that apply across word boundaries. This crate splits such text
//! back into words and tags each word with its grammatical reading. Given
//! SLP1 input, [`Chedaka::run`] builds a lattice of candidate word spans
//! (recognized directly by the lexicon, or after reversing a sandhi rule)
//! and selects the minimum-cost path under a statistical sequence model.
//!
//! The returned tokens tile the input exactly: concatenating their visible
//! text reproduces the input string, including spans the engine could not
//! recognize, which come back with no reading attached.
//!
//! ```no_run
//! use chedaka::{Chedaka, Config};
//!
//! let engine = Chedaka::new(Config::new("/path/to/data"))?;
//! for token in engine.run("arjuno gacCati") {
//!     println!("{} {:?}", token.text, token.lemma());
//! }
//! # Ok::<(), chedaka::Error>(())
//! ```

#![warn(clippy::unwrap_used)]

mod config;
mod lattice;
mod model;
mod viterbi;

pub use chedaka_core::{Pada, Token};
pub use chedaka_kosha::{Builder, Kosha, KoshaError};
pub use chedaka_sandhi::{SandhiError, Splitter};
pub use config::Config;
pub use model::{Model, ModelError, ModelParams, Tag};

/// Error type for constructing an engine instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Kosha(#[from] KoshaError),
    #[error(transparent)]
    Sandhi(#[from] SandhiError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A segmentation engine instance.
///
/// Owns the lexicon, the sandhi rule table, and the sequence model. All
/// construction work happens in [`Chedaka::new`]; segmentation itself
/// takes `&self` and allocates nothing shared, so one instance can serve
/// requests from many threads.
#[derive(Debug)]
pub struct Chedaka {
    kosha: Kosha,
    splitter: Splitter,
    model: Model,
}

impl Chedaka {
    /// Load an engine from the data directory described by `config`.
    ///
    /// Fails fast if any artifact is missing or malformed; a partially
    /// loaded engine would silently produce degenerate segmentations.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            kosha: Kosha::new(config.kosha())?,
            splitter: Splitter::from_csv(config.sandhi_rules())?,
            model: Model::from_dir(config.model())?,
        })
    }

    /// Assemble an engine from already-loaded components. Used by tests
    /// and benchmarks that build their data in memory.
    pub fn from_parts(kosha: Kosha, splitter: Splitter, model: Model) -> Self {
        Self {
            kosha,
            splitter,
            model,
        }
    }

    /// Segment `text` into tokens.
    ///
    /// Every token's `text` is a literal slice of the input, and the
    /// tokens tile the input in order with no gaps or overlaps. Spans the
    /// engine recognizes carry a grammatical reading; spans it does not
    /// come back with `info` of `None`. Empty input yields no tokens.
    pub fn run(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let path = viterbi::search(&self.kosha, &self.splitter, &self.model, &chars);

        let mut tokens = Vec::with_capacity(path.len());
        let mut covered = 0;
        for edge in path {
            assert_eq!(edge.start, covered, "token spans must chain");
            assert!(
                edge.end > edge.start,
                "empty span for form {:?}",
                edge.form
            );
            tokens.push(Token {
                text: chars[edge.start..edge.end].iter().collect(),
                info: edge.info,
            });
            covered = edge.end;
        }
        assert_eq!(covered, chars.len(), "tokens must cover the input");
        tokens
    }

    pub fn kosha(&self) -> &Kosha {
        &self.kosha
    }

    pub fn splitter(&self) -> &Splitter {
        &self.splitter
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}
