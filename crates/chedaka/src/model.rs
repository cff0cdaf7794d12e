// Statistical sequence model.
//
// The model scores a candidate segmentation as a first-order hidden state
// sequence: each token emits from a coarse part-of-speech tag, and the tag
// sequence itself is scored by transition costs. All costs are negative
// base-10 log probabilities, so the minimum-cost path is the maximum-
// probability segmentation. Missing table entries cost a large but finite
// penalty, which keeps unseen-but-recognized paths comparable to the
// unknown-token fallback instead of ruling them out.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use chedaka_core::Pada;

/// Transitions file within the model directory.
const TRANSITIONS_FILE: &str = "transitions.csv";
/// Emissions file within the model directory.
const EMISSIONS_FILE: &str = "emissions.csv";
/// Lemma frequency file within the model directory.
const LEMMA_COUNTS_FILE: &str = "lemma-counts.csv";

/// Error type for loading the sequence model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model file not found at {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed row in {file} on line {line}")]
    MalformedRow { file: &'static str, line: usize },
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// The hidden state of the sequence model.
///
/// Tags are coarser than a full grammatical reading: one state per
/// part-of-speech family, plus the designated start state and the state
/// emitted by unrecognized spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Designated start state; never emitted by a token.
    Init,
    Avyaya,
    Subanta,
    Tinanta,
    /// State of spans the lexicon does not recognize.
    Unknown,
}

impl Tag {
    /// All tags, in the fixed order used for deterministic iteration.
    pub const ALL: [Tag; 5] = [
        Tag::Init,
        Tag::Avyaya,
        Tag::Subanta,
        Tag::Tinanta,
        Tag::Unknown,
    ];

    /// The tag emitted by a token with the given reading (`None` for an
    /// unrecognized span).
    pub fn of(info: Option<&Pada>) -> Tag {
        match info {
            Some(Pada::Avyaya(_)) => Tag::Avyaya,
            Some(Pada::Subanta(_)) => Tag::Subanta,
            Some(Pada::Tinanta(_)) => Tag::Tinanta,
            None => Tag::Unknown,
        }
    }

    /// Parse a tag name as it appears in the model files. Returns `None`
    /// for names outside the closed tag set, which the loader skips so
    /// that models trained with richer tagsets still load.
    fn parse(name: &str) -> Option<Tag> {
        match name {
            "Init" | "START" => Some(Tag::Init),
            "Avyaya" => Some(Tag::Avyaya),
            "Subanta" => Some(Tag::Subanta),
            "Tinanta" => Some(Tag::Tinanta),
            "Unknown" => Some(Tag::Unknown),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Init => "Init",
            Tag::Avyaya => "Avyaya",
            Tag::Subanta => "Subanta",
            Tag::Tinanta => "Tinanta",
            Tag::Unknown => "Unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Tunable cost constants.
#[derive(Debug, Clone, Copy)]
pub struct ModelParams {
    /// Penalty per character of an unrecognized span. Scaling with length
    /// keeps a long unknown span from undercutting a recognized multi-word
    /// path, while several short unknown tokens still lose to one long one
    /// on the extra transitions they pay.
    pub unknown_cost: f64,
    /// Cost of a transition or emission absent from the tables. Large but
    /// finite, and smaller than `unknown_cost` so that a recognized word
    /// with no statistics still beats the unknown fallback.
    pub missing_cost: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            unknown_cost: 20.0,
            missing_cost: 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Transition, emission, and lemma-frequency cost tables.
#[derive(Debug)]
pub struct Model {
    transitions: HashMap<(Tag, Tag), f64>,
    emissions: HashMap<Tag, HashMap<String, f64>>,
    /// Frequency-derived fallback cost per lemma, used when the emission
    /// table has no entry for a (tag, lemma) pair.
    lemma_costs: HashMap<String, f64>,
    params: ModelParams,
}

impl Model {
    /// Create an empty model with the given parameters. With empty tables
    /// every cost query returns `missing_cost`, which makes all recognized
    /// segmentations equally likely; useful for tests and as a neutral
    /// default.
    pub fn new(params: ModelParams) -> Self {
        Self {
            transitions: HashMap::new(),
            emissions: HashMap::new(),
            lemma_costs: HashMap::new(),
            params,
        }
    }

    /// Load the model from the directory at `path`, which must contain
    /// `transitions.csv`, `emissions.csv`, and `lemma-counts.csv`.
    ///
    /// Fails fast if any file is missing.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let mut model = Self::new(ModelParams::default());

        for (row, line) in read_rows(path, TRANSITIONS_FILE, 3)? {
            let prob = parse_probability(&row[2], TRANSITIONS_FILE, line)?;
            if let (Some(prev), Some(cur)) = (Tag::parse(&row[0]), Tag::parse(&row[1])) {
                model.set_transition(prev, cur, cost_of(prob));
            }
        }

        for (row, line) in read_rows(path, EMISSIONS_FILE, 3)? {
            let prob = parse_probability(&row[2], EMISSIONS_FILE, line)?;
            if let Some(tag) = Tag::parse(&row[0]) {
                model.set_emission(tag, &row[1], cost_of(prob));
            }
        }

        // Lemma counts become a frequency-smoothed fallback cost.
        let mut counts: Vec<(String, u64)> = Vec::new();
        let mut total: u64 = 0;
        for (row, line) in read_rows(path, LEMMA_COUNTS_FILE, 3)? {
            let count: u64 = row[2].trim().parse().map_err(|_| ModelError::MalformedRow {
                file: LEMMA_COUNTS_FILE,
                line,
            })?;
            total += count;
            counts.push((row[0].clone(), count));
        }
        if total > 0 {
            for (lemma, count) in counts {
                if count > 0 {
                    model
                        .lemma_costs
                        .insert(lemma, cost_of(count as f64 / total as f64));
                }
            }
        }

        Ok(model)
    }

    /// Record a transition cost. Later writes replace earlier ones.
    pub fn set_transition(&mut self, prev: Tag, cur: Tag, cost: f64) {
        self.transitions.insert((prev, cur), cost);
    }

    /// Record an emission cost for a (tag, lemma) pair.
    pub fn set_emission(&mut self, tag: Tag, lemma: &str, cost: f64) {
        self.emissions
            .entry(tag)
            .or_default()
            .insert(lemma.to_string(), cost);
    }

    /// The cost of moving from tag `prev` to tag `cur`.
    pub fn transition_cost(&self, prev: Tag, cur: Tag) -> f64 {
        self.transitions
            .get(&(prev, cur))
            .copied()
            .unwrap_or(self.params.missing_cost)
    }

    /// The cost of tag `tag` emitting the given lemma. Falls back to the
    /// lemma frequency table, then to the missing-entry penalty.
    pub fn emission_cost(&self, tag: Tag, lemma: &str) -> f64 {
        if let Some(&cost) = self.emissions.get(&tag).and_then(|m| m.get(lemma)) {
            return cost;
        }
        self.lemma_costs
            .get(lemma)
            .copied()
            .unwrap_or(self.params.missing_cost)
    }

    /// The per-character penalty for an unrecognized span.
    pub fn unknown_cost(&self) -> f64 {
        self.params.unknown_cost
    }

    pub fn params(&self) -> ModelParams {
        self.params
    }
}

// ---------------------------------------------------------------------------
// CSV plumbing
// ---------------------------------------------------------------------------

/// Convert a probability to a cost. Non-positive probabilities would map
/// to infinity; clamp them to a tiny value so costs stay finite.
fn cost_of(probability: f64) -> f64 {
    -probability.max(f64::MIN_POSITIVE).log10()
}

fn parse_probability(field: &str, file: &'static str, line: usize) -> Result<f64, ModelError> {
    field
        .trim()
        .parse()
        .map_err(|_| ModelError::MalformedRow { file, line })
}

/// Read a headered CSV file into rows of exactly `arity` fields.
/// Returns (fields, 1-based line number) pairs, skipping the header and
/// blank lines. Fails fast if the file is missing.
fn read_rows(
    dir: &Path,
    file: &'static str,
    arity: usize,
) -> Result<Vec<(Vec<String>, usize)>, ModelError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(ModelError::NotFound(path));
    }
    let text = fs::read_to_string(&path)?;

    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if i == 0 || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();
        if fields.len() != arity {
            return Err(ModelError::MalformedRow { file, line: i + 1 });
        }
        rows.push((fields, i + 1));
    }
    Ok(rows)
}
