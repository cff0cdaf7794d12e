// Lattice edge enumeration.
//
// For one start node the builder enumerates every plausible edge leaving
// it: spans the lexicon recognizes directly, and spans the lexicon
// recognizes after a sandhi rule is reversed at some boundary inside the
// scan. The scan is pruned by prefix containment, so it never runs past
// the longest stored word-form.
//
// A node is a text position plus an optional "carry": when a sandhi rule
// fuses the end of one word with the start of the next into a single
// region (for example `a + i -> e`), the fused region is attributed to the
// left token's span and the right word's swallowed initial sounds are
// carried into the next node's lookups as an underlying prefix.

use chedaka_core::Pada;
use chedaka_kosha::Kosha;
use chedaka_sandhi::Splitter;

use crate::model::Tag;

/// One candidate edge in the segmentation lattice.
///
/// Edges are derived per request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Edge {
    /// Start of the visible span (character position).
    pub start: usize,
    /// End of the visible span; always greater than `start`.
    pub end: usize,
    /// The underlying word-form this edge was recognized as. Differs from
    /// the visible span when a sandhi rule was reversed.
    pub form: String,
    /// The selected reading; `None` only on synthetic unknown edges.
    pub info: Option<Pada>,
    /// The tag this edge emits from.
    pub tag: Tag,
    /// Underlying prefix the successor node must prepend to its lookups.
    pub carry_out: Option<String>,
}

impl Edge {
    /// Synthetic unknown edge covering `[start, end)`. Unknown edges
    /// discard any carry: the fused material is swallowed by the
    /// unrecognized span.
    pub fn unknown(start: usize, end: usize, text: &[char]) -> Self {
        Self {
            start,
            end,
            form: text[start..end].iter().collect(),
            info: None,
            tag: Tag::Unknown,
            carry_out: None,
        }
    }
}

/// Enumerate every lexicon-backed edge leaving the node `(start, carry)`.
///
/// Edges appear in a deterministic order: boundaries left to right; at
/// each boundary direct recognition before fusion-reversed recognition;
/// within a lookup, readings in lexicon insertion order. The path selector
/// relies on this order for its tie-break.
pub(crate) fn edges_from(
    kosha: &Kosha,
    splitter: &Splitter,
    text: &[char],
    start: usize,
    carry: &str,
) -> Vec<Edge> {
    let mut edges = Vec::new();

    // The underlying prefix accumulated so far: carry + text[start..b].
    let mut prefix = String::from(carry);

    for b in start..=text.len() {
        // Direct recognition of the span ending at b.
        if b > start && kosha.contains_key(&prefix) {
            for pada in kosha.get_all(&prefix) {
                edges.push(Edge {
                    start,
                    end: b,
                    form: prefix.clone(),
                    info: Some(pada.clone()),
                    tag: Tag::of(Some(pada)),
                    carry_out: None,
                });
            }
        }

        // Fusion-reversed recognition at boundary b.
        for split in splitter.split_at(text, b) {
            if !split.is_valid || split.first.is_empty() {
                continue;
            }
            let mut form = prefix.clone();
            form.push_str(&split.first);
            if !kosha.contains_key(&form) {
                continue;
            }
            // The rule determines where the right word resumes: after the
            // part of the fused region that still spells its initial
            // sounds, or past the whole region with those sounds carried.
            let (end, carry_out) = if split.keeps_second {
                (b + split.result_len - split.second.chars().count(), None)
            } else {
                (b + split.result_len, Some(split.second.clone()))
            };
            if end <= start {
                continue;
            }
            for pada in kosha.get_all(&form) {
                edges.push(Edge {
                    start,
                    end,
                    form: form.clone(),
                    info: Some(pada.clone()),
                    tag: Tag::of(Some(pada)),
                    carry_out: carry_out.clone(),
                });
            }
        }

        // Extend by one character, stopping once no stored form can begin
        // with the accumulated prefix. The splitter was already consulted
        // at the failure boundary above.
        if b == text.len() {
            break;
        }
        prefix.push(text[b]);
        if !kosha.contains_prefix(&prefix) {
            break;
        }
    }

    edges
}
