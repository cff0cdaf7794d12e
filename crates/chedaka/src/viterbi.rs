// Minimum-cost path search over the segmentation lattice.
//
// A search state is a text position, the carry owed to the next lookup,
// and the tag of the last token. States are expanded strictly left to
// right; every edge consumes at least one character, so position order is
// a topological order of the lattice. Within a position, states are
// expanded in discovery order and relaxation uses a strict comparison, so
// on equal cost the first path found wins. Together with the fixed edge
// enumeration order this makes the search fully deterministic.

use hashbrown::HashMap;

use chedaka_kosha::Kosha;
use chedaka_sandhi::Splitter;

use crate::lattice::{self, Edge};
use crate::model::{Model, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateKey {
    pos: usize,
    carry: String,
    tag: Tag,
}

struct StateEntry {
    cost: f64,
    back: Option<(StateKey, Edge)>,
}

/// Find the minimum-cost segmentation of `text`, as the edge sequence of
/// the best path from position 0 to the end of the text with no carry
/// outstanding. Returns an empty sequence only for empty input: unknown
/// edges guarantee every nonempty text has at least one complete path.
pub(crate) fn search(
    kosha: &Kosha,
    splitter: &Splitter,
    model: &Model,
    text: &[char],
) -> Vec<Edge> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut entries: HashMap<StateKey, StateEntry> = HashMap::new();
    // States at each position, in discovery order.
    let mut nodes_at: Vec<Vec<StateKey>> = vec![Vec::new(); text.len() + 1];

    let start = StateKey {
        pos: 0,
        carry: String::new(),
        tag: Tag::Init,
    };
    entries.insert(
        start.clone(),
        StateEntry {
            cost: 0.0,
            back: None,
        },
    );
    nodes_at[0].push(start);

    for pos in 0..text.len() {
        // Expansion discovers states only at later positions, so the list
        // at `pos` is complete by the time we reach it.
        for i in 0.. {
            let Some(key) = nodes_at[pos].get(i).cloned() else {
                break;
            };
            let base = entries[&key].cost;

            let mut edges = lattice::edges_from(kosha, splitter, text, pos, &key.carry);

            // Fallback edges to every position not already reachable by a
            // carry-free recognized edge. The penalty scales with length;
            // splitting an unknown span pays extra transitions, so one
            // long unknown token still beats several short ones.
            for end in pos + 1..=text.len() {
                let covered = edges
                    .iter()
                    .any(|e| e.end == end && e.carry_out.is_none());
                if !covered {
                    edges.push(Edge::unknown(pos, end, text));
                }
            }

            for edge in edges {
                let word_cost = match edge.info {
                    Some(ref pada) => model.emission_cost(edge.tag, pada.lemma()),
                    None => model.unknown_cost() * (edge.end - edge.start) as f64,
                };
                let cost = base + model.transition_cost(key.tag, edge.tag) + word_cost;

                let next = StateKey {
                    pos: edge.end,
                    carry: edge.carry_out.clone().unwrap_or_default(),
                    tag: edge.tag,
                };
                match entries.get_mut(&next) {
                    Some(entry) => {
                        if cost < entry.cost {
                            entry.cost = cost;
                            entry.back = Some((key.clone(), edge));
                        }
                    }
                    None => {
                        nodes_at[next.pos].push(next.clone());
                        entries.insert(
                            next,
                            StateEntry {
                                cost,
                                back: Some((key.clone(), edge)),
                            },
                        );
                    }
                }
            }
        }
    }

    // The path must end at the last position with nothing carried over.
    let mut best: Option<&StateKey> = None;
    let mut best_cost = f64::INFINITY;
    for key in &nodes_at[text.len()] {
        if !key.carry.is_empty() {
            continue;
        }
        let cost = entries[key].cost;
        if cost < best_cost {
            best_cost = cost;
            best = Some(key);
        }
    }

    let Some(terminal) = best else {
        // Unreachable for nonempty text; unknown edges span everything.
        return Vec::new();
    };

    let mut path = Vec::new();
    let mut cursor = terminal.clone();
    while let Some((prev, edge)) = entries[&cursor].back.as_ref() {
        path.push(edge.clone());
        cursor = prev.clone();
    }
    path.reverse();
    path
}
