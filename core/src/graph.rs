use crate::catalog::Release;
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency over musician ids. Symmetric: if B is a neighbor of A then
/// A is a neighbor of B. Neighbor iteration order is unspecified.
pub type MusicianGraph = FxHashMap<String, FxHashSet<String>>;

/// Builds the collaboration graph from release credit lists. Two
/// musicians are adjacent iff at least one release credits them both.
/// Every credited musician gets a node, so solo-only musicians appear
/// with an empty neighbor set.
pub fn build_musician_graph(releases: &[Release]) -> MusicianGraph {
    let mut graph = MusicianGraph::default();

    for release in releases {
        for musician_id in &release.credits {
            graph.entry(musician_id.clone()).or_default();
        }

        for (i, musician_id) in release.credits.iter().enumerate() {
            for other_id in &release.credits[i + 1..] {
                if musician_id == other_id {
                    continue;
                }
                graph
                    .entry(musician_id.clone())
                    .or_default()
                    .insert(other_id.clone());
                graph
                    .entry(other_id.clone())
                    .or_default()
                    .insert(musician_id.clone());
            }
        }
    }

    graph
}
