use crate::catalog::Release;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostConnectedMusician {
    pub musician_id: String,
    pub collaborator_count: usize,
}

/// Distinct musicians co-credited with `musician_id` across the given
/// releases, excluding the musician itself. First-degree collaborators
/// only, no transitive closure.
pub fn collaborator_ids(musician_id: &str, releases: &[Release]) -> FxHashSet<String> {
    let mut collaborators = FxHashSet::default();

    for release in releases {
        for credited_id in &release.credits {
            if credited_id != musician_id {
                collaborators.insert(credited_id.clone());
            }
        }
    }

    collaborators
}

pub fn collaborator_count(musician_id: &str, releases: &[Release]) -> usize {
    collaborator_ids(musician_id, releases).len()
}

/// The musician with the most distinct collaborators across the whole
/// catalog. Releases with fewer than two credits contribute nothing.
/// Ties resolve to whichever qualifying musician is encountered first
/// during map iteration; callers must not rely on a stable winner.
pub fn most_connected_musician(releases: &[Release]) -> Option<MostConnectedMusician> {
    let mut collaborator_sets: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();

    for release in releases {
        if release.credits.len() < 2 {
            continue;
        }
        for (i, id1) in release.credits.iter().enumerate() {
            for id2 in &release.credits[i + 1..] {
                if id1 == id2 {
                    continue;
                }
                collaborator_sets
                    .entry(id1.clone())
                    .or_default()
                    .insert(id2.clone());
                collaborator_sets
                    .entry(id2.clone())
                    .or_default()
                    .insert(id1.clone());
            }
        }
    }

    let mut most_connected: Option<MostConnectedMusician> = None;

    for (musician_id, collaborators) in collaborator_sets {
        let collaborator_count = collaborators.len();
        let replaces = most_connected
            .as_ref()
            .map_or(true, |best| collaborator_count > best.collaborator_count);

        if replaces {
            most_connected = Some(MostConnectedMusician {
                musician_id,
                collaborator_count,
            });
        }
    }

    most_connected
}
