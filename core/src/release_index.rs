use crate::catalog::Release;
use rustc_hash::{FxHashMap, FxHashSet};

/// An unordered musician pair, canonicalized so the lexicographically
/// smaller id always comes first. Lookups match regardless of argument
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MusicianPair {
    first: String,
    second: String,
}

impl MusicianPair {
    pub fn new(id1: &str, id2: &str) -> Self {
        if id1 <= id2 {
            Self {
                first: id1.to_string(),
                second: id2.to_string(),
            }
        } else {
            Self {
                first: id2.to_string(),
                second: id1.to_string(),
            }
        }
    }
}

/// Maps a musician pair to the ids of the releases crediting both, in
/// catalog order. Pairs with no co-crediting release are absent.
pub type ReleasePairIndex = FxHashMap<MusicianPair, Vec<String>>;

pub fn build_release_index(releases: &[Release]) -> ReleasePairIndex {
    let mut index = ReleasePairIndex::default();

    for release in releases {
        // Duplicate credits within one release collapse.
        let mut seen = FxHashSet::default();
        let credits: Vec<&String> = release
            .credits
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .collect();

        for (i, id1) in credits.iter().enumerate() {
            for id2 in &credits[i + 1..] {
                index
                    .entry(MusicianPair::new(id1.as_str(), id2.as_str()))
                    .or_default()
                    .push(release.id.clone());
            }
        }
    }

    index
}

/// The releases connecting two musicians, empty for an uncredited pair.
pub fn get_connecting_releases<'a>(
    index: &'a ReleasePairIndex,
    id1: &str,
    id2: &str,
) -> &'a [String] {
    index
        .get(&MusicianPair::new(id1, id2))
        .map_or(&[], Vec::as_slice)
}
