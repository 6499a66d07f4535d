use crate::catalog::{Band, Release};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostConnectedBand {
    pub band_id: String,
    pub connection_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BandConnections {
    /// Per band, the other bands sharing at least one musician.
    pub connections: FxHashMap<String, FxHashSet<String>>,
    pub most_connected: Option<MostConnectedBand>,
}

impl BandConnections {
    pub fn connected_to(&self, band_id: &str) -> Option<&FxHashSet<String>> {
        self.connections.get(band_id)
    }
}

/// Every musician credited on any release of the band's discography.
/// Unknown release ids and empty credit lists are skipped.
fn band_musician_ids(
    band: &Band,
    releases_by_id: &FxHashMap<String, Release>,
) -> FxHashSet<String> {
    let mut musician_ids = FxHashSet::default();

    for release_id in &band.releases {
        if let Some(release) = releases_by_id.get(release_id) {
            musician_ids.extend(release.credits.iter().cloned());
        }
    }

    musician_ids
}

/// Computes band-to-band adjacency through shared musicians, plus the
/// most-connected band. First pass inverts musicians to bands; second
/// pass unions the inverted sets per band and removes the band itself.
/// The first band in input order wins ties for most connected.
pub fn band_connections(
    bands: &[Band],
    releases_by_id: &FxHashMap<String, Release>,
) -> BandConnections {
    let mut musician_to_bands: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();

    for band in bands {
        for musician_id in band_musician_ids(band, releases_by_id) {
            musician_to_bands
                .entry(musician_id)
                .or_default()
                .insert(band.id.clone());
        }
    }

    let mut connections = FxHashMap::default();
    let mut most_connected: Option<MostConnectedBand> = None;

    for band in bands {
        let mut connected_band_ids = FxHashSet::default();

        for musician_id in band_musician_ids(band, releases_by_id) {
            if let Some(band_ids) = musician_to_bands.get(&musician_id) {
                connected_band_ids
                    .extend(band_ids.iter().filter(|id| *id != &band.id).cloned());
            }
        }

        let connection_count = connected_band_ids.len();
        connections.insert(band.id.clone(), connected_band_ids);

        let replaces = most_connected
            .as_ref()
            .map_or(true, |best| connection_count > best.connection_count);

        if replaces {
            most_connected = Some(MostConnectedBand {
                band_id: band.id.clone(),
                connection_count,
            });
        }
    }

    BandConnections {
        connections,
        most_connected,
    }
}
