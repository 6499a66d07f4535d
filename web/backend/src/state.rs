use crate::contentful::ContentClient;
use bandtree_core::{
    Band, BandConnections, Musician, MusicianGraph, Release, ReleasePairIndex, Snapshot,
    band_connections, build_musician_graph, build_release_index, collaborator_count,
    normalize::clean_str,
};
use moka::future::Cache;
use rustc_hash::FxHashMap;
use std::time::Duration;

const COLLABORATOR_CACHE_CAPACITY: u64 = 10_000;
const COLLABORATOR_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Everything a request handler needs: the snapshot, the derived
/// structures, and the lookup maps. Built once before serving and
/// never mutated afterwards, so handlers share it lock-free.
pub struct AppState {
    pub snapshot: Snapshot,
    pub musicians_by_id: FxHashMap<String, Musician>,
    pub releases_by_id: FxHashMap<String, Release>,
    pub bands_by_id: FxHashMap<String, Band>,
    pub name_lookup: FxHashMap<String, Vec<String>>,
    pub graph: MusicianGraph,
    pub release_index: ReleasePairIndex,
    pub band_connections: BandConnections,
    pub content: Option<ContentClient>,
    collaborator_cache: Cache<String, usize>,
}

impl AppState {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = ContentClient::from_env()?;
        let snapshot = client
            .fetch_snapshot()
            .await
            .map_err(|e| -> Box<dyn std::error::Error> { e })?;

        tracing::info!(
            musicians = snapshot.musicians.len(),
            releases = snapshot.releases.len(),
            bands = snapshot.bands.len(),
            "catalog snapshot loaded"
        );

        Ok(Self::from_snapshot(snapshot, Some(client)))
    }

    /// Builds all derived structures from an already-fetched snapshot.
    /// With no client attached, collaboration counts fall back to
    /// scanning the snapshot.
    pub fn from_snapshot(snapshot: Snapshot, content: Option<ContentClient>) -> Self {
        let graph = build_musician_graph(&snapshot.releases);
        let release_index = build_release_index(&snapshot.releases);
        let releases_by_id = snapshot.releases_by_id();
        let band_connections = band_connections(&snapshot.bands, &releases_by_id);

        let mut name_lookup: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for musician in &snapshot.musicians {
            name_lookup
                .entry(clean_str(&musician.name))
                .or_default()
                .push(musician.id.clone());
        }

        let collaborator_cache = Cache::builder()
            .max_capacity(COLLABORATOR_CACHE_CAPACITY)
            .time_to_live(COLLABORATOR_CACHE_TTL)
            .build();

        Self {
            musicians_by_id: snapshot.musicians_by_id(),
            bands_by_id: snapshot.bands_by_id(),
            releases_by_id,
            name_lookup,
            graph,
            release_index,
            band_connections,
            snapshot,
            content,
            collaborator_cache,
        }
    }

    /// Distinct-collaborator count for one musician, memoized. Prefers
    /// the targeted content-store query; a failed fetch degrades to the
    /// snapshot already in memory.
    pub async fn collaborator_count_for(&self, musician_id: &str) -> usize {
        if let Some(count) = self.collaborator_cache.get(musician_id).await {
            return count;
        }

        let releases = match &self.content {
            Some(client) => match client.fetch_releases_for_musician(musician_id).await {
                Ok(releases) => releases,
                Err(error) => {
                    tracing::warn!(
                        musician_id,
                        error = %error,
                        "targeted release fetch failed, scanning snapshot"
                    );
                    self.releases_crediting(musician_id)
                }
            },
            None => self.releases_crediting(musician_id),
        };

        let count = collaborator_count(musician_id, &releases);
        self.collaborator_cache
            .insert(musician_id.to_string(), count)
            .await;
        count
    }

    fn releases_crediting(&self, musician_id: &str) -> Vec<Release> {
        self.snapshot
            .releases
            .iter()
            .filter(|release| release.credits.iter().any(|id| id == musician_id))
            .cloned()
            .collect()
    }
}
