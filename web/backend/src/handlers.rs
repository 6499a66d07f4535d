use crate::models::{
    BandConnectionsResponse, BandSummary, CollaboratorsResponse, HealthResponse,
    MostConnectedBandResponse, MostConnectedMusicianResponse, MusicianSummary, PathQuery,
    PathResponse, ReleaseSummary, SearchQuery, SearchResponse, StatsResponse,
};
use crate::pathing::find_path_between_musicians;
use crate::search::search_musicians_in_state;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use bandtree_core::most_connected_musician as find_most_connected_musician;
use std::sync::Arc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Bandtree API is running".to_string(),
    })
}

pub async fn search_musicians(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let query = params.q.trim();
    let (results, count) = search_musicians_in_state(&state, query, params.limit);

    Json(SearchResponse {
        query: query.to_string(),
        results,
        count,
    })
}

pub async fn find_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathQuery>,
) -> Json<PathResponse> {
    Json(find_path_between_musicians(
        &state,
        &params.from_id,
        &params.to_id,
    ))
}

pub async fn musician_collaborators(
    State(state): State<Arc<AppState>>,
    Path(musician_id): Path<String>,
) -> Json<CollaboratorsResponse> {
    let collaborator_count = state.collaborator_count_for(&musician_id).await;

    Json(CollaboratorsResponse {
        musician_id,
        collaborator_count,
    })
}

pub async fn most_connected_musician(
    State(state): State<Arc<AppState>>,
) -> Json<MostConnectedMusicianResponse> {
    let most_connected = find_most_connected_musician(&state.snapshot.releases);

    let response = most_connected.map_or(
        MostConnectedMusicianResponse {
            musician: None,
            collaborator_count: 0,
        },
        |top| MostConnectedMusicianResponse {
            musician: state.musicians_by_id.get(&top.musician_id).map(|musician| {
                MusicianSummary {
                    id: musician.id.clone(),
                    name: musician.name.clone(),
                    slug: musician.slug.clone(),
                }
            }),
            collaborator_count: top.collaborator_count,
        },
    );

    Json(response)
}

pub async fn band_connections(
    State(state): State<Arc<AppState>>,
    Path(band_id): Path<String>,
) -> Json<BandConnectionsResponse> {
    let Some(band) = state.bands_by_id.get(&band_id) else {
        return Json(BandConnectionsResponse {
            band: None,
            releases: vec![],
            connected_bands: vec![],
            connection_count: 0,
        });
    };

    let mut releases: Vec<ReleaseSummary> = band
        .releases
        .iter()
        .filter_map(|release_id| state.releases_by_id.get(release_id))
        .map(|release| ReleaseSummary {
            id: release.id.clone(),
            title: release.title.clone(),
            year: release.year,
            slug: release.slug.clone(),
        })
        .collect();
    // Latest releases first, undated ones at the end.
    releases.sort_by_key(|release| std::cmp::Reverse(release.year.unwrap_or(i32::MIN)));

    let mut connected_bands: Vec<BandSummary> = state
        .band_connections
        .connected_to(&band_id)
        .into_iter()
        .flatten()
        .filter_map(|connected_id| state.bands_by_id.get(connected_id))
        .map(|connected| BandSummary {
            id: connected.id.clone(),
            name: connected.name.clone(),
            slug: connected.slug.clone(),
        })
        .collect();
    connected_bands.sort_by(|a, b| a.name.cmp(&b.name));

    let connection_count = connected_bands.len();

    Json(BandConnectionsResponse {
        band: Some(BandSummary {
            id: band.id.clone(),
            name: band.name.clone(),
            slug: band.slug.clone(),
        }),
        releases,
        connected_bands,
        connection_count,
    })
}

pub async fn most_connected_band(
    State(state): State<Arc<AppState>>,
) -> Json<MostConnectedBandResponse> {
    let response = state.band_connections.most_connected.as_ref().map_or(
        MostConnectedBandResponse {
            band: None,
            connection_count: 0,
        },
        |top| MostConnectedBandResponse {
            band: state.bands_by_id.get(&top.band_id).map(|band| BandSummary {
                id: band.id.clone(),
                name: band.name.clone(),
                slug: band.slug.clone(),
            }),
            connection_count: top.connection_count,
        },
    );

    Json(response)
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    if let Some(client) = &state.content {
        match client.fetch_counts().await {
            Ok(counts) => {
                return Json(StatsResponse {
                    bands: counts.bands,
                    releases: counts.releases,
                    musicians: counts.musicians,
                });
            }
            Err(error) => {
                tracing::warn!(error = %error, "live count fetch failed, using snapshot");
            }
        }
    }

    Json(StatsResponse {
        bands: state.snapshot.bands.len(),
        releases: state.snapshot.releases.len(),
        musicians: state.snapshot.musicians.len(),
    })
}
