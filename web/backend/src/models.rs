use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct MusicianSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub slug: String,
}

#[derive(Serialize, Deserialize)]
pub struct BandSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<MusicianSummary>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct PathQuery {
    pub from_id: String,
    pub to_id: String,
}

/// One hop of a found path, with the releases justifying it.
#[derive(Serialize, Deserialize)]
pub struct PathStep {
    pub from: MusicianSummary,
    pub to: MusicianSummary,
    pub releases: Vec<ReleaseSummary>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchStats {
    pub musicians_visited: usize,
    pub duration_ms: u64,
}

#[derive(Serialize, Deserialize)]
pub struct PathResponse {
    /// `None` means no connection; a single-element path means both
    /// endpoints were the same musician.
    pub path: Option<Vec<MusicianSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    pub steps: Vec<PathStep>,
    pub search_stats: SearchStats,
}

#[derive(Serialize, Deserialize)]
pub struct CollaboratorsResponse {
    pub musician_id: String,
    pub collaborator_count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct MostConnectedMusicianResponse {
    pub musician: Option<MusicianSummary>,
    pub collaborator_count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct BandConnectionsResponse {
    pub band: Option<BandSummary>,
    /// The band's discography, latest year first.
    pub releases: Vec<ReleaseSummary>,
    pub connected_bands: Vec<BandSummary>,
    pub connection_count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct MostConnectedBandResponse {
    pub band: Option<BandSummary>,
    pub connection_count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub bands: usize,
    pub releases: usize,
    pub musicians: usize,
}
