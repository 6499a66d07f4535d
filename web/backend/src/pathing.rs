use crate::models::{MusicianSummary, PathResponse, PathStep, ReleaseSummary, SearchStats};
use crate::state::AppState;
use bandtree_core::{bfs_search, get_connecting_releases};
use std::time::Instant;

pub fn find_path_between_musicians(state: &AppState, from_id: &str, to_id: &str) -> PathResponse {
    let start_time = Instant::now();
    let (found_path, musicians_visited) = bfs_search(&state.graph, from_id, to_id);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let steps = found_path
        .as_deref()
        .map_or_else(Vec::new, |path| build_path_steps(state, path));

    let path = found_path.map(|ids| {
        ids.iter()
            .map(|musician_id| musician_summary(state, musician_id))
            .collect::<Vec<_>>()
    });

    let degrees = path.as_ref().map(|p| p.len().saturating_sub(1));

    PathResponse {
        path,
        degrees,
        steps,
        search_stats: SearchStats {
            musicians_visited,
            duration_ms,
        },
    }
}

/// Resolves each hop of the path to the releases connecting the two
/// musicians, through the pre-built pair index. Hops whose musicians
/// are missing from the snapshot are skipped.
fn build_path_steps(state: &AppState, path: &[String]) -> Vec<PathStep> {
    let mut steps = Vec::new();

    for window in path.windows(2) {
        let [from_id, to_id] = window else { continue };

        let (Some(from), Some(to)) = (
            state.musicians_by_id.get(from_id),
            state.musicians_by_id.get(to_id),
        ) else {
            continue;
        };

        let releases = get_connecting_releases(&state.release_index, from_id, to_id)
            .iter()
            .filter_map(|release_id| state.releases_by_id.get(release_id))
            .map(|release| ReleaseSummary {
                id: release.id.clone(),
                title: release.title.clone(),
                year: release.year,
                slug: release.slug.clone(),
            })
            .collect();

        steps.push(PathStep {
            from: summary_of(from),
            to: summary_of(to),
            releases,
        });
    }

    steps
}

fn musician_summary(state: &AppState, musician_id: &str) -> MusicianSummary {
    state
        .musicians_by_id
        .get(musician_id)
        .map_or_else(
            || MusicianSummary {
                id: musician_id.to_string(),
                name: String::new(),
                slug: String::new(),
            },
            summary_of,
        )
}

fn summary_of(musician: &bandtree_core::Musician) -> MusicianSummary {
    MusicianSummary {
        id: musician.id.clone(),
        name: musician.name.clone(),
        slug: musician.slug.clone(),
    }
}
