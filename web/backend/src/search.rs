use crate::models::MusicianSummary;
use crate::state::AppState;
use bandtree_core::{Musician, normalize::clean_str};
use rustc_hash::FxHashMap;

pub fn search_musicians_in_state(
    state: &AppState,
    query: &str,
    limit: usize,
) -> (Vec<MusicianSummary>, usize) {
    if query.trim().is_empty() {
        return (vec![], 0);
    }

    let mut results = filter_musicians_by_query(query, &state.name_lookup, &state.musicians_by_id);
    results = sort_results_by_relevance(results, query);
    results.truncate(limit);
    let count = results.len();

    (results, count)
}

pub fn filter_musicians_by_query(
    query: &str,
    name_lookup: &FxHashMap<String, Vec<String>>,
    musicians_by_id: &FxHashMap<String, Musician>,
) -> Vec<MusicianSummary> {
    let normalized_query = clean_str(query);

    name_lookup
        .iter()
        .filter(|(normalized_name, _)| normalized_name.contains(&normalized_query))
        .flat_map(|(_, musician_ids)| musician_ids.iter())
        .filter_map(|musician_id| {
            musicians_by_id.get(musician_id).map(|musician| MusicianSummary {
                id: musician.id.clone(),
                name: musician.name.clone(),
                slug: musician.slug.clone(),
            })
        })
        .collect()
}

pub fn sort_results_by_relevance(
    mut results: Vec<MusicianSummary>,
    query: &str,
) -> Vec<MusicianSummary> {
    let normalized_query = clean_str(query);

    results.sort_by(|a, b| {
        let a_normalized = clean_str(&a.name);
        let b_normalized = clean_str(&b.name);

        let a_starts = a_normalized.starts_with(&normalized_query);
        let b_starts = b_normalized.starts_with(&normalized_query);

        match (a_starts, b_starts) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.len().cmp(&b.name.len()),
        }
    });

    results
}
