use crate::graph::MusicianGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

struct BfsState {
    queue: VecDeque<String>,
    visited: FxHashSet<String>,
    parent_map: FxHashMap<String, String>,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start.to_string());
        visited.insert(start.to_string());

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &str, current: &str) {
        if !self.visited.contains(neighbor) {
            self.visited.insert(neighbor.to_string());
            self.parent_map
                .insert(neighbor.to_string(), current.to_string());
            self.queue.push_back(neighbor.to_string());
        }
    }
}

/// Breadth-first search for a minimum-hop path, also reporting how many
/// musicians were visited. Among equal-length paths the winner follows
/// neighbor iteration order, which is unspecified.
pub fn bfs_search(
    graph: &MusicianGraph,
    start: &str,
    end: &str,
) -> (Option<Vec<String>>, usize) {
    if start == end {
        return (Some(vec![start.to_string()]), 1);
    }

    if !graph.contains_key(start) || !graph.contains_key(end) {
        return (None, 0);
    }

    let mut bfs_state = BfsState::new(start);

    while let Some(current_musician) = bfs_state.queue.pop_front() {
        if current_musician == end {
            let path = reconstruct_path(&bfs_state.parent_map, start, end);
            return (Some(path), bfs_state.visited.len());
        }

        if let Some(neighbors) = graph.get(&current_musician) {
            for neighbor in neighbors {
                bfs_state.visit_neighbor(neighbor, &current_musician);
            }
        }
    }

    (None, bfs_state.visited.len())
}

/// Shortest sequence of musician ids from `start` to `end` inclusive,
/// or `None` when either endpoint is unknown or no path exists.
pub fn find_shortest_path(graph: &MusicianGraph, start: &str, end: &str) -> Option<Vec<String>> {
    bfs_search(graph, start, end).0
}

fn reconstruct_path(
    parent_map: &FxHashMap<String, String>,
    start: &str,
    end: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current_node = end;

    while current_node != start {
        path.push(current_node.to_string());
        current_node = &parent_map[current_node];
    }

    path.push(start.to_string());
    path.reverse();
    path
}
