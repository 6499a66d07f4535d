pub mod bands;
pub mod catalog;
pub mod collaborations;
pub mod graph;
pub mod normalize;
pub mod pathfinding;
pub mod release_index;

// Re-export commonly used items
pub use bands::{BandConnections, MostConnectedBand, band_connections};
pub use catalog::{Band, Musician, Release, Snapshot};
pub use collaborations::{
    MostConnectedMusician, collaborator_count, collaborator_ids, most_connected_musician,
};
pub use graph::{MusicianGraph, build_musician_graph};
pub use pathfinding::{bfs_search, find_shortest_path};
pub use release_index::{
    MusicianPair, ReleasePairIndex, build_release_index, get_connecting_releases,
};
