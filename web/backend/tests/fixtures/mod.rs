use axum::Router;
use bandtree_core::{Band, Musician, Release, Snapshot};
use bandtree_web::{router, state::AppState};
use std::sync::Arc;

pub fn musician(id: &str, name: &str, slug: &str) -> Musician {
    Musician {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn release(id: &str, title: &str, year: Option<i32>, credits: &[&str]) -> Release {
    Release {
        id: id.to_string(),
        title: title.to_string(),
        year,
        slug: title.to_lowercase().replace([' ', '.'], "-"),
        credits: credits.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn band(id: &str, name: &str, releases: &[&str]) -> Band {
    Band {
        id: id.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        releases: releases.iter().map(|r| r.to_string()).collect(),
    }
}

/// A small catalog with one unique three-hop chain
/// (Joni -> Jaco -> Wayne -> Herbie) and one isolated musician.
pub fn test_snapshot() -> Snapshot {
    Snapshot {
        musicians: vec![
            musician("joni", "Joni Mitchell", "joni-mitchell"),
            musician("jaco", "Jaco Pastorius", "jaco-pastorius"),
            musician("herbie", "Herbie Hancock", "herbie-hancock"),
            musician("wayne", "Wayne Shorter", "wayne-shorter"),
            musician("nick", "Nick Drake", "nick-drake"),
        ],
        releases: vec![
            release("hejira", "Hejira", Some(1976), &["joni", "jaco"]),
            release("mingus", "Mingus", Some(1979), &["joni", "jaco"]),
            release("heavy", "Heavy Weather", Some(1977), &["jaco", "wayne"]),
            release("mrgone", "Mr. Gone", Some(1978), &["jaco", "wayne"]),
            release("vsop", "V.S.O.P.", Some(1977), &["herbie", "wayne"]),
            release("pink", "Pink Moon", Some(1972), &["nick"]),
        ],
        bands: vec![
            band("wr", "Weather Report", &["heavy", "mrgone"]),
            band("shadows", "Shadows and Light", &["hejira"]),
            band("quintet", "The Quintet", &["vsop"]),
            band("pinkband", "Pink Moon Band", &["pink"]),
        ],
    }
}

pub fn create_test_app() -> Router {
    let app_state = Arc::new(AppState::from_snapshot(test_snapshot(), None));
    router(app_state)
}
