use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Musician {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub slug: String,
    /// Credited musician ids, in the order the content store lists them.
    #[serde(default)]
    pub credits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Release ids of the band's discography, in catalog order.
    #[serde(default)]
    pub releases: Vec<String>,
}

/// One immutable batch of catalog data, fetched once per analysis
/// session. Relationships are plain id lists; expansion happens through
/// the lookup maps below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub musicians: Vec<Musician>,
    pub releases: Vec<Release>,
    pub bands: Vec<Band>,
}

impl Snapshot {
    pub fn musicians_by_id(&self) -> FxHashMap<String, Musician> {
        self.musicians
            .iter()
            .map(|musician| (musician.id.clone(), musician.clone()))
            .collect()
    }

    pub fn releases_by_id(&self) -> FxHashMap<String, Release> {
        self.releases
            .iter()
            .map(|release| (release.id.clone(), release.clone()))
            .collect()
    }

    pub fn bands_by_id(&self) -> FxHashMap<String, Band> {
        self.bands
            .iter()
            .map(|band| (band.id.clone(), band.clone()))
            .collect()
    }
}
