use bandtree_core::{Band, Musician, Release, Snapshot};
use reqwest::Client;
use rustc_hash::FxHashSet;
use serde::Deserialize;

type ClientResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const DEFAULT_API_URL: &str = "https://cdn.contentful.com";

const MUSICIANS_QUERY: &str = "content_type=musician&order=fields.name&limit=1000";
const RELEASES_QUERY: &str = "content_type=release&include=2&limit=1000";
const BANDS_QUERY: &str = "content_type=band&order=fields.name&include=3&limit=1000";

#[derive(Debug, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub includes: Includes,
}

/// Linked entries resolved by the `include` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct Includes {
    #[serde(rename = "Entry", default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: Fields,
}

impl Entry {
    fn content_type(&self) -> Option<&str> {
        self.sys
            .content_type
            .as_ref()
            .map(|link| link.sys.id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub id: String,
    #[serde(rename = "contentType", default)]
    pub content_type: Option<ContentTypeLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeLink {
    pub sys: ContentTypeSys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeSys {
    pub id: String,
}

/// Field superset across the three content types; everything is
/// optional so partial entries degrade to empty values instead of
/// failing the fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub musicians: Vec<EntryLink>,
    #[serde(default)]
    pub releases: Vec<EntryLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryLink {
    pub sys: Sys,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogCounts {
    pub bands: usize,
    pub releases: usize,
    pub musicians: usize,
}

/// Read-only client for the content delivery API. Entries come back as
/// `{sys, fields}` documents whose relationship fields hold link stubs
/// referencing other entries by id, so they flatten straight into the
/// id lists the catalog types expect.
pub struct ContentClient {
    client: Client,
    base_url: String,
    space_id: String,
    access_token: String,
}

impl ContentClient {
    pub fn new(space_id: String, access_token: String) -> Self {
        Self::with_base_url(DEFAULT_API_URL.to_string(), space_id, access_token)
    }

    pub fn with_base_url(base_url: String, space_id: String, access_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            space_id,
            access_token,
        }
    }

    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let space_id = std::env::var("CONTENTFUL_SPACE_ID")
            .map_err(|_| "CONTENTFUL_SPACE_ID environment variable must be set")?;
        let access_token = std::env::var("CONTENTFUL_ACCESS_TOKEN")
            .map_err(|_| "CONTENTFUL_ACCESS_TOKEN environment variable must be set")?;
        let base_url =
            std::env::var("CONTENTFUL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self::with_base_url(base_url, space_id, access_token))
    }

    async fn get_entries(&self, params: &str) -> ClientResult<EntriesResponse> {
        let url = format!(
            "{}/spaces/{}/environments/master/entries?access_token={}&{}",
            self.base_url, self.space_id, self.access_token, params
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn fetch_musicians(&self) -> ClientResult<Vec<Musician>> {
        let response = self.get_entries(MUSICIANS_QUERY).await?;
        Ok(response.items.iter().map(musician_from_entry).collect())
    }

    pub async fn fetch_releases(&self) -> ClientResult<Vec<Release>> {
        let response = self.get_entries(RELEASES_QUERY).await?;
        Ok(response.items.iter().map(release_from_entry).collect())
    }

    pub async fn fetch_bands(&self) -> ClientResult<Vec<Band>> {
        let response = self.get_entries(BANDS_QUERY).await?;
        Ok(response.items.iter().map(band_from_entry).collect())
    }

    /// Targeted query for the releases crediting one musician, so a
    /// single collaboration count never scans the whole catalog.
    pub async fn fetch_releases_for_musician(
        &self,
        musician_id: &str,
    ) -> ClientResult<Vec<Release>> {
        let params = format!(
            "content_type=release&include=2&fields.musicians.sys.id={}",
            urlencoding::encode(musician_id)
        );
        let response = self.get_entries(&params).await?;
        Ok(response.items.iter().map(release_from_entry).collect())
    }

    pub async fn fetch_counts(&self) -> ClientResult<CatalogCounts> {
        let (bands, releases, musicians) = tokio::try_join!(
            self.get_entries("content_type=band&limit=0"),
            self.get_entries("content_type=release&limit=0"),
            self.get_entries("content_type=musician&limit=0"),
        )?;

        Ok(CatalogCounts {
            bands: bands.total,
            releases: releases.total,
            musicians: musicians.total,
        })
    }

    /// Fetches the three entity collections and assembles the snapshot.
    /// All-or-nothing: any failed fetch fails the whole call, so a
    /// partially built catalog never escapes.
    pub async fn fetch_snapshot(&self) -> ClientResult<Snapshot> {
        let (musicians_response, releases_response, bands_response) = tokio::try_join!(
            self.get_entries(MUSICIANS_QUERY),
            self.get_entries(RELEASES_QUERY),
            self.get_entries(BANDS_QUERY),
        )?;

        let mut musicians: Vec<Musician> = musicians_response
            .items
            .iter()
            .map(musician_from_entry)
            .collect();

        // Credits can reference musicians the listing query missed;
        // the release expansion carries them in `includes`.
        let mut known_ids: FxHashSet<String> =
            musicians.iter().map(|musician| musician.id.clone()).collect();
        for entry in &releases_response.includes.entries {
            if entry.content_type() == Some("musician") && known_ids.insert(entry.sys.id.clone()) {
                musicians.push(musician_from_entry(entry));
            }
        }

        Ok(Snapshot {
            musicians,
            releases: releases_response
                .items
                .iter()
                .map(release_from_entry)
                .collect(),
            bands: bands_response.items.iter().map(band_from_entry).collect(),
        })
    }
}

fn musician_from_entry(entry: &Entry) -> Musician {
    Musician {
        id: entry.sys.id.clone(),
        name: entry.fields.name.clone().unwrap_or_default(),
        slug: entry.fields.slug.clone().unwrap_or_default(),
    }
}

fn release_from_entry(entry: &Entry) -> Release {
    Release {
        id: entry.sys.id.clone(),
        title: entry.fields.title.clone().unwrap_or_default(),
        year: entry.fields.year,
        slug: entry.fields.slug.clone().unwrap_or_default(),
        credits: entry
            .fields
            .musicians
            .iter()
            .map(|link| link.sys.id.clone())
            .collect(),
    }
}

fn band_from_entry(entry: &Entry) -> Band {
    Band {
        id: entry.sys.id.clone(),
        name: entry.fields.name.clone().unwrap_or_default(),
        slug: entry.fields.slug.clone().unwrap_or_default(),
        releases: entry
            .fields
            .releases
            .iter()
            .map(|link| link.sys.id.clone())
            .collect(),
    }
}
