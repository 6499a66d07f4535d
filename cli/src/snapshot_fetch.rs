use bandtree_core::Snapshot;
use indicatif::{ProgressBar, ProgressStyle};
use std::{fs, path::PathBuf, time::Duration};

const SNAPSHOT_URL: &str = "https://data.bandtree.net/snapshot.json";

/// Returns the path of the cached catalog snapshot, downloading it
/// first when missing or when a refresh is requested.
pub fn ensure_snapshot_downloaded(refresh: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let cache_dir = dirs::cache_dir()
        .ok_or("Could not find cache directory")?
        .join("bandtree");
    let snapshot_path = cache_dir.join("snapshot.json");

    if snapshot_path.exists() && !refresh {
        return Ok(snapshot_path);
    }

    fs::create_dir_all(&cache_dir)?;

    let url =
        std::env::var("BANDTREE_SNAPSHOT_URL").unwrap_or_else(|_| SNAPSHOT_URL.to_string());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message("Downloading catalog snapshot...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let body = reqwest::blocking::get(&url)?.error_for_status()?.text()?;

    // Parse before writing so a bad download never clobbers a good cache.
    let snapshot: Snapshot = serde_json::from_str(&body)?;
    fs::write(&snapshot_path, &body)?;

    spinner.finish_with_message(format!(
        "Catalog ready: {} musicians, {} releases, {} bands",
        snapshot.musicians.len(),
        snapshot.releases.len(),
        snapshot.bands.len(),
    ));

    Ok(snapshot_path)
}
