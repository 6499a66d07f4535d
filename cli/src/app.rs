use crate::snapshot_fetch;
use bandtree_core::Snapshot;
use std::{error::Error, fs, path::PathBuf};

pub struct BandtreeApp {
    pub snapshot_path: PathBuf,
}

impl BandtreeApp {
    pub fn new(data_path: Option<String>, refresh: bool) -> Result<Self, Box<dyn Error>> {
        let snapshot_path = if let Some(path) = data_path {
            // User specified a custom snapshot file
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(format!("Data path does not exist: {:?}", path).into());
            }
            path
        } else {
            // Use the cache directory and auto-download if needed
            snapshot_fetch::ensure_snapshot_downloaded(refresh)?
        };

        Ok(Self { snapshot_path })
    }

    pub fn load_snapshot(&self) -> Result<Snapshot, Box<dyn Error>> {
        let raw = fs::read_to_string(&self.snapshot_path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
