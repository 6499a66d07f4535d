use bandtree_core::{Snapshot, normalize::clean_str};
use rustc_hash::FxHashMap;

pub type NameLookup = FxHashMap<String, Vec<String>>;

pub fn build_name_lookup(snapshot: &Snapshot) -> NameLookup {
    let mut lookup = NameLookup::default();

    for musician in &snapshot.musicians {
        lookup
            .entry(clean_str(&musician.name))
            .or_default()
            .push(musician.id.clone());
    }

    lookup
}

pub fn find_musician_id(name: &str, lookup: &NameLookup) -> Result<String, String> {
    let clean_name = clean_str(name);
    lookup
        .get(&clean_name)
        .and_then(|ids| ids.first().cloned())
        .ok_or_else(|| format!("Musician '{}' not found in catalog", name))
}
