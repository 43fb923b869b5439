//! JSON asset files on disk.
//!
//! One asset per `<stem>.json` file. The store is the persistence layer that
//! validates assets: every load runs [`DataAsset::ensure_identifier`] and
//! writes the file straight back when an id had to be generated.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::asset::DataAsset;
use crate::error::AssetError;

/// A directory of asset files.
#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
}

/// Every asset of one type from a store, keyed by id.
#[derive(Debug, Clone)]
pub struct AssetCatalog<T> {
    entries: BTreeMap<String, (String, T)>,
    newly_assigned: usize,
    skipped: Vec<String>,
}

impl<T> AssetCatalog<T> {
    pub fn get(&self, unique_id: &str) -> Option<&T> {
        self.entries.get(unique_id).map(|(_, asset)| asset)
    }

    /// File stem the asset was loaded from.
    pub fn stem_of(&self, unique_id: &str) -> Option<&str> {
        self.entries.get(unique_id).map(|(stem, _)| stem.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, asset)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries
            .iter()
            .map(|(id, (_, asset))| (id.as_str(), asset))
    }

    /// How many assets received their id during this load.
    pub fn newly_assigned(&self) -> usize {
        self.newly_assigned
    }

    /// Stems of files that could not be parsed.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

impl AssetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.json"))
    }

    /// Load one asset, assigning and persisting an id if it has none.
    pub fn load<T>(&self, stem: &str) -> Result<T, AssetError>
    where
        T: DataAsset + Serialize + DeserializeOwned,
    {
        self.load_validated(stem).map(|(asset, _)| asset)
    }

    /// Write an asset, assigning an id first if needed.
    pub fn save<T>(&self, stem: &str, asset: &mut T) -> Result<(), AssetError>
    where
        T: DataAsset + Serialize,
    {
        asset.ensure_identifier();
        self.write(stem, asset)?;
        asset.info_mut().mark_clean();
        Ok(())
    }

    /// Load every `*.json` file in the directory as `T`.
    ///
    /// Unparsable files are skipped. Two files sharing an id are an error.
    pub fn load_all<T>(&self) -> Result<AssetCatalog<T>, AssetError>
    where
        T: DataAsset + Serialize + DeserializeOwned,
    {
        let mut catalog = AssetCatalog {
            entries: BTreeMap::new(),
            newly_assigned: 0,
            skipped: Vec::new(),
        };

        for stem in self.list()? {
            let (asset, assigned) = match self.load_validated::<T>(&stem) {
                Ok(loaded) => loaded,
                Err(err @ AssetError::Parse { .. }) => {
                    warn!(%stem, %err, "skipping unreadable asset");
                    catalog.skipped.push(stem);
                    continue;
                }
                Err(err) => return Err(err),
            };
            if assigned {
                catalog.newly_assigned += 1;
            }

            let id = asset.unique_id().to_string();
            if let Some((first, _)) = catalog.entries.get(&id) {
                return Err(AssetError::DuplicateId {
                    id,
                    first: first.clone(),
                    second: stem,
                });
            }
            catalog.entries.insert(id, (stem, asset));
        }

        Ok(catalog)
    }

    /// Stems of all asset files, sorted. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<String>, AssetError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(AssetError::Io {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut stems = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %self.dir.display(), %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match entry.file_type() {
                Ok(kind) if kind.is_file() => {}
                Ok(_) => {
                    warn!(path = %path.display(), "skipping non-file entry");
                    continue;
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping entry of unknown type");
                    continue;
                }
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                stems.push(stem.to_string());
            }
        }
        stems.sort();
        Ok(stems)
    }

    /// Whether a file for `stem` is present, parseable or not.
    pub fn exists(&self, stem: &str) -> bool {
        self.path(stem).is_file()
    }

    /// Remove an asset file. Returns whether a file was removed.
    pub fn delete(&self, stem: &str) -> Result<bool, AssetError> {
        let path = self.path(stem);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AssetError::Io { path, source }),
        }
    }

    fn load_validated<T>(&self, stem: &str) -> Result<(T, bool), AssetError>
    where
        T: DataAsset + Serialize + DeserializeOwned,
    {
        let path = self.path(stem);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AssetError::NotFound(stem.to_string()))
            }
            Err(source) => return Err(AssetError::Io { path, source }),
        };
        let mut asset: T =
            serde_json::from_str(&json).map_err(|source| AssetError::Parse { path, source })?;

        let assigned = asset.ensure_identifier();
        if assigned {
            self.write(stem, &asset)?;
            asset.info_mut().mark_clean();
        }
        debug!(%stem, id = asset.unique_id(), assigned, "loaded asset");
        Ok((asset, assigned))
    }

    fn write<T: Serialize>(&self, stem: &str, asset: &T) -> Result<(), AssetError> {
        fs::create_dir_all(&self.dir).map_err(|source| AssetError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(asset).map_err(|source| AssetError::Serialize {
            stem: stem.to_string(),
            source,
        })?;
        let path = self.path(stem);
        fs::write(&path, json).map_err(|source| AssetError::Io { path, source })
    }
}
