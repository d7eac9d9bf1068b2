// PosterForge - Versioned CustomPosters Mod Packs
// Copyright (C) 2026 PosterForge Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Tracking-file store
//!
//! One JSON file holds every piece of durable state:
//!
//! ```json
//! {
//!   "versions": { "BikininjaPosters01": "0.0.3" },
//!   "used_media": ["/abs/path/a.png"],
//!   "next_bundle": 2
//! }
//! ```
//!
//! Two legacy shapes are accepted on load: a record without `used_media`
//! (older runs that tracked only versions), and a flat `{name: version}`
//! object, which loads as the versions map with an empty ledger. An
//! unreadable file resets to empty state rather than failing the run; the
//! ledger's output-tree seeding recovers the used set.

use crate::error::Result;
use crate::ledger::UsageLedger;
use crate::versions::VersionRegistry;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Owner of the tracking file and all durable cross-run state
#[derive(Debug, Clone)]
pub struct TrackingStore {
    path: PathBuf,
    pub ledger: UsageLedger,
    pub versions: VersionRegistry,
    next_bundle: Option<u32>,
}

#[derive(Serialize)]
struct TrackingRecord<'a> {
    versions: &'a BTreeMap<String, String>,
    used_media: Vec<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_bundle: Option<u32>,
}

impl TrackingStore {
    /// Empty state backed by `path` (the file need not exist yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TrackingStore {
            path: path.into(),
            ledger: UsageLedger::default(),
            versions: VersionRegistry::default(),
            next_bundle: None,
        }
    }

    /// Load the tracking file at `path`, accepting legacy shapes
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!("No tracking file at {}, starting fresh", path.display());
            return Ok(TrackingStore::new(path));
        }

        let content = std::fs::read_to_string(&path)?;
        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Unreadable tracking file {} ({e}), starting fresh",
                    path.display()
                );
                return Ok(TrackingStore::new(path));
            }
        };

        let Value::Object(map) = value else {
            warn!(
                "Tracking file {} is not a JSON object, starting fresh",
                path.display()
            );
            return Ok(TrackingStore::new(path));
        };

        let store = if map.contains_key("versions") {
            let versions = map
                .get("versions")
                .and_then(|v| v.as_object())
                .map(string_map)
                .unwrap_or_default();
            let used = map
                .get("used_media")
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str())
                        .map(PathBuf::from)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            let next_bundle = map
                .get("next_bundle")
                .and_then(|v| v.as_u64())
                .map(|n| n as u32);

            TrackingStore {
                path,
                ledger: UsageLedger::from_paths(used),
                versions: VersionRegistry::from_map(versions),
                next_bundle,
            }
        } else {
            // Legacy flat format: every key is a mod name, every value a version
            TrackingStore {
                path,
                ledger: UsageLedger::default(),
                versions: VersionRegistry::from_map(string_map(&map)),
                next_bundle: None,
            }
        };

        info!(
            "Loaded tracking file: {} mod version(s), {} used media path(s)",
            store.versions.as_map().len(),
            store.ledger.len()
        );
        Ok(store)
    }

    /// Persist the current state, creating parent directories as needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let record = TrackingRecord {
            versions: self.versions.as_map(),
            used_media: self.ledger.iter().collect(),
            next_bundle: self.next_bundle,
        };
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, json)?;
        debug!("Saved tracking file to {}", self.path.display());
        Ok(())
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persisted next mod number, if a previous run recorded one
    pub fn next_bundle(&self) -> Option<u32> {
        self.next_bundle
    }

    /// Record the next mod number to allocate
    pub fn set_next_bundle(&mut self, number: u32) {
        self.next_bundle = Some(number);
    }
}

fn string_map(map: &serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}
