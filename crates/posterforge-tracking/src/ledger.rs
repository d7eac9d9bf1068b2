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

//! Used-media ledger
//!
//! The ledger is the single owner of "this file has been consumed" state.
//! Selection code queries it through a caller-composed predicate, and only
//! a completed, packaged mod marks its media here. Once a path is marked
//! used it stays used for the rest of the process and, via the tracking
//! file, for every future run.

use posterforge_media::catalog::is_supported_media;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Set of source-media paths already consumed by produced mod packs
#[derive(Debug, Clone, Default)]
pub struct UsageLedger {
    used: BTreeSet<PathBuf>,
}

impl UsageLedger {
    /// Build a ledger from an iterator of paths (tracking-file load)
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        UsageLedger {
            used: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `path` has already been consumed
    pub fn is_used(&self, path: &Path) -> bool {
        self.used.contains(path)
    }

    /// Mark `path` consumed for this and all future runs
    pub fn mark_used(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!("Marking media used: {}", path.display());
        self.used.insert(path);
    }

    /// Number of used paths
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// True when nothing has been consumed yet
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Used paths in sorted order (the persisted representation)
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.used.iter().map(PathBuf::as_path)
    }

    /// Seed the ledger from previously produced mod directories
    ///
    /// Walks every `<output_root>/<display_prefix>NN` tree and marks every
    /// file with a supported media extension. This keeps the ledger
    /// self-healing when the tracking file predates the used-media list or
    /// was lost.
    pub fn seed_from_output_tree(&mut self, output_root: &Path, display_prefix: &str) {
        let Ok(entries) = std::fs::read_dir(output_root) else {
            return;
        };

        let before = self.used.len();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with(display_prefix) {
                continue;
            }

            for file in WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                if is_supported_media(file.path()) {
                    self.used.insert(file.path().to_path_buf());
                }
            }
        }

        let added = self.used.len() - before;
        if added > 0 {
            info!(
                "Seeded {added} used media path(s) from existing mods under {}",
                output_root.display()
            );
        }
    }
}
