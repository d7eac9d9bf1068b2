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

//! Mod naming and numbering
//!
//! Each bundle gets a zero-padded two-digit number and two derived names:
//! the display name used for the output directory, tracking keys, and the
//! archive, and the plugin directory name under `BepInEx/plugins`. The
//! reference deployment ships with two historically distinct prefixes
//! ("BikininjaPosters" / "BikininjasPosters").
//!
//! The authoritative next number lives in the tracking file; scanning the
//! output directory for existing display-prefixed folders is kept as a
//! fallback for tracking files written before the counter existed.

use std::path::Path;
use tracing::debug;

/// Display/plugin-directory prefix pair for produced mods
#[derive(Debug, Clone)]
pub struct BundleNaming {
    pub display_prefix: String,
    pub dir_prefix: String,
}

impl Default for BundleNaming {
    fn default() -> Self {
        BundleNaming {
            display_prefix: "BikininjaPosters".to_string(),
            dir_prefix: "BikininjasPosters".to_string(),
        }
    }
}

impl BundleNaming {
    /// Display name for bundle `number`, e.g. `BikininjaPosters03`
    pub fn display_name(&self, number: u32) -> String {
        format!("{}{number:02}", self.display_prefix)
    }

    /// Plugin directory name for bundle `number`
    pub fn dir_name(&self, number: u32) -> String {
        format!("{}{number:02}", self.dir_prefix)
    }

    /// Fallback numbering: one past the highest existing mod directory
    ///
    /// Scans `output_root` for directories named `<display_prefix><int>`;
    /// returns 1 when none exist (or the root itself does not).
    pub fn next_number_from_dir(&self, output_root: &Path) -> u32 {
        let mut max_existing = 0;

        if let Ok(entries) = std::fs::read_dir(output_root) {
            for entry in entries.flatten() {
                let name = entry.file_name();
                let Some(name) = name.to_str() else { continue };
                let Some(suffix) = name.strip_prefix(&self.display_prefix) else {
                    continue;
                };
                if let Ok(number) = suffix.parse::<u32>() {
                    max_existing = max_existing.max(number);
                }
            }
        }

        let next = max_existing + 1;
        debug!(
            "Next mod number from {}: {next}",
            output_root.display()
        );
        next
    }
}
