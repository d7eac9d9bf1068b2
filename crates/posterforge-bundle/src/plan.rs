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

//! A fully assigned bundle awaiting packaging

use crate::slots::TargetSlot;
use posterforge_media::MediaAsset;
use std::path::{Path, PathBuf};

/// One slot together with the asset chosen for it
#[derive(Debug, Clone)]
pub struct SlotAssignment {
    pub slot: TargetSlot,
    pub asset: MediaAsset,
}

/// A complete bundle: every slot filled, number and version allocated
///
/// A plan is only constructed once all slots have an assignment; a
/// partially filled attempt never leaves the sequencer.
#[derive(Debug, Clone)]
pub struct BundlePlan {
    /// Monotonic bundle number
    pub number: u32,

    /// Display name, e.g. `BikininjaPosters01`
    pub display_name: String,

    /// Plugin directory name under `BepInEx/plugins`
    pub dir_name: String,

    /// Allocated semantic version (`major.minor.patch`)
    pub version: String,

    /// Slot assignments in fill order
    pub assignments: Vec<SlotAssignment>,
}

impl BundlePlan {
    /// True when at least one assigned asset is a video
    pub fn has_video(&self) -> bool {
        self.assignments.iter().any(|a| a.asset.is_video())
    }

    /// Root of this mod's output tree: `<output_root>/<display_name>`
    pub fn mod_root(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.display_name)
    }

    /// `.../BepInEx/plugins/<dir_name>/CustomPosters`
    pub fn custom_posters_dir(&self, output_root: &Path) -> PathBuf {
        self.mod_root(output_root)
            .join("BepInEx")
            .join("plugins")
            .join(&self.dir_name)
            .join("CustomPosters")
    }

    /// Archive file name: `<display_name>-v<version>.zip`
    pub fn archive_name(&self) -> String {
        format!("{}-v{}.zip", self.display_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::POSTER_SLOTS;
    use posterforge_media::MediaKind;

    fn plan() -> BundlePlan {
        BundlePlan {
            number: 1,
            display_name: "BikininjaPosters01".to_string(),
            dir_name: "BikininjasPosters01".to_string(),
            version: "0.0.1".to_string(),
            assignments: vec![SlotAssignment {
                slot: POSTER_SLOTS[0],
                asset: MediaAsset {
                    path: PathBuf::from("/m/a.png"),
                    kind: MediaKind::Image,
                    width: 639,
                    height: 488,
                },
            }],
        }
    }

    #[test]
    fn test_layout_paths() {
        let p = plan();
        let root = Path::new("/out");
        assert_eq!(p.mod_root(root), Path::new("/out/BikininjaPosters01"));
        assert_eq!(
            p.custom_posters_dir(root),
            Path::new("/out/BikininjaPosters01/BepInEx/plugins/BikininjasPosters01/CustomPosters")
        );
    }

    #[test]
    fn test_archive_name() {
        assert_eq!(plan().archive_name(), "BikininjaPosters01-v0.0.1.zip");
    }

    #[test]
    fn test_has_video() {
        let mut p = plan();
        assert!(!p.has_video());
        p.assignments[0].asset.kind = MediaKind::Video;
        assert!(p.has_video());
    }
}
