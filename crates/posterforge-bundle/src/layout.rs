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

//! BepInEx mod tree materialization
//!
//! Lays out one planned bundle as the CustomPosters plugin expects it:
//!
//! ```text
//! <output>/<display>/BepInEx/plugins/<dir>/CustomPosters/posters/<slot>.<ext>
//! <output>/<display>/BepInEx/plugins/<dir>/CustomPosters/tips/CustomTips.<ext>
//! ```
//!
//! Stills are written as PNG, videos as MP4. After the tree is complete
//! the whole mod is zipped into the build directory.

use crate::archive::write_mod_archive;
use crate::error::Result;
use crate::plan::BundlePlan;
use crate::sequencer::BundlePackager;
use crate::transform::crop_resize;
use std::path::PathBuf;
use tracing::{debug, info};

/// The real packager: directory layout, pixel transforms, zip archive
#[derive(Debug, Clone)]
pub struct ModPackager {
    pub output_root: PathBuf,
    pub build_root: PathBuf,
}

impl ModPackager {
    pub fn new(output_root: impl Into<PathBuf>, build_root: impl Into<PathBuf>) -> Self {
        ModPackager {
            output_root: output_root.into(),
            build_root: build_root.into(),
        }
    }
}

impl BundlePackager for ModPackager {
    fn package(&self, plan: &BundlePlan) -> Result<PathBuf> {
        let custom_posters = plan.custom_posters_dir(&self.output_root);
        let posters_dir = custom_posters.join("posters");
        let tips_dir = custom_posters.join("tips");
        std::fs::create_dir_all(&posters_dir)?;
        std::fs::create_dir_all(&tips_dir)?;
        debug!("Created mod structure under {}", custom_posters.display());

        for assignment in &plan.assignments {
            let slot = &assignment.slot;
            let asset = &assignment.asset;
            let ext = if asset.is_video() { "mp4" } else { "png" };
            let dest_dir = if slot.is_tips() { &tips_dir } else { &posters_dir };
            let dest = dest_dir.join(format!("{}.{ext}", slot.name));

            crop_resize(asset.kind, &asset.path, slot.width, slot.height, &dest)?;
            info!("  {} -> {}.{ext}", slot.name, slot.name);
        }

        write_mod_archive(
            &plan.mod_root(&self.output_root),
            &self.build_root,
            &plan.archive_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SlotAssignment;
    use crate::slots::POSTER_SLOTS;
    use posterforge_media::{MediaAsset, MediaKind};

    #[test]
    fn test_package_builds_tree_and_archive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("input");
        std::fs::create_dir_all(&input).expect("mkdir");

        let assignments: Vec<SlotAssignment> = POSTER_SLOTS
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let path = input.join(format!("src{i}.png"));
                image::RgbImage::new(640, 490).save(&path).expect("save");
                SlotAssignment {
                    slot: *slot,
                    asset: MediaAsset {
                        path,
                        kind: MediaKind::Image,
                        width: 640,
                        height: 490,
                    },
                }
            })
            .collect();

        let plan = BundlePlan {
            number: 1,
            display_name: "BikininjaPosters01".to_string(),
            dir_name: "BikininjasPosters01".to_string(),
            version: "0.0.1".to_string(),
            assignments,
        };

        let packager = ModPackager::new(dir.path().join("mods"), dir.path().join("build"));
        let archive = packager.package(&plan).expect("package");

        let posters = dir.path().join(
            "mods/BikininjaPosters01/BepInEx/plugins/BikininjasPosters01/CustomPosters/posters",
        );
        for slot in &POSTER_SLOTS[..5] {
            let out = posters.join(format!("{}.png", slot.name));
            let (w, h) = image::image_dimensions(&out).expect("probe output");
            assert_eq!((w, h), (slot.width, slot.height));
        }

        let tips = dir.path().join(
            "mods/BikininjaPosters01/BepInEx/plugins/BikininjasPosters01/CustomPosters/tips/CustomTips.png",
        );
        assert!(tips.exists());

        assert!(archive.exists());
        assert!(archive.ends_with("BikininjaPosters01-v0.0.1.zip"));
    }
}
