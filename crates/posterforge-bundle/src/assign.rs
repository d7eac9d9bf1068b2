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

//! Best-fit media selection per slot
//!
//! A linear scan over the catalog, which is fine at the expected scale of
//! tens of files. Exclusion is injected as a predicate so the caller can
//! compose the durable ledger with its own in-progress tentative picks;
//! the assigner itself never mutates any used-state.

use crate::slots::TargetSlot;
use posterforge_media::{FitScorer, MediaAsset, MediaCatalog};
use std::path::Path;
use tracing::trace;

/// Selects the best unused media asset for a slot
#[derive(Debug, Clone, Copy)]
pub struct MediaAssigner<'a> {
    catalog: &'a MediaCatalog,
    scorer: FitScorer,
}

impl<'a> MediaAssigner<'a> {
    pub fn new(catalog: &'a MediaCatalog, scorer: FitScorer) -> Self {
        MediaAssigner { catalog, scorer }
    }

    /// Pick the best candidate for `slot`, or `None` if nothing remains
    ///
    /// With `require_video` the first non-excluded video wins outright,
    /// ignoring fit. Otherwise every non-excluded asset is scored and the
    /// strictly greatest score wins; on a tie the earliest catalog entry
    /// is kept, since later entries only replace on strict improvement.
    pub fn select_best<F>(
        &self,
        slot: &TargetSlot,
        prefer_video: bool,
        require_video: bool,
        is_used: F,
    ) -> Option<&'a MediaAsset>
    where
        F: Fn(&Path) -> bool,
    {
        if require_video {
            return self
                .catalog
                .assets()
                .iter()
                .find(|a| a.is_video() && !is_used(&a.path));
        }

        let target_aspect = slot.aspect_ratio();
        let mut best: Option<&MediaAsset> = None;
        let mut best_score = -1.0_f64;

        for asset in self.catalog.assets() {
            if is_used(&asset.path) {
                continue;
            }

            let score =
                self.scorer
                    .score(asset.aspect_ratio(), target_aspect, prefer_video, asset.kind);
            trace!(
                "Candidate {} for {}: score {score:.3}",
                asset.path.display(),
                slot.name
            );

            if score > best_score {
                best_score = score;
                best = Some(asset);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posterforge_media::MediaKind;
    use std::path::PathBuf;

    fn image(name: &str, width: u32, height: u32) -> MediaAsset {
        MediaAsset {
            path: PathBuf::from(format!("/media/{name}")),
            kind: MediaKind::Image,
            width,
            height,
        }
    }

    fn video(name: &str, width: u32, height: u32) -> MediaAsset {
        MediaAsset {
            path: PathBuf::from(format!("/media/{name}")),
            kind: MediaKind::Video,
            width,
            height,
        }
    }

    const SLOT: TargetSlot = TargetSlot {
        name: "Poster1",
        width: 639,
        height: 488,
    };

    #[test]
    fn test_picks_closest_aspect() {
        let catalog = MediaCatalog::from_assets(vec![
            image("wide.png", 1920, 480),
            image("close.png", 639, 488),
            image("tall.png", 480, 1920),
        ]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));

        let best = assigner
            .select_best(&SLOT, false, false, |_| false)
            .expect("candidate");
        assert!(best.path.ends_with("close.png"));
    }

    #[test]
    fn test_first_wins_ties() {
        let catalog = MediaCatalog::from_assets(vec![
            image("first.png", 639, 488),
            image("second.png", 639, 488),
        ]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));

        let best = assigner
            .select_best(&SLOT, false, false, |_| false)
            .expect("candidate");
        assert!(best.path.ends_with("first.png"));
    }

    #[test]
    fn test_exclusion_predicate_is_honored() {
        let catalog = MediaCatalog::from_assets(vec![
            image("used.png", 639, 488),
            image("free.png", 700, 500),
        ]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));

        let best = assigner
            .select_best(&SLOT, false, false, |p| p.ends_with("used.png"))
            .expect("candidate");
        assert!(best.path.ends_with("free.png"));
    }

    #[test]
    fn test_none_when_everything_excluded() {
        let catalog = MediaCatalog::from_assets(vec![image("a.png", 639, 488)]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));
        assert!(assigner.select_best(&SLOT, false, false, |_| true).is_none());
    }

    #[test]
    fn test_require_video_ignores_fit() {
        let catalog = MediaCatalog::from_assets(vec![
            image("perfect.png", 639, 488),
            video("offfit.mp4", 1920, 1080),
        ]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));

        let best = assigner
            .select_best(&SLOT, false, true, |_| false)
            .expect("video");
        assert!(best.is_video());
    }

    #[test]
    fn test_require_video_none_without_videos() {
        let catalog = MediaCatalog::from_assets(vec![image("a.png", 639, 488)]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));
        assert!(assigner.select_best(&SLOT, false, true, |_| false).is_none());
    }

    #[test]
    fn test_preferred_video_beats_better_fitting_image() {
        let catalog = MediaCatalog::from_assets(vec![
            image("perfect.png", 639, 488),
            video("wide.mp4", 1920, 1080),
        ]);
        let assigner = MediaAssigner::new(&catalog, FitScorer::new(5.0));

        let best = assigner
            .select_best(&SLOT, true, false, |_| false)
            .expect("candidate");
        assert!(best.is_video(), "boosted video must outrank a perfect image");
    }
}
