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

//! Aspect-ratio fit scoring
//!
//! Slots are filled by center-cropping, so a moderate aspect mismatch is
//! acceptable: inside the tolerance band the score decays gently from 1.0,
//! and outside it a reduced "consolation" score still orders candidates by
//! closeness instead of cutting them off.
//!
//! The video-preference rule is a tie breaker, not a filter. A preferred
//! video scores `max(fit, 0.7) * 2.0`, which intentionally escapes the
//! [0, 1] range so that any unused video outranks any image for the slot
//! that wants motion content. Images under the same preference are scaled
//! by 0.8.

use crate::catalog::MediaKind;

/// Scores media aspect ratios against a slot's target aspect ratio
#[derive(Debug, Clone, Copy)]
pub struct FitScorer {
    /// Percent deviation of `media/target` still considered a good match
    pub tolerance_percent: f64,
}

impl FitScorer {
    pub fn new(tolerance_percent: f64) -> Self {
        FitScorer { tolerance_percent }
    }

    /// Base fit of `media_aspect` against `target_aspect`, preference-free
    ///
    /// Returns 0.0 when either aspect is non-positive. The tolerance
    /// boundary itself scores via the within-tolerance branch.
    pub fn fit(&self, media_aspect: f64, target_aspect: f64) -> f64 {
        if media_aspect <= 0.0 || target_aspect <= 0.0 {
            return 0.0;
        }

        let ratio = media_aspect / target_aspect;
        let tolerance = self.tolerance_percent / 100.0;

        if ratio < 1.0 - tolerance || ratio > 1.0 + tolerance {
            // Outside tolerance: consolation score, still favoring ratios near 1
            0.5 * (1.0 - (1.0 - ratio).abs() * 0.5)
        } else {
            1.0 - (1.0 - ratio).abs() * 0.1
        }
    }

    /// Full candidate score, applying the video-preference rule
    pub fn score(
        &self,
        media_aspect: f64,
        target_aspect: f64,
        prefer_video: bool,
        kind: MediaKind,
    ) -> f64 {
        let mut score = self.fit(media_aspect, target_aspect);

        if prefer_video {
            match kind {
                MediaKind::Video => {
                    score = score.max(0.7);
                    score *= 2.0;
                }
                MediaKind::Image => {
                    score *= 0.8;
                }
            }
        }

        score
    }
}
