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

//! Target poster slots
//!
//! The CustomPosters plugin exposes five poster surfaces plus the tips
//! sheet, each with a fixed pixel size. Slots are filled in array order;
//! that order is part of the assignment semantics (the first slot is the
//! one offered the video preference).

use serde::Serialize;

/// A named output slot with a required pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetSlot {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl TargetSlot {
    /// Width/height ratio of the slot
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// True for the tips sheet, which lands in its own directory
    pub fn is_tips(&self) -> bool {
        self.name == "CustomTips"
    }
}

/// The fixed slot set of the reference deployment, in fill order
pub const POSTER_SLOTS: [TargetSlot; 6] = [
    TargetSlot {
        name: "Poster1",
        width: 639,
        height: 488,
    },
    TargetSlot {
        name: "Poster2",
        width: 730,
        height: 490,
    },
    TargetSlot {
        name: "Poster3",
        width: 749,
        height: 1054,
    },
    TargetSlot {
        name: "Poster4",
        width: 729,
        height: 999,
    },
    TargetSlot {
        name: "Poster5",
        width: 552,
        height: 769,
    },
    TargetSlot {
        name: "CustomTips",
        width: 860,
        height: 1219,
    },
];
