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

//! Bundle assembly for PosterForge.
//!
//! This crate turns a probed media catalog into versioned, packaged mods:
//! - [`slots`]: the fixed poster slot table of the reference deployment
//! - [`assign`]: best-fit media selection per slot
//! - [`sequencer`]: the bundle loop — numbering, versioning, slot filling,
//!   and the two-phase commit against the tracking store
//! - [`layout`] / [`transform`] / [`archive`]: the packaging collaborators
//!   that materialize the BepInEx tree, crop/resize media, and zip the
//!   result
//!
//! The sequencer only talks to packaging through the [`BundlePackager`]
//! trait, so the selection and bookkeeping logic is testable without any
//! pixel or archive I/O.

pub mod archive;
pub mod assign;
pub mod error;
pub mod layout;
pub mod naming;
pub mod plan;
pub mod sequencer;
pub mod slots;
pub mod transform;

pub use assign::MediaAssigner;
pub use error::{BundleError, Result};
pub use layout::ModPackager;
pub use naming::BundleNaming;
pub use plan::{BundlePlan, SlotAssignment};
pub use sequencer::{BundlePackager, BundleSequencer, CreatedBundle};
pub use slots::{TargetSlot, POSTER_SLOTS};
