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

//! Bundle sequencing
//!
//! Drives repeated bundle creation: allocate the next mod number and
//! version, fill every slot from the catalog, hand the complete plan to
//! the packager, and commit to the tracking store.
//!
//! Commit is two-phase. Slot picks stay tentative while the packager
//! materializes and archives the mod; only on packaging success are the
//! picks marked used and the tracking file written. An unfillable slot or
//! a packaging failure releases the tentative picks and stops the loop,
//! so media is never burned by a mod that was not produced.

use crate::assign::MediaAssigner;
use crate::error::{BundleError, Result};
use crate::naming::BundleNaming;
use crate::plan::{BundlePlan, SlotAssignment};
use crate::slots::POSTER_SLOTS;
use posterforge_media::{FitScorer, MediaCatalog};
use posterforge_tracking::{TrackingStore, UsageLedger};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Packaging collaborator: materialize and archive one planned bundle
///
/// Returns the path of the created archive. Implementations must not
/// touch the tracking store; the sequencer owns the commit.
pub trait BundlePackager {
    fn package(&self, plan: &BundlePlan) -> Result<PathBuf>;
}

/// A successfully packaged and committed bundle
#[derive(Debug, Clone)]
pub struct CreatedBundle {
    pub plan: BundlePlan,
    pub archive_path: PathBuf,
}

/// Orchestrates the bundle loop for one run
pub struct BundleSequencer<'a> {
    catalog: &'a MediaCatalog,
    scorer: FitScorer,
    naming: BundleNaming,
    output_root: PathBuf,
}

impl<'a> BundleSequencer<'a> {
    pub fn new(
        catalog: &'a MediaCatalog,
        scorer: FitScorer,
        naming: BundleNaming,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        BundleSequencer {
            catalog,
            scorer,
            naming,
            output_root: output_root.into(),
        }
    }

    /// Upper bound of bundles this catalog can yield
    pub fn planned_bundles(&self) -> usize {
        self.catalog.len() / POSTER_SLOTS.len()
    }

    /// Create and package bundles until media runs out or a failure stops
    /// the loop; returns every committed bundle
    pub fn run(
        &self,
        store: &mut TrackingStore,
        packager: &impl BundlePackager,
    ) -> Result<Vec<CreatedBundle>> {
        let planned = self.planned_bundles();
        if planned == 0 {
            return Err(BundleError::InsufficientMedia {
                available: self.catalog.len(),
                needed: POSTER_SLOTS.len(),
            });
        }
        info!("Planning up to {planned} new mod(s)");

        let mut created = Vec::new();
        for _ in 0..planned {
            let number = store
                .next_bundle()
                .unwrap_or_else(|| self.naming.next_number_from_dir(&self.output_root));
            let display_name = self.naming.display_name(number);

            let Some(assignments) = self.fill_slots(&store.ledger) else {
                // Tentative picks are dropped; nothing was marked used
                warn!("Could not fill all slots for {display_name}, stopping");
                break;
            };

            let version = store.versions.next_version(&display_name)?;
            let plan = BundlePlan {
                number,
                display_name: display_name.clone(),
                dir_name: self.naming.dir_name(number),
                version,
                assignments,
            };

            if !plan.has_video() {
                warn!("{display_name} has no video assigned, proceeding with images only");
            }

            info!("Creating {display_name} (v{})", plan.version);
            match packager.package(&plan) {
                Ok(archive_path) => {
                    for assignment in &plan.assignments {
                        store.ledger.mark_used(&assignment.asset.path);
                    }
                    store.set_next_bundle(number + 1);
                    store.save()?;
                    info!(
                        "Committed {display_name} v{} -> {}",
                        plan.version,
                        archive_path.display()
                    );
                    created.push(CreatedBundle { plan, archive_path });
                }
                Err(e) => {
                    // Picks stay unused; the in-memory version bump is
                    // discarded with the unsaved store state
                    error!("Packaging failed for {display_name}: {e}");
                    break;
                }
            }
        }

        Ok(created)
    }

    /// Fill every slot in order, or `None` when a slot is unfillable
    fn fill_slots(&self, ledger: &UsageLedger) -> Option<Vec<SlotAssignment>> {
        let assigner = MediaAssigner::new(self.catalog, self.scorer);
        let mut picks: Vec<SlotAssignment> = Vec::with_capacity(POSTER_SLOTS.len());
        let mut video_selected = false;

        for (idx, slot) in POSTER_SLOTS.iter().enumerate() {
            let excluded = |path: &Path| {
                ledger.is_used(path) || picks.iter().any(|p| p.asset.path == path)
            };

            // The first slot wants motion content when any unused video exists
            let prefer_video = idx == 0
                && !video_selected
                && self
                    .catalog
                    .assets()
                    .iter()
                    .any(|a| a.is_video() && !excluded(&a.path));

            let Some(selected) = assigner.select_best(slot, prefer_video, false, excluded) else {
                warn!("No suitable media for slot {}", slot.name);
                return None;
            };

            if selected.is_video() {
                video_selected = true;
            }
            info!(
                "  {}: {} ({}x{}, aspect={:.2}, {})",
                slot.name,
                selected
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| selected.path.display().to_string()),
                selected.width,
                selected.height,
                selected.aspect_ratio(),
                if selected.is_video() { "video" } else { "image" }
            );

            picks.push(SlotAssignment {
                slot: *slot,
                asset: selected.clone(),
            });
        }

        Some(picks)
    }
}
