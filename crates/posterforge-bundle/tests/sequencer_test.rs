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

//! Sequencer integration tests with a mock packager.
//!
//! These cover the selection/bookkeeping core without any pixel or
//! archive I/O: exclusivity across slots, abort-and-release on an
//! unfillable slot, the two-phase commit, and version/number allocation
//! across repeated bundles.

use posterforge_bundle::{
    BundleError, BundleNaming, BundlePackager, BundlePlan, BundleSequencer, CreatedBundle,
};
use posterforge_media::{FitScorer, MediaAsset, MediaCatalog, MediaKind};
use posterforge_tracking::TrackingStore;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Packager that records plans and optionally fails
struct MockPackager {
    fail: bool,
    packaged: RefCell<Vec<String>>,
}

impl MockPackager {
    fn ok() -> Self {
        MockPackager {
            fail: false,
            packaged: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        MockPackager {
            fail: true,
            packaged: RefCell::new(Vec::new()),
        }
    }
}

impl BundlePackager for MockPackager {
    fn package(&self, plan: &BundlePlan) -> posterforge_bundle::Result<PathBuf> {
        if self.fail {
            return Err(BundleError::Archive("mock failure".to_string()));
        }
        self.packaged.borrow_mut().push(plan.display_name.clone());
        Ok(PathBuf::from(format!("/build/{}", plan.archive_name())))
    }
}

fn square_image(name: &str) -> MediaAsset {
    MediaAsset {
        path: PathBuf::from(format!("/media/{name}")),
        kind: MediaKind::Image,
        // 1.31 aspect, close to Poster1's 639/488
        width: 1310,
        height: 1000,
    }
}

fn images(count: usize) -> Vec<MediaAsset> {
    (0..count).map(|i| square_image(&format!("img{i}.png"))).collect()
}

fn store_in(dir: &tempfile::TempDir) -> TrackingStore {
    TrackingStore::new(dir.path().join("mods/versions.json"))
}

#[test]
fn six_images_fill_one_full_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = MediaCatalog::from_assets(images(6));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);
    let packager = MockPackager::ok();

    let created = sequencer.run(&mut store, &packager).expect("run");
    assert_eq!(created.len(), 1);

    let bundle: &CreatedBundle = &created[0];
    assert_eq!(bundle.plan.display_name, "BikininjaPosters01");
    assert_eq!(bundle.plan.version, "0.0.1");
    assert_eq!(bundle.plan.assignments.len(), 6);

    // Six distinct assignments, pool fully drained
    let assigned: BTreeSet<_> = bundle
        .plan
        .assignments
        .iter()
        .map(|a| a.asset.path.clone())
        .collect();
    assert_eq!(assigned.len(), 6);
    assert_eq!(store.ledger.len(), 6);
    for asset in catalog.assets() {
        assert!(store.ledger.is_used(&asset.path));
    }

    // Commit persisted the tracking file with the advanced counter
    let reloaded = TrackingStore::load(store.path()).expect("reload");
    assert_eq!(reloaded.ledger.len(), 6);
    assert_eq!(reloaded.next_bundle(), Some(2));
    assert_eq!(reloaded.versions.current("BikininjaPosters01"), Some("0.0.1"));
}

#[test]
fn twelve_images_yield_two_versioned_bundles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = MediaCatalog::from_assets(images(12));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);
    let packager = MockPackager::ok();

    let created = sequencer.run(&mut store, &packager).expect("run");
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].plan.display_name, "BikininjaPosters01");
    assert_eq!(created[1].plan.display_name, "BikininjaPosters02");
    assert_eq!(created[0].plan.version, "0.0.1");
    assert_eq!(created[1].plan.version, "0.0.1");
    assert_eq!(store.ledger.len(), 12);
    assert_eq!(store.next_bundle(), Some(3));

    // No asset may appear in both bundles
    let mut all: Vec<_> = created
        .iter()
        .flat_map(|c| c.plan.assignments.iter().map(|a| a.asset.path.clone()))
        .collect();
    let unique: BTreeSet<_> = all.drain(..).collect();
    assert_eq!(unique.len(), 12);
}

#[test]
fn unfillable_slot_aborts_and_releases_picks() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Six assets, but one is already consumed: slot 6 cannot be filled
    let catalog = MediaCatalog::from_assets(images(6));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);
    store.ledger.mark_used("/media/img0.png");
    let packager = MockPackager::ok();

    let created = sequencer.run(&mut store, &packager).expect("run");
    assert!(created.is_empty());
    assert!(packager.packaged.borrow().is_empty());

    // Only the pre-existing mark remains; the attempt burned nothing
    assert_eq!(store.ledger.len(), 1);
    assert_eq!(store.versions.current("BikininjaPosters01"), None);
}

#[test]
fn insufficient_media_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = MediaCatalog::from_assets(images(5));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);

    let result = sequencer.run(&mut store, &MockPackager::ok());
    assert!(matches!(
        result,
        Err(BundleError::InsufficientMedia {
            available: 5,
            needed: 6
        })
    ));
    assert!(store.ledger.is_empty());
}

#[test]
fn packaging_failure_releases_picks_and_persists_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = MediaCatalog::from_assets(images(6));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);

    let created = sequencer.run(&mut store, &MockPackager::failing()).expect("run");
    assert!(created.is_empty());
    assert!(store.ledger.is_empty());
    assert!(!store.path().exists(), "tracking file must not be written");
}

#[test]
fn first_slot_prefers_an_available_video() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut assets = images(5);
    assets.push(MediaAsset {
        path: PathBuf::from("/media/clip.mp4"),
        kind: MediaKind::Video,
        width: 1920,
        height: 1080,
    });
    let catalog = MediaCatalog::from_assets(assets);
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);

    let created = sequencer.run(&mut store, &MockPackager::ok()).expect("run");
    assert_eq!(created.len(), 1);

    let first = &created[0].plan.assignments[0];
    assert_eq!(first.slot.name, "Poster1");
    assert!(
        first.asset.is_video(),
        "the first slot must take the video despite its worse fit"
    );
    assert!(created[0].plan.has_video());
}

#[test]
fn run_resumes_numbering_from_persisted_counter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = MediaCatalog::from_assets(images(6));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        dir.path().join("mods"),
    );
    let mut store = store_in(&dir);
    store.set_next_bundle(4);

    let created = sequencer.run(&mut store, &MockPackager::ok()).expect("run");
    assert_eq!(created[0].plan.display_name, "BikininjaPosters04");
    assert_eq!(store.next_bundle(), Some(5));
}

#[test]
fn numbering_falls_back_to_scanning_existing_mod_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mods = dir.path().join("mods");
    std::fs::create_dir_all(mods.join("BikininjaPosters02")).expect("mkdir");

    let catalog = MediaCatalog::from_assets(images(6));
    let sequencer = BundleSequencer::new(
        &catalog,
        FitScorer::new(5.0),
        BundleNaming::default(),
        &mods,
    );
    let mut store = store_in(&dir);

    let created = sequencer.run(&mut store, &MockPackager::ok()).expect("run");
    assert_eq!(created[0].plan.display_name, "BikininjaPosters03");
}
