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

//! Durable cross-run state for PosterForge.
//!
//! Everything that must survive between runs lives in one JSON tracking
//! file owned by [`TrackingStore`]:
//! - [`UsageLedger`] — the set of source media already consumed by any
//!   previously produced mod pack
//! - [`VersionRegistry`] — the last issued version per mod display name
//! - an optional `next_bundle` counter for mod numbering
//!
//! The store reads the file once at startup and writes it back after each
//! successfully packaged mod. Legacy tracking files that are a flat
//! `{name: version}` map load as a version registry with an empty ledger.

pub mod error;
pub mod ledger;
pub mod store;
pub mod versions;

pub use error::{Result, TrackingError};
pub use ledger::UsageLedger;
pub use store::TrackingStore;
pub use versions::VersionRegistry;
