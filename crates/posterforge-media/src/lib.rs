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

//! Media discovery and fit scoring for PosterForge.
//!
//! This crate covers the read-only half of a PosterForge run:
//! - **Catalog**: walk a source directory, classify files as image or video
//!   by extension, probe pixel dimensions from the container headers.
//! - **Fit scoring**: rate how well a media aspect ratio suits a poster
//!   slot's aspect ratio, with an optional preference boost for video.
//!
//! Nothing here mutates the filesystem; assignment and bookkeeping live in
//! the `posterforge-bundle` and `posterforge-tracking` crates.

pub mod catalog;
pub mod error;
pub mod fit;

pub use catalog::{
    MediaAsset, MediaCatalog, MediaKind, SUPPORTED_IMAGE_EXTENSIONS, SUPPORTED_VIDEO_EXTENSIONS,
};
pub use error::{MediaError, Result};
pub use fit::FitScorer;
