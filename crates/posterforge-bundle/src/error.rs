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

//! Error types for bundle assembly and packaging

use thiserror::Error;

/// Bundle assembly and packaging errors
#[derive(Debug, Error)]
pub enum BundleError {
    /// Media probing error
    #[error(transparent)]
    Media(#[from] posterforge_media::MediaError),

    /// Tracking-file error
    #[error(transparent)]
    Tracking(#[from] posterforge_tracking::TrackingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Still-image crop/resize failed
    #[error("Image transform error: {0}")]
    Image(String),

    /// External ffmpeg transcode failed
    #[error("Video transcode error: {0}")]
    Transcode(String),

    /// Zip archive creation failed
    #[error("Archive error: {0}")]
    Archive(String),

    /// Not enough unused media to fill even one bundle
    #[error("Not enough media to create a mod (need {needed}, have {available})")]
    InsufficientMedia { available: usize, needed: usize },
}

/// Result type for bundle operations
pub type Result<T> = std::result::Result<T, BundleError>;
