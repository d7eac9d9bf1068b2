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

//! Error types for media discovery and probing

use thiserror::Error;

/// Media discovery and probing errors
#[derive(Debug, Error)]
pub enum MediaError {
    /// Image header could not be read
    #[error("Image probe error: {0}")]
    ImageProbe(String),

    /// Video container could not be parsed
    #[error("Video probe error: {0}")]
    VideoProbe(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for media operations
pub type Result<T> = std::result::Result<T, MediaError>;
