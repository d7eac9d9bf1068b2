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

//! Error types for tracking-file operations

use thiserror::Error;

/// Tracking-file and version-registry errors
#[derive(Debug, Error)]
pub enum TrackingError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracking file serialization error
    #[error("Tracking file JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored version string is not `major.minor.patch`
    #[error("Invalid version string for {name}: {value}")]
    InvalidVersion { name: String, value: String },
}

/// Result type for tracking operations
pub type Result<T> = std::result::Result<T, TrackingError>;
