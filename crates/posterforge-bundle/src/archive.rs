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

//! Thunderstore-format zip output
//!
//! One deflated archive per mod, containing the mod's directory tree with
//! entry names relative to the mod root (so `BepInEx/...` sits at the top
//! of the archive).

use crate::error::{BundleError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip `mod_root` into `<build_root>/<archive_name>`
///
/// Creates `build_root` if needed and returns the archive path.
pub fn write_mod_archive(
    mod_root: &Path,
    build_root: &Path,
    archive_name: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(build_root)?;
    let archive_path = build_root.join(archive_name);

    let file = File::create(&archive_path)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(mod_root) {
        let entry =
            entry.map_err(|e| BundleError::Archive(format!("walking {}: {e}", mod_root.display())))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(mod_root)
            .map_err(|e| BundleError::Archive(e.to_string()))?;
        // Zip entry names always use forward slashes
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        debug!("Archiving {name}");
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| BundleError::Archive(format!("{name}: {e}")))?;
        let mut src = File::open(entry.path())?;
        std::io::copy(&mut src, &mut writer)?;
    }

    writer
        .finish()
        .map_err(|e| BundleError::Archive(e.to_string()))?;

    info!("Created archive {}", archive_path.display());
    Ok(archive_path)
}
