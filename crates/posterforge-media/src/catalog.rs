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

//! Source media catalog
//!
//! Walks a directory tree, classifies files as image or video by extension,
//! and probes pixel dimensions from the file headers:
//! - Images: header-only dimension read via the `image` crate
//! - Videos: MP4 container parse via `mp4parse`, first video track
//!
//! Files whose dimensions cannot be probed are logged and excluded; the
//! catalog only ever contains assets with positive width and height.

use crate::error::{MediaError, Result};
use mp4parse::{read_mp4, TrackType};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Image extensions the pipeline accepts (lowercase, without dot)
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Video extensions the pipeline accepts (lowercase, without dot)
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// Media classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a path by its file extension, if it is a supported format
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Returns true when the path carries a supported image or video extension
pub fn is_supported_media(path: &Path) -> bool {
    MediaKind::from_path(path).is_some()
}

/// A probed source media file
///
/// Identity is the file path. Dimensions come from the container header at
/// scan time; an asset in a catalog always has positive width and height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAsset {
    /// Source file path (primary key across the tracking ledger)
    pub path: PathBuf,

    /// Image or video
    pub kind: MediaKind,

    /// Pixel width
    pub width: u32,

    /// Pixel height
    pub height: u32,
}

impl MediaAsset {
    /// Width/height ratio, or 0.0 when the height is zero
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    /// True for video assets
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Probe image dimensions from the file header without decoding pixels
fn probe_image(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path)
        .map_err(|e| MediaError::ImageProbe(format!("{}: {e}", path.display())))
}

/// Probe video dimensions from the first video track of an MP4 container
///
/// Prefers the sample-entry dimensions (true pixel values); falls back to
/// the track header, whose width/height are 16.16 fixed point.
fn probe_video(path: &Path) -> Result<(u32, u32)> {
    let mut file = File::open(path)?;
    let context = read_mp4(&mut file)
        .map_err(|e| MediaError::VideoProbe(format!("{}: {e:?}", path.display())))?;

    for track in &context.tracks {
        if track.track_type != TrackType::Video {
            continue;
        }

        let sample_dims = track
            .stsd
            .as_ref()
            .and_then(|stsd| stsd.descriptions.first())
            .and_then(|entry| match entry {
                mp4parse::SampleEntry::Video(video) => {
                    Some((u32::from(video.width), u32::from(video.height)))
                }
                _ => None,
            });

        let dims = sample_dims.or_else(|| {
            track
                .tkhd
                .as_ref()
                .map(|tkhd| (tkhd.width >> 16, tkhd.height >> 16))
        });

        if let Some((width, height)) = dims {
            return Ok((width, height));
        }
    }

    Err(MediaError::VideoProbe(format!(
        "{}: no video track with dimensions",
        path.display()
    )))
}

/// Probe dimensions for a classified media file
pub fn probe_dimensions(path: &Path, kind: MediaKind) -> Result<(u32, u32)> {
    match kind {
        MediaKind::Image => probe_image(path),
        MediaKind::Video => probe_video(path),
    }
}

/// Catalog of probed source media under one input root
#[derive(Debug, Clone, Default)]
pub struct MediaCatalog {
    assets: Vec<MediaAsset>,
}

impl MediaCatalog {
    /// Recursively scan `root` for supported media files
    ///
    /// Files that fail probing (or probe to zero dimensions) are logged and
    /// skipped; the scan itself only fails on a walk error for the root.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut assets = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| {
                MediaError::Io(std::io::Error::other(format!(
                    "walking {}: {e}",
                    root.display()
                )))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(kind) = MediaKind::from_path(path) else {
                continue;
            };

            match probe_dimensions(path, kind) {
                Ok((width, height)) if width > 0 && height > 0 => {
                    debug!(
                        "Cataloged {} ({}x{}, {:?})",
                        path.display(),
                        width,
                        height,
                        kind
                    );
                    assets.push(MediaAsset {
                        path: path.to_path_buf(),
                        kind,
                        width,
                        height,
                    });
                }
                Ok((width, height)) => {
                    warn!(
                        "Skipping {}: degenerate dimensions {}x{}",
                        path.display(),
                        width,
                        height
                    );
                }
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                }
            }
        }

        Ok(MediaCatalog { assets })
    }

    /// Build a catalog from already-probed assets (used by tests and tools)
    pub fn from_assets(assets: Vec<MediaAsset>) -> Self {
        MediaCatalog { assets }
    }

    /// All cataloged assets, in scan order
    pub fn assets(&self) -> &[MediaAsset] {
        &self.assets
    }

    /// Number of cataloged assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True when the scan found nothing usable
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of video assets
    pub fn video_count(&self) -> usize {
        self.assets.iter().filter(|a| a.is_video()).count()
    }

    /// Number of image assets
    pub fn image_count(&self) -> usize {
        self.assets.len() - self.video_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_image_extensions() {
        for name in ["a.png", "b.jpg", "c.JPEG", "d.BMP"] {
            assert_eq!(
                MediaKind::from_path(Path::new(name)),
                Some(MediaKind::Image),
                "{name} should classify as image"
            );
        }
    }

    #[test]
    fn test_classify_video_extension() {
        assert_eq!(
            MediaKind::from_path(Path::new("clip.mp4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("clip.MP4")),
            Some(MediaKind::Video)
        );
    }

    #[test]
    fn test_classify_rejects_other_extensions() {
        assert_eq!(MediaKind::from_path(Path::new("doc.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("movie.mkv")), None);
        assert_eq!(MediaKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_aspect_ratio_zero_height() {
        let asset = MediaAsset {
            path: PathBuf::from("/x.png"),
            kind: MediaKind::Image,
            width: 100,
            height: 0,
        };
        assert_eq!(asset.aspect_ratio(), 0.0);
    }

    #[test]
    fn test_aspect_ratio() {
        let asset = MediaAsset {
            path: PathBuf::from("/x.png"),
            kind: MediaKind::Image,
            width: 639,
            height: 488,
        };
        assert!((asset.aspect_ratio() - 639.0 / 488.0).abs() < 1e-9);
    }

    #[test]
    fn test_scan_probes_real_images_and_skips_garbage() {
        let dir = tempfile::tempdir().expect("tempdir");

        let img = image::RgbImage::new(64, 32);
        img.save(dir.path().join("ok.png")).expect("save png");

        // Supported extension but unparseable content
        std::fs::write(dir.path().join("broken.png"), b"not a png").expect("write");
        // Unsupported extension, ignored entirely
        std::fs::write(dir.path().join("notes.txt"), b"hello").expect("write");

        let catalog = MediaCatalog::scan(dir.path()).expect("scan");
        assert_eq!(catalog.len(), 1);
        let asset = &catalog.assets()[0];
        assert_eq!((asset.width, asset.height), (64, 32));
        assert_eq!(asset.kind, MediaKind::Image);
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).expect("mkdir");

        let img = image::RgbImage::new(10, 10);
        img.save(nested.join("deep.jpg")).expect("save jpg");

        let catalog = MediaCatalog::scan(dir.path()).expect("scan");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.image_count(), 1);
        assert_eq!(catalog.video_count(), 0);
    }
}
