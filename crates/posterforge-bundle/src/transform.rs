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

//! Crop-first media transforms
//!
//! Assigned media is center-cropped to the slot's aspect ratio and then
//! resized, so a moderate aspect mismatch costs edge content instead of
//! letterboxing. Still images go through the `image` crate; videos are
//! handed to an external `ffmpeg` with an equivalent crop+scale filter.

use crate::error::{BundleError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageFormat;
use posterforge_media::catalog::{probe_dimensions, MediaKind};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Center crop box `(x, y, width, height)` matching the target aspect
///
/// Crops the wider axis: a source wider than the target loses width from
/// both sides, a taller source loses height top and bottom.
pub fn center_crop_box(
    src_width: u32,
    src_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32, u32, u32) {
    let src_aspect = f64::from(src_width) / f64::from(src_height);
    let target_aspect = f64::from(target_width) / f64::from(target_height);

    if src_aspect > target_aspect {
        let crop_width = (f64::from(src_height) * target_aspect) as u32;
        let x = (src_width - crop_width) / 2;
        (x, 0, crop_width, src_height)
    } else {
        let crop_height = (f64::from(src_width) / target_aspect) as u32;
        let y = (src_height - crop_height) / 2;
        (0, y, src_width, crop_height)
    }
}

/// Crop and resize a still image, saving by output extension
///
/// PNG is the pipeline's still format; JPEG output (quality 95) is kept
/// for callers that ask for it explicitly.
pub fn crop_resize_image(
    input: &Path,
    target_width: u32,
    target_height: u32,
    output: &Path,
) -> Result<()> {
    let img = image::open(input)
        .map_err(|e| BundleError::Image(format!("{}: {e}", input.display())))?;

    let (x, y, w, h) = center_crop_box(img.width(), img.height(), target_width, target_height);
    let resized = img
        .crop_imm(x, y, w, h)
        .resize_exact(target_width, target_height, FilterType::Lanczos3);

    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => {
            let file = File::create(output)?;
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 95);
            resized
                .write_with_encoder(encoder)
                .map_err(|e| BundleError::Image(format!("{}: {e}", output.display())))?;
        }
        _ => {
            resized
                .save_with_format(output, ImageFormat::Png)
                .map_err(|e| BundleError::Image(format!("{}: {e}", output.display())))?;
        }
    }

    debug!(
        "Transformed image {} -> {} ({target_width}x{target_height})",
        input.display(),
        output.display()
    );
    Ok(())
}

/// Crop and resize a video through the external ffmpeg binary
pub fn crop_resize_video(
    input: &Path,
    target_width: u32,
    target_height: u32,
    output: &Path,
) -> Result<()> {
    let (src_width, src_height) = probe_dimensions(input, MediaKind::Video)?;
    if src_width == 0 || src_height == 0 {
        return Err(BundleError::Transcode(format!(
            "{}: degenerate source dimensions",
            input.display()
        )));
    }

    let (x, y, w, h) = center_crop_box(src_width, src_height, target_width, target_height);
    let filter = format!("crop={w}:{h}:{x}:{y},scale={target_width}:{target_height}");

    let ffmpeg = which::which("ffmpeg")
        .map_err(|e| BundleError::Transcode(format!("ffmpeg not found: {e}")))?;

    debug!(
        "Transcoding {} -> {} (vf {filter})",
        input.display(),
        output.display()
    );

    let result = Command::new(ffmpeg)
        .arg("-i")
        .arg(input)
        .arg("-vf")
        .arg(&filter)
        .arg("-c:v")
        .arg("libx264")
        .arg("-preset")
        .arg("fast")
        .arg("-crf")
        .arg("23")
        .arg("-c:a")
        .arg("aac")
        .arg("-y")
        .arg(output)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| BundleError::Transcode(format!("failed to start ffmpeg: {e}")))?;

    if result.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&result.stderr);
    let mut tail: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .rev()
        .take(4)
        .collect();
    tail.reverse();

    let detail = if tail.is_empty() {
        "ffmpeg exited with an error".to_string()
    } else {
        tail.join(" | ")
    };
    warn!("ffmpeg failed for {}: {detail}", input.display());
    Err(BundleError::Transcode(format!(
        "{}: {detail}",
        input.display()
    )))
}

/// Transform an asset of either kind into `output`
pub fn crop_resize(
    kind: MediaKind,
    input: &Path,
    target_width: u32,
    target_height: u32,
    output: &Path,
) -> Result<()> {
    match kind {
        MediaKind::Image => crop_resize_image(input, target_width, target_height, output),
        MediaKind::Video => crop_resize_video(input, target_width, target_height, output),
    }
}
