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

mod output;

use anyhow::Result;
use clap::Parser;
use posterforge_bundle::{BundleError, BundleNaming, BundleSequencer, ModPackager, POSTER_SLOTS};
use posterforge_media::{FitScorer, MediaCatalog};
use posterforge_tracking::TrackingStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "posterforge")]
#[command(version, about = "Generate versioned CustomPosters mod packs from raw media")]
#[command(
    long_about = "PosterForge scans a directory of images and videos, assigns the best-fitting \
media to each poster slot, crops and resizes every assignment, and packages the result as \
versioned Thunderstore mod archives. Source media already consumed by a previous run is never \
reused."
)]
#[command(author = "PosterForge Contributors")]
struct Cli {
    /// Input directory containing source media files
    #[arg(long, value_name = "DIR", env = "POSTER_INPUT_DIR", default_value = "./input")]
    input: PathBuf,

    /// Output directory for generated mod trees and the tracking file
    #[arg(long, value_name = "DIR", env = "POSTER_OUTPUT_DIR", default_value = "./mods")]
    output: PathBuf,

    /// Build directory for mod zip archives
    #[arg(long, value_name = "DIR", env = "POSTER_BUILD_DIR", default_value = "./build")]
    build: PathBuf,

    /// Aspect ratio tolerance in percent
    #[arg(long, value_name = "PERCENT", env = "POSTER_TOLERANCE", default_value_t = 5.0)]
    tolerance: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress output
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(true) when at least one mod was produced
fn run(cli: &Cli) -> Result<bool> {
    if !cli.quiet {
        output::header("PosterForge Mod Generator");
        output::detail("Input directory", &cli.input.display().to_string());
        output::detail("Output directory", &cli.output.display().to_string());
        output::detail("Build directory", &cli.build.display().to_string());
    }
    debug!(
        "Resolved directories: input={} output={} build={}",
        cli.input.display(),
        cli.output.display(),
        cli.build.display()
    );

    // Phase 1: discover media
    if !cli.quiet {
        output::info("[1/4] Discovering media files...");
    }
    let catalog = MediaCatalog::scan(&cli.input)?;
    if !cli.quiet {
        output::detail("Media files", &catalog.len().to_string());
        output::detail("Videos", &catalog.video_count().to_string());
        output::detail("Images", &catalog.image_count().to_string());
    }
    if catalog.is_empty() {
        output::error("No media files found");
        return Ok(false);
    }

    // Phase 2: load tracking state and self-heal from existing mods
    if !cli.quiet {
        output::info("[2/4] Loading existing mod data...");
    }
    let naming = BundleNaming::default();
    let mut store = TrackingStore::load(cli.output.join("versions.json"))?;
    store
        .ledger
        .seed_from_output_tree(&cli.output, &naming.display_prefix);
    if !cli.quiet {
        output::detail("Already used", &store.ledger.len().to_string());
    }

    // Phase 3: assign media and package mods
    if !cli.quiet {
        output::info("[3/4] Assigning media and creating mods...");
    }
    debug!("Scoring aspect fit with {}% tolerance", cli.tolerance);
    let scorer = FitScorer::new(cli.tolerance);
    let sequencer = BundleSequencer::new(&catalog, scorer, naming, cli.output.clone());
    let packager = ModPackager::new(cli.output.clone(), cli.build.clone());

    let created = match sequencer.run(&mut store, &packager) {
        Ok(created) => created,
        Err(BundleError::InsufficientMedia { available, needed }) => {
            output::error(&format!(
                "Not enough media to create a mod (need {needed}, have {available})"
            ));
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    if created.is_empty() {
        output::error("No mods were created");
        return Ok(false);
    }

    // Phase 4: report
    if !cli.quiet {
        output::info("[4/4] Created archives:");
        for bundle in &created {
            if !bundle.plan.has_video() {
                output::warn(&format!(
                    "{} has no video (proceeding with images only)",
                    bundle.plan.display_name
                ));
            }
            output::success(&format!(
                "{} v{} ({} slots) -> {}",
                bundle.plan.display_name,
                bundle.plan.version,
                POSTER_SLOTS.len(),
                bundle.archive_path.display()
            ));
        }
        output::success(&format!("Created {} mod(s)", created.len()));
    }

    Ok(true)
}
