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

//! Shared output formatting for the CLI.
//!
//! Consistent colored output with emoji indicators, mirroring the phase
//! markers the generator prints for each run.

use console::style;

/// Print a success message with a green checkmark.
pub fn success(msg: &str) {
    println!("{} {}", style("✅").green().bold(), msg);
}

/// Print an error message to stderr with a red cross.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("❌").red().bold(), msg);
}

/// Print a warning message with a yellow marker.
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an informational message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").cyan(), msg);
}

/// Print a bold section header.
pub fn header(msg: &str) {
    println!("{}", style(msg).bold());
}

/// Print an indented key-value detail line.
pub fn detail(key: &str, value: &str) {
    println!("  {} {}", style(format!("{key}:")).dim(), value);
}
