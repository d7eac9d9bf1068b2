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

//! Per-mod version registry
//!
//! Each mod display name carries an independent `major.minor.patch`
//! version. Every allocation bumps the patch component; a name seen for
//! the first time starts at "0.0.0" so its first allocated version is
//! "0.0.1". There are no minor/major bumps and no rollback.

use crate::error::{Result, TrackingError};
use std::collections::BTreeMap;
use tracing::debug;

/// Monotonic per-mod patch-version counter
#[derive(Debug, Clone, Default)]
pub struct VersionRegistry {
    versions: BTreeMap<String, String>,
}

impl VersionRegistry {
    /// Build a registry from a loaded name → version map
    pub fn from_map(versions: BTreeMap<String, String>) -> Self {
        VersionRegistry { versions }
    }

    /// Last issued version for `name`, if any
    pub fn current(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    /// Allocate the next version for `name`, bumping the patch component
    pub fn next_version(&mut self, name: &str) -> Result<String> {
        let current = self
            .versions
            .entry(name.to_string())
            .or_insert_with(|| "0.0.0".to_string());

        let mut parts: Vec<u64> = Vec::with_capacity(3);
        for piece in current.split('.') {
            match piece.parse::<u64>() {
                Ok(n) => parts.push(n),
                Err(_) => {
                    return Err(TrackingError::InvalidVersion {
                        name: name.to_string(),
                        value: current.clone(),
                    })
                }
            }
        }
        if parts.len() != 3 {
            return Err(TrackingError::InvalidVersion {
                name: name.to_string(),
                value: current.clone(),
            });
        }

        parts[2] += 1;
        let next = format!("{}.{}.{}", parts[0], parts[1], parts[2]);
        debug!("Version for {name}: {current} -> {next}");
        *current = next.clone();
        Ok(next)
    }

    /// Name → version map in sorted order (the persisted representation)
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_name_counts_from_one() {
        let mut registry = VersionRegistry::default();
        for patch in 1..=5 {
            let v = registry.next_version("BikininjaPosters01").expect("bump");
            assert_eq!(v, format!("0.0.{patch}"));
        }
        assert_eq!(registry.current("BikininjaPosters01"), Some("0.0.5"));
    }

    #[test]
    fn test_names_are_independent() {
        let mut registry = VersionRegistry::default();
        registry.next_version("A").expect("bump");
        registry.next_version("A").expect("bump");
        let b = registry.next_version("B").expect("bump");
        assert_eq!(b, "0.0.1");
        assert_eq!(registry.current("A"), Some("0.0.2"));
    }

    #[test]
    fn test_resumes_from_loaded_version() {
        let mut map = BTreeMap::new();
        map.insert("BikininjaPosters01".to_string(), "0.0.3".to_string());
        let mut registry = VersionRegistry::from_map(map);
        let v = registry.next_version("BikininjaPosters01").expect("bump");
        assert_eq!(v, "0.0.4");
    }

    #[test]
    fn test_malformed_version_is_an_error() {
        let mut map = BTreeMap::new();
        map.insert("Bad".to_string(), "1.2".to_string());
        map.insert("Worse".to_string(), "a.b.c".to_string());
        let mut registry = VersionRegistry::from_map(map);
        assert!(registry.next_version("Bad").is_err());
        assert!(registry.next_version("Worse").is_err());
    }
}
