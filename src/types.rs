// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use std::fmt::{self, Display, Formatter};

pub type Version = String;

/// Packages reported by `doctor`, in display order.
pub const CAPACITOR_PACKAGES: [&str; 4] = [
    "@capacitor/cli",
    "@capacitor/core",
    "@capacitor/android",
    "@capacitor/ios",
];

pub const UNKNOWN_VERSION: &str = "unknown";
pub const NOT_INSTALLED: &str = "not installed";

/// A package paired with the version found for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageVersion {
    pub name: String,
    pub version: Option<Version>,
}

impl PackageVersion {
    pub fn new(name: &str, version: Option<Version>) -> Self {
        Self {
            name: name.to_string(),
            version,
        }
    }
}

/// Versions published on the registry. Missing versions render as `unknown`.
#[derive(Debug, Clone)]
pub struct LatestDependencies(pub Vec<PackageVersion>);

/// Versions installed in the project. Missing versions render as `not installed`.
#[derive(Debug, Clone)]
pub struct InstalledDependencies(pub Vec<PackageVersion>);

fn write_entries(f: &mut Formatter, entries: &[PackageVersion], missing: &str) -> fmt::Result {
    for entry in entries {
        let version = entry.version.as_deref().unwrap_or(missing);
        writeln!(f, "  {}: {}", entry.name, version.dimmed())?;
    }
    Ok(())
}

impl Display for LatestDependencies {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{}\n", "Latest Dependencies:".bold())?;
        write_entries(f, &self.0, UNKNOWN_VERSION)?;
        writeln!(f)?;
        writeln!(f, "{}\n", "Installed Dependencies:".bold())
    }
}

impl Display for InstalledDependencies {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_entries(f, &self.0, NOT_INSTALLED)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_lines(s: &str) -> Vec<&str> {
        s.lines().filter(|l| l.starts_with("  @capacitor/")).collect()
    }

    #[test]
    fn test_latest_dependencies_display() {
        colored::control::set_override(false);
        let latest = LatestDependencies(vec![
            PackageVersion::new("@capacitor/cli", Some("7.1.0".to_string())),
            PackageVersion::new("@capacitor/core", Some("7.1.0".to_string())),
            PackageVersion::new("@capacitor/android", Some("7.1.0".to_string())),
            PackageVersion::new("@capacitor/ios", None),
        ]);
        let out = latest.to_string();
        assert!(out.starts_with("Latest Dependencies:\n\n"));
        assert!(out.ends_with("Installed Dependencies:\n\n"));
        assert_eq!(
            version_lines(&out),
            vec![
                "  @capacitor/cli: 7.1.0",
                "  @capacitor/core: 7.1.0",
                "  @capacitor/android: 7.1.0",
                "  @capacitor/ios: unknown",
            ]
        );
    }

    #[test]
    fn test_installed_dependencies_display() {
        colored::control::set_override(false);
        let installed = InstalledDependencies(vec![
            PackageVersion::new("@capacitor/cli", None),
            PackageVersion::new("@capacitor/core", Some("6.2.0".to_string())),
        ]);
        assert_eq!(
            installed.to_string(),
            "  @capacitor/cli: not installed\n  @capacitor/core: 6.2.0\n\n"
        );
    }
}
