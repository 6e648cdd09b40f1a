// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Result};
use colored::Colorize;
use console::Emoji;
use futures_util::future::join_all;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::{
    config::{write_config, Config, ExtConfigType},
    paths::{resolve_node, CONFIG_FILE_NAME_TS},
    platforms::PlatformDoctors,
    prompt::Prompter,
    registry::Registry,
    types::{InstalledDependencies, LatestDependencies, PackageVersion, Version, CAPACITOR_PACKAGES},
};

#[derive(Deserialize)]
struct PackageManifest {
    version: Option<Version>,
}

/// Handles the `doctor` command: migration offer, dependency report, then platform checks.
pub async fn doctor_command(
    config: &Config,
    selected_platform: Option<&str>,
    prompter: &dyn Prompter,
    registry: &dyn Registry,
    doctors: &PlatformDoctors,
) -> Result<()> {
    println!(
        "{}   {}  {} \n",
        Emoji("💊", ""),
        "Capacitor Doctor".bold(),
        Emoji("💊", "")
    );

    doctor_core(config, prompter, registry).await?;

    let platforms = select_platforms(config, selected_platform)?;
    doctor_platforms(config, &platforms, doctors).await
}

/// Offers the config migration and prints latest and installed dependency versions.
pub async fn doctor_core(
    config: &Config,
    prompter: &dyn Prompter,
    registry: &dyn Registry,
) -> Result<()> {
    migrate_config(config, prompter).await?;

    let latest = latest_dependencies(registry).await;
    print!("{latest}");

    let installed = installed_dependencies(&config.app.root_dir).await;
    print!("{installed}");

    Ok(())
}

/// Offers to replace a legacy JSON config with a TypeScript one.
///
/// Returns whether the migration was performed. The new file is written before
/// the old one is removed; if removal fails both files are left on disk.
pub async fn migrate_config(config: &Config, prompter: &dyn Prompter) -> Result<bool> {
    let app = &config.app;
    if app.ext_config_type != ExtConfigType::Json
        || !tokio::fs::try_exists(&app.ext_config_file_path)
            .await
            .unwrap_or(false)
    {
        return Ok(false);
    }

    println!(
        "{}\nIt looks like you're using a {} file. As of Capacitor 3, you can use a TypeScript configuration file, which allows for autocomplete in your editor and dynamic configuration values.",
        format!("Switch to a {CONFIG_FILE_NAME_TS} file for your configuration?").bold(),
        app.ext_config_name.bold()
    );

    let confirmed = prompter.confirm("Switch to TS configuration?", true)?;
    if confirmed {
        let parent = app
            .ext_config_file_path
            .parent()
            .unwrap_or(app.root_dir.as_path());
        let new_path = parent.join(CONFIG_FILE_NAME_TS);

        debug!(
            "Migrating {} to {}",
            app.ext_config_file_path.display(),
            new_path.display()
        );
        write_config(&app.ext_config, &new_path).await?;
        tokio::fs::remove_file(&app.ext_config_file_path).await?;
    }

    println!();
    Ok(confirmed)
}

/// Queries the registry for all packages at once and waits for every answer.
pub async fn latest_dependencies(registry: &dyn Registry) -> LatestDependencies {
    let versions = join_all(
        CAPACITOR_PACKAGES
            .iter()
            .map(|package| registry.latest_version(package)),
    )
    .await;

    LatestDependencies(
        CAPACITOR_PACKAGES
            .iter()
            .zip(versions)
            .map(|(package, version)| PackageVersion::new(package, version))
            .collect(),
    )
}

/// Reads the installed version of every package from its `package.json`.
pub async fn installed_dependencies(root_dir: &Path) -> InstalledDependencies {
    let versions = join_all(
        CAPACITOR_PACKAGES
            .iter()
            .map(|package| installed_version(root_dir, package)),
    )
    .await;

    InstalledDependencies(
        CAPACITOR_PACKAGES
            .iter()
            .zip(versions)
            .map(|(package, version)| PackageVersion::new(package, version))
            .collect(),
    )
}

async fn installed_version(root_dir: &Path, package: &str) -> Option<Version> {
    let manifest_path = resolve_node(root_dir, package, "package.json")?;
    let contents = match tokio::fs::read_to_string(&manifest_path).await {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Cannot read {}: {e}", manifest_path.display());
            return None;
        }
    };
    match serde_json::from_str::<PackageManifest>(&contents) {
        Ok(manifest) => manifest.version.filter(|v| !v.is_empty()),
        Err(e) => {
            debug!("Cannot parse {}: {e}", manifest_path.display());
            None
        }
    }
}

/// Resolves the platforms to check. Without a filter every configured platform is
/// returned; a filter must name a known platform whose project has been added.
pub fn select_platforms(config: &Config, selected_platform: Option<&str>) -> Result<Vec<String>> {
    let Some(selected) = selected_platform else {
        return Ok(config.platform_names());
    };

    let name = selected.trim().to_lowercase();
    let Some(platform) = config.platform(&name) else {
        bail!("Invalid platform: {name}");
    };

    if name != config.web.name && !platform.platform_dir_abs.is_dir() {
        bail!("{name} platform has not been added yet.");
    }

    Ok(vec![name])
}

/// Runs the check of every platform concurrently. All checks run to completion;
/// the first failure in `platforms` order is returned.
pub async fn doctor_platforms(
    config: &Config,
    platforms: &[String],
    doctors: &PlatformDoctors,
) -> Result<()> {
    let results = join_all(
        platforms
            .iter()
            .map(|platform| doctor(config, platform, doctors)),
    )
    .await;

    results.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(())
}

/// Runs the check for a single platform.
pub async fn doctor(config: &Config, platform_name: &str, doctors: &PlatformDoctors) -> Result<()> {
    if platform_name == config.ios.name {
        doctors.ios.check(config).await
    } else if platform_name == config.android.name {
        doctors.android.check(config).await
    } else if platform_name == config.web.name {
        Ok(())
    } else {
        bail!("Platform {platform_name} is not valid.")
    }
}
