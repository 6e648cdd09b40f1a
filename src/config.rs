// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Error};
use serde::Deserialize;
use serde_json::Value;
use std::{
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::paths::{CONFIG_FILE_NAME_JS, CONFIG_FILE_NAME_JSON, CONFIG_FILE_NAME_TS};

const DEFAULT_WEB_DIR: &str = "www";
const DEFAULT_ANDROID_DIR: &str = "android";
const DEFAULT_IOS_DIR: &str = "ios";

/// Format of the external configuration file.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExtConfigType {
    Json,
    Ts,
    Js,
}

impl Display for ExtConfigType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ExtConfigType::Json => write!(f, "json"),
            ExtConfigType::Ts => write!(f, "ts"),
            ExtConfigType::Js => write!(f, "js"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root_dir: PathBuf,
    pub ext_config_type: ExtConfigType,
    pub ext_config_name: String,
    pub ext_config_file_path: PathBuf,
    /// The parsed external config. Empty object when the file is absent or is a script.
    pub ext_config: Value,
}

#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub name: String,
    pub platform_dir_abs: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub android: PlatformConfig,
    pub ios: PlatformConfig,
    pub web: PlatformConfig,
}

/// The subset of the external config consulted when locating platform folders.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct ProjectSettings {
    web_dir: Option<String>,
    android: Option<PlatformSettings>,
    ios: Option<PlatformSettings>,
}

#[derive(Deserialize, Debug, Default)]
struct PlatformSettings {
    path: Option<String>,
}

impl Config {
    /// Loads the project configuration rooted at `root_dir`.
    ///
    /// The external config file is looked up in order `capacitor.config.ts`,
    /// `capacitor.config.js`, `capacitor.config.json`. When none exists the
    /// config is treated as an absent JSON file.
    pub fn load(root_dir: &Path) -> Result<Self, Error> {
        let (ext_config_type, ext_config_name) = detect_ext_config(root_dir);
        let ext_config_file_path = root_dir.join(ext_config_name);
        debug!(
            "Using {} config at {}",
            ext_config_type,
            ext_config_file_path.display()
        );

        let ext_config = if ext_config_type == ExtConfigType::Json && ext_config_file_path.is_file()
        {
            read_json_config(&ext_config_file_path)?
        } else {
            Value::Object(Default::default())
        };

        // Scripted configs cannot be evaluated here, so their platform paths fall back to defaults.
        let settings: ProjectSettings =
            serde_json::from_value(ext_config.clone()).unwrap_or_default();

        let platform_dir = |settings: Option<&PlatformSettings>, default: &str| {
            let rel = settings
                .and_then(|s| s.path.as_deref())
                .unwrap_or(default);
            root_dir.join(rel)
        };

        Ok(Config {
            android: PlatformConfig {
                name: "android".to_string(),
                platform_dir_abs: platform_dir(settings.android.as_ref(), DEFAULT_ANDROID_DIR),
            },
            ios: PlatformConfig {
                name: "ios".to_string(),
                platform_dir_abs: platform_dir(settings.ios.as_ref(), DEFAULT_IOS_DIR),
            },
            web: PlatformConfig {
                name: "web".to_string(),
                platform_dir_abs: root_dir
                    .join(settings.web_dir.as_deref().unwrap_or(DEFAULT_WEB_DIR)),
            },
            app: AppConfig {
                root_dir: root_dir.to_path_buf(),
                ext_config_type,
                ext_config_name: ext_config_name.to_string(),
                ext_config_file_path,
                ext_config,
            },
        })
    }

    /// Platform names in the order they are checked by default.
    pub fn platform_names(&self) -> Vec<String> {
        vec![
            self.ios.name.clone(),
            self.android.name.clone(),
            self.web.name.clone(),
        ]
    }

    pub fn platform(&self, name: &str) -> Option<&PlatformConfig> {
        [&self.ios, &self.android, &self.web]
            .into_iter()
            .find(|p| p.name == name)
    }
}

fn detect_ext_config(root_dir: &Path) -> (ExtConfigType, &'static str) {
    [
        (ExtConfigType::Ts, CONFIG_FILE_NAME_TS),
        (ExtConfigType::Js, CONFIG_FILE_NAME_JS),
        (ExtConfigType::Json, CONFIG_FILE_NAME_JSON),
    ]
    .into_iter()
    .find(|(_, name)| root_dir.join(name).is_file())
    .unwrap_or((ExtConfigType::Json, CONFIG_FILE_NAME_JSON))
}

fn read_json_config(path: &Path) -> Result<Value, Error> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read config file {}: {e}", path.display()))?;
    serde_json::from_str(&s)
        .map_err(|e| anyhow!("Cannot parse config file {}: {e}", path.display()))
}

/// Renders `ext_config` as a TypeScript config module.
pub fn format_config_ts(ext_config: &Value) -> Result<String, Error> {
    let json = serde_json::to_string_pretty(ext_config)
        .map_err(|e| anyhow!("Cannot serialize the config: {e}"))?;
    Ok(format!(
        "import type {{ CapacitorConfig }} from '@capacitor/cli';\n\n\
         const config: CapacitorConfig = {json};\n\n\
         export default config;\n"
    ))
}

/// Writes `ext_config` to `path` in TypeScript form.
pub async fn write_config(ext_config: &Value, path: &Path) -> Result<(), Error> {
    let contents = format_config_ts(ext_config)?;
    tokio::fs::write(path, contents).await?;
    Ok(())
}
