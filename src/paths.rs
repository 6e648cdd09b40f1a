// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use tracing::debug;

pub const CONFIG_FILE_NAME_TS: &str = "capacitor.config.ts";
pub const CONFIG_FILE_NAME_JS: &str = "capacitor.config.js";
pub const CONFIG_FILE_NAME_JSON: &str = "capacitor.config.json";

const NODE_MODULES_FOLDER: &str = "node_modules";

/// Resolves `<package>/<file>` the way Node does for a bare specifier: look in the
/// `node_modules` folder of `root` and then of every ancestor directory.
pub fn resolve_node(root: &Path, package: &str, file: &str) -> Option<PathBuf> {
    for dir in root.ancestors() {
        let candidate = dir.join(NODE_MODULES_FOLDER).join(package).join(file);
        if candidate.is_file() {
            debug!("Resolved {package}/{file} to {}", candidate.display());
            return Some(candidate);
        }
    }
    debug!("Could not resolve {package}/{file} from {}", root.display());
    None
}
