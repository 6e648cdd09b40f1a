// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use futures_util::future::{BoxFuture, FutureExt};
use tokio::process::Command;
use tracing::debug;

#[cfg(windows)]
const NPM_EXECUTABLE: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM_EXECUTABLE: &str = "npm";

/// Source of the latest published version of a package.
#[cfg_attr(test, mockall::automock)]
pub trait Registry {
    /// Resolves to `None` when the version cannot be determined.
    fn latest_version(&self, package: &str) -> BoxFuture<'static, Option<String>>;
}

/// Queries the npm registry through the `npm` executable.
pub struct NpmRegistry;

impl Registry for NpmRegistry {
    fn latest_version(&self, package: &str) -> BoxFuture<'static, Option<String>> {
        let package = package.to_string();
        async move {
            get_command_output(NPM_EXECUTABLE, &["info", &package, "version"]).await
        }
        .boxed()
    }
}

/// Runs `program` and returns its trimmed stdout, or `None` if it could not be run,
/// exited unsuccessfully, or printed nothing.
pub async fn get_command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output().await {
        Ok(output) => output,
        Err(e) => {
            debug!("Cannot run {program} {}: {e}", args.join(" "));
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "{program} {} exited with {}: {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}
