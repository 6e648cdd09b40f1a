// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Result};
use futures_util::future::{BoxFuture, FutureExt};
use tracing::debug;

use super::{not_added, print_success, require_path, PlatformDoctor};
use crate::config::Config;
use crate::registry::get_command_output;

/// Checks the Xcode toolchain and CocoaPods needed to build the iOS project.
pub struct IosDoctor;

impl PlatformDoctor for IosDoctor {
    fn check<'a>(&'a self, config: &'a Config) -> BoxFuture<'a, Result<()>> {
        async move {
            check_ios(config).await?;
            print_success("iOS looking great!");
            Ok(())
        }
        .boxed()
    }
}

async fn check_ios(config: &Config) -> Result<()> {
    let platform_dir = &config.ios.platform_dir_abs;
    debug!("Checking iOS project at {}", platform_dir.display());

    require_path(platform_dir, || not_added(&config.ios.name)).await?;

    if !matches!(whoami::platform(), whoami::Platform::MacOS) {
        bail!("iOS development requires macOS");
    }

    match get_command_output("xcodebuild", &["-version"]).await {
        Some(version) => debug!("xcodebuild: {}", version.lines().next().unwrap_or_default()),
        None => bail!("Xcode is not installed"),
    }

    match get_command_output("pod", &["--version"]).await {
        Some(version) => debug!("CocoaPods: {version}"),
        None => bail!(
            "CocoaPods is not installed.\nSee this install guide: https://capacitorjs.com/docs/getting-started/environment-setup#homebrew"
        ),
    }

    Ok(())
}
