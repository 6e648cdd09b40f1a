// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use futures_util::future::{BoxFuture, FutureExt};
use tracing::debug;

use super::{not_added, print_success, require_path, PlatformDoctor};
use crate::config::Config;

/// Checks the Android project generated under the platform directory.
pub struct AndroidDoctor;

impl PlatformDoctor for AndroidDoctor {
    fn check<'a>(&'a self, config: &'a Config) -> BoxFuture<'a, Result<()>> {
        async move {
            check_android(config).await?;
            print_success("Android looking great!");
            Ok(())
        }
        .boxed()
    }
}

async fn check_android(config: &Config) -> Result<()> {
    let platform_dir = &config.android.platform_dir_abs;
    debug!("Checking Android project at {}", platform_dir.display());

    require_path(platform_dir, || not_added(&config.android.name)).await?;

    let gradlew = platform_dir.join(if cfg!(windows) { "gradlew.bat" } else { "gradlew" });
    require_path(&gradlew, || {
        format!("Gradle wrapper not found at {}", gradlew.display())
    })
    .await?;

    let app_dir = platform_dir.join("app");
    require_path(&app_dir, || {
        format!(
            "\"app\" directory is missing in {}",
            platform_dir.display()
        )
    })
    .await?;

    let src_main_dir = app_dir.join("src").join("main");
    require_path(&src_main_dir, || {
        format!("\"src/main\" directory is missing in {}", app_dir.display())
    })
    .await?;

    let manifest = src_main_dir.join("AndroidManifest.xml");
    require_path(&manifest, || {
        format!(
            "\"AndroidManifest.xml\" file is missing in {}",
            src_main_dir.display()
        )
    })
    .await
}
