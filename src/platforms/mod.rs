// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

mod android;
mod ios;

pub use android::AndroidDoctor;
pub use ios::IosDoctor;

use anyhow::{bail, Result};
use colored::Colorize;
use console::Emoji;
use futures_util::future::BoxFuture;
use std::path::Path;

use crate::config::Config;

/// Environment and project checks for one native platform.
pub trait PlatformDoctor: Send + Sync {
    fn check<'a>(&'a self, config: &'a Config) -> BoxFuture<'a, Result<()>>;
}

/// The checkers `doctor` dispatches to. Web has no checker.
pub struct PlatformDoctors {
    pub ios: Box<dyn PlatformDoctor>,
    pub android: Box<dyn PlatformDoctor>,
}

impl Default for PlatformDoctors {
    fn default() -> Self {
        Self {
            ios: Box::new(IosDoctor),
            android: Box::new(AndroidDoctor),
        }
    }
}

pub(crate) fn print_success(message: &str) {
    println!(
        "[{}] {} {}",
        "success".green(),
        message,
        Emoji("👌", "")
    );
}

/// Fails unless `path` exists, with the message produced by `error`.
pub(crate) async fn require_path(path: &Path, error: impl FnOnce() -> String) -> Result<()> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        _ => bail!(error()),
    }
}

pub(crate) fn not_added(name: &str) -> String {
    format!("{name} platform has not been added yet.")
}
