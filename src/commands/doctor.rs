// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

use crate::{
    config::Config,
    handlers::doctor::doctor_command,
    platforms::PlatformDoctors,
    prompt::{AssumeYes, Prompter, TerminalPrompter},
    registry::NpmRegistry,
};

/// Check the project's dependencies and platform setup.
#[derive(Args, Debug)]
pub struct Command {
    /// Platform to check (android, ios, web). All platforms are checked if omitted.
    platform: Option<String>,

    /// Accept defaults without prompting
    #[arg(short, long)]
    yes: bool,
}

impl Command {
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn yes(&self) -> bool {
        self.yes
    }

    pub async fn exec(&self, project_dir: &Option<PathBuf>) -> Result<()> {
        let root_dir = match project_dir {
            Some(dir) => std::path::absolute(dir)
                .map_err(|e| anyhow!("Cannot resolve project directory {}: {e}", dir.display()))?,
            None => std::env::current_dir()
                .map_err(|e| anyhow!("Cannot determine the current directory: {e}"))?,
        };
        let config = Config::load(&root_dir)?;

        let prompter: Box<dyn Prompter> = if self.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(TerminalPrompter)
        };

        doctor_command(
            &config,
            self.platform.as_deref(),
            prompter.as_ref(),
            &NpmRegistry,
            &PlatformDoctors::default(),
        )
        .await
    }
}
