// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

mod doctor;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cap", arg_required_else_help = true, disable_help_subcommand = true)]
#[command(version, about)]
pub struct Command {
    #[command(subcommand)]
    command: Commands,

    /// Root directory of the Capacitor project. Defaults to the current directory.
    #[arg(long, env = "CAPACITOR_PROJECT_DIR", global = true)]
    pub project_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    Doctor(doctor::Command),
}

impl Command {
    pub async fn exec(&self) -> Result<()> {
        match &self.command {
            Commands::Doctor(cmd) => cmd.exec(&self.project_dir).await,
        }
    }
}
