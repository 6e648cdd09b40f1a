// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use tracing::debug;

/// Asks the user yes/no questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prompts on the terminal. Without an attended terminal every question is declined.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        if !console::user_attended() {
            debug!("No terminal attached, declining: {message}");
            return Ok(false);
        }
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| anyhow!("Cannot read the answer: {e}"))
    }
}

/// Accepts every question without asking.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        debug!("Accepting without prompting: {message}");
        Ok(true)
    }
}
