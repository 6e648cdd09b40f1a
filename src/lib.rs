// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod config;
pub mod handlers;
pub mod paths;
pub mod platforms;
pub mod prompt;
pub mod registry;
pub mod types;
