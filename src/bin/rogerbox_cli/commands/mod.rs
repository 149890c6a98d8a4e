// ABOUTME: Command implementations for rogerbox-cli
// ABOUTME: One module per top-level subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

pub mod catalog;
pub mod progress;
pub mod state;
pub mod suggest;
