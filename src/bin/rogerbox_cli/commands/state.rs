// ABOUTME: State commands inspecting or wiping the persisted student state
// ABOUTME: Works on the same file store the suggest --save flag writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use anyhow::Result;
use rogerbox::store::{AppStore, FileKeyValueStore};

/// Print the saved state as JSON
pub async fn show(storage: FileKeyValueStore) -> Result<()> {
    let store = AppStore::load(storage).await?;
    let state = store.snapshot().await;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Delete the saved state
pub async fn reset(storage: FileKeyValueStore) -> Result<()> {
    let dir = storage.dir().display().to_string();
    let store = AppStore::load(storage).await?;
    store.clear().await?;
    println!("State cleared in {dir}");
    Ok(())
}
