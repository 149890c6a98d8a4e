// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request builder and an in-process payment gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod mock_gateway;
