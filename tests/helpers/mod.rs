// ABOUTME: Test helper modules shared by HTTP integration tests
// ABOUTME: Re-exports the axum oneshot request utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

pub mod axum_test;
