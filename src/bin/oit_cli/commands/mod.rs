// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports command modules for oit-cli
// ABOUTME: Provides access to protocol generation and validation commands

pub mod generate;
pub mod validate;
