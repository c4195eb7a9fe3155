// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports helper modules for oit-cli
// ABOUTME: Provides argument parsers and output formatting

pub mod display;
pub mod parse;
