// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Every field that matches contributes its bitap score raised to the power
//! of its key weight times a length norm. The contributions multiply, so a
//! record that matches in several fields beats one that matches in a single
//! field, and short fields count for more than long ones. Lower is better.

mod core;
pub mod ranking;

pub use core::*;
