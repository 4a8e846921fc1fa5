// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by matching, snippets and highlighting.
//!
//! Everything here counts characters, not bytes. Offsets line up with what the
//! page sees when it slices strings, as long as the text stays in the BMP.

pub mod normalize;
