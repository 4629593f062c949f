// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the demo binary.

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// --- Logging ---

/// Log filter directives from `ARGTREE_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var("ARGTREE_LOG").ok().filter(|s| !s.is_empty())
}
