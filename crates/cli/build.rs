// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Build script for `meet-cli`.
//!
//! Detects the version reported by the binary:
//!
//! - `MEET_VERSION`: explicit version override (highest priority)
//! - `MEET_GIT_VERSION`: version from `git describe`, set automatically if git
//!   is available
//! - Falls back to `CARGO_PKG_VERSION` if neither is available

fn main() {
    if std::env::var("MEET_VERSION").is_err() {
        if let Some(git_version) = git_describe() {
            println!("cargo::rustc-env=MEET_GIT_VERSION={git_version}");
        }
    }

    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/tags");
    println!("cargo::rerun-if-changed=.git/refs/heads");
    println!("cargo::rerun-if-env-changed=MEET_VERSION");
}

/// Try to get the version from `git describe`.
///
/// Returns `None` if git is not available or the command fails.
fn git_describe() -> Option<String> {
    std::process::Command::new("git")
        .args(["describe", "--tags", "--match", "v*.*.*", "--always"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}
