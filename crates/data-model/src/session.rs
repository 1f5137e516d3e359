// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};

/// Facts about the current viewer and conference, supplied by the hosting
/// application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionState {
    /// The viewer lacks authenticated or host privileges.
    pub is_guest: bool,

    /// A conference room is currently joined.
    pub room_active: bool,
}

impl SessionState {
    /// Session of a viewer who hasn't joined a room yet.
    #[must_use]
    pub const fn welcome_page() -> Self {
        Self {
            is_guest: false,
            room_active: false,
        }
    }

    /// Session of a viewer in a room.
    #[must_use]
    pub const fn in_room(is_guest: bool) -> Self {
        Self {
            is_guest,
            room_active: true,
        }
    }

    /// No room is joined, so the welcome page is displayed.
    #[must_use]
    pub const fn welcome_page_visible(&self) -> bool {
        !self.room_active
    }
}
