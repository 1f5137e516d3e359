// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

//! Decides which watermarks a conference client displays, and where they
//! link to.
//!
//! Three badges can be shown over the conference: the deployment's brand, the
//! product logo and a "powered by" credit. [`resolve`] derives a
//! [`WatermarkDecision`] from the static [`WatermarkSettings`], the dynamic
//! [`BrandingState`] and the [`SessionState`]. Rendering the decision is left
//! to the caller, either directly through [`BadgeState`] or from a template,
//! the decision being usable as a [`minijinja`] object.
//!
//! ```
//! use meet_data_model::{BrandingState, SessionState, WatermarkSettings};
//! use meet_watermarks::{BadgeState, resolve};
//!
//! let settings = WatermarkSettings::disabled();
//! let decision = resolve(&settings, &BrandingState::default(), &SessionState::welcome_page());
//!
//! // The product watermark is always there before joining a room
//! assert!(decision.product.is_some());
//! assert_eq!(decision.brand_state(), BadgeState::Hidden);
//! ```

mod context;
mod decision;
mod resolver;

pub use meet_data_model::{BrandingState, SessionState, WatermarkSettings};

pub use self::{
    decision::{Badge, BadgeState, ProductBadge, WatermarkDecision},
    resolver::{WatermarkResolver, resolve},
};

/// Where the "powered by" credit links to
pub const POWERED_BY_URL: &str = "https://jitsi.org";

/// Translation key of the "powered by" label
pub const POWERED_BY_LABEL_KEY: &str = "poweredby";
