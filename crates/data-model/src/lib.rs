// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Inputs of the watermark decision: the static settings of the deployment,
//! the dynamic branding snapshot and the session state.

#![allow(clippy::module_name_repetitions)]

mod branding;
mod session;
mod site_config;

pub use self::{branding::BrandingState, session::SessionState, site_config::WatermarkSettings};
