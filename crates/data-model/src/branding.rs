// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Snapshot of the dynamic branding fetched for the deployment.
///
/// The payload comes from a remote service and may be partial or stale.
/// Fields which are missing, `null` or of the wrong type deserialize to their
/// default value rather than failing the whole payload.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandingState {
    /// The branding fetch completed.
    #[serde_as(as = "DefaultOnError")]
    pub customization_ready: bool,

    /// The branding fetch did not succeed.
    #[serde_as(as = "DefaultOnError")]
    pub customization_failed: bool,

    /// The logo and its link come from the fetched branding rather than from
    /// the static settings.
    #[serde_as(as = "DefaultOnError")]
    pub use_dynamic_branding_data: bool,

    /// Click target of the custom logo.
    #[serde_as(as = "DefaultOnError")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_click_url: Option<String>,

    /// Image of the custom logo.
    #[serde_as(as = "DefaultOnError")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image_url: Option<String>,
}

impl BrandingState {
    /// The branding finished loading, and did so successfully.
    #[must_use]
    pub fn customization_ok(&self) -> bool {
        self.customization_ready && !self.customization_failed
    }

    /// Click target of the custom logo, `None` if absent or empty.
    #[must_use]
    pub fn logo_click_url(&self) -> Option<&str> {
        self.logo_click_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Image of the custom logo, `None` if absent or empty.
    #[must_use]
    pub fn logo_image_url(&self) -> Option<&str> {
        self.logo_image_url.as_deref().filter(|url| !url.is_empty())
    }
}
