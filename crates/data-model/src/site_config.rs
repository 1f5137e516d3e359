// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

/// Static watermark settings of the deployment.
///
/// Captured once at startup from the configuration, then handed to the
/// resolver as an immutable value.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkSettings {
    /// Only the film strip is displayed: no brand or product watermark while
    /// in a room.
    pub film_strip_only: bool,

    /// Whether the brand watermark is enabled.
    pub show_brand_watermark: bool,

    /// Where the brand watermark links to, kept as configured.
    pub brand_watermark_link: Option<String>,

    /// Whether the "powered by" credit is enabled.
    pub show_powered_by: bool,

    /// Whether the product watermark is shown to everyone in a room.
    pub show_product_watermark: bool,

    /// Whether the product watermark is shown to guests in a room.
    pub show_product_watermark_for_guests: bool,

    /// Where the product watermark links to without dynamic branding, kept
    /// as configured.
    pub product_watermark_link: Option<String>,

    /// Fallback logo of the product watermark, without dynamic branding.
    pub default_logo_url: String,
}

impl WatermarkSettings {
    /// Settings with every watermark disabled and no links, useful as a
    /// starting point in tests.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            film_strip_only: false,
            show_brand_watermark: false,
            brand_watermark_link: None,
            show_powered_by: false,
            show_product_watermark: false,
            show_product_watermark_for_guests: false,
            product_watermark_link: None,
            default_logo_url: String::new(),
        }
    }
}
