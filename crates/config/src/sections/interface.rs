// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::Error as _};
use url::Url;

use crate::ConfigurationSection;

fn default_true() -> bool {
    true
}

fn default_product_watermark_link() -> String {
    "https://jitsi.org".to_owned()
}

fn default_logo_url() -> String {
    "images/watermark.svg".to_owned()
}

/// Configuration section for the watermarks displayed over the conference
///
/// Keys can also be spelled the way the legacy `interface_config.js` did, e.g.
/// `SHOW_BRAND_WATERMARK` or `filmStripOnly`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Deserialize, JsonSchema, Serialize, PartialEq, Eq)]
pub struct InterfaceConfig {
    /// Only show the film strip. This hides the brand and product watermarks
    /// while in a room.
    #[serde(default, alias = "filmStripOnly")]
    pub film_strip_only: bool,

    /// Whether to show the deployment's own brand watermark
    #[serde(default, alias = "SHOW_BRAND_WATERMARK")]
    pub show_brand_watermark: bool,

    /// Where the brand watermark links to. When empty, the watermark is shown
    /// without a link.
    #[serde(default, alias = "BRAND_WATERMARK_LINK")]
    pub brand_watermark_link: String,

    /// Whether to show the "powered by" credit
    #[serde(default, alias = "SHOW_POWERED_BY")]
    pub show_powered_by: bool,

    /// Whether to show the product watermark to everyone while in a room
    #[serde(default = "default_true", alias = "SHOW_JITSI_WATERMARK")]
    pub show_product_watermark: bool,

    /// Whether to show the product watermark to guests while in a room, even
    /// if `show_product_watermark` is disabled
    #[serde(
        default = "default_true",
        alias = "SHOW_JITSI_WATERMARK_FOR_GUESTS",
        alias = "SHOW_WATERMARK_FOR_GUESTS"
    )]
    pub show_product_watermark_for_guests: bool,

    /// Where the product watermark links to when no dynamic branding is in
    /// use. When empty, the watermark is shown without a link.
    #[serde(
        default = "default_product_watermark_link",
        alias = "JITSI_WATERMARK_LINK"
    )]
    pub product_watermark_link: String,

    /// Logo used for the product watermark when no dynamic branding is in use
    /// and the client did not supply one. May be relative to the web root.
    #[serde(default = "default_logo_url", alias = "DEFAULT_LOGO_URL")]
    pub default_logo_url: String,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            film_strip_only: false,
            show_brand_watermark: false,
            brand_watermark_link: String::new(),
            show_powered_by: false,
            show_product_watermark: default_true(),
            show_product_watermark_for_guests: default_true(),
            product_watermark_link: default_product_watermark_link(),
            default_logo_url: default_logo_url(),
        }
    }
}

impl ConfigurationSection for InterfaceConfig {
    const PATH: Option<&'static str> = Some("interface");

    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        let path = Self::PATH.unwrap_or("interface");
        let metadata = figment.find_metadata(path);

        let error_on_field = |mut error: figment::error::Error, field: &'static str| {
            error.metadata = metadata.cloned();
            error.profile = Some(figment::Profile::Default);
            error.path = vec![path.to_owned(), field.to_owned()];
            error
        };

        // Links are absolute or relative URL references, an empty one meaning
        // "no link". They are only checked here, never rewritten.
        let base = Url::parse("https://localhost/")?;
        let check_link = |link: &str, field: &'static str| {
            if link.is_empty() {
                return Ok(());
            }

            base.join(link).map(|_| ()).map_err(|e| {
                error_on_field(
                    figment::error::Error::custom(format!("invalid {field} {link:?}: {e}")),
                    field,
                )
            })
        };

        check_link(&self.brand_watermark_link, "brand_watermark_link")?;
        check_link(&self.product_watermark_link, "product_watermark_link")?;

        Ok(())
    }
}
