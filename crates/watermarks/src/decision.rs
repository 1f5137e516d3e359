// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Serialize, ser::SerializeStruct};

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

/// How a watermark slot should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState<'a> {
    /// Render nothing
    Hidden,

    /// Render the badge on its own
    Unlinked,

    /// Wrap the badge in a link opening in a new context
    Linked(&'a str),
}

impl<'a> BadgeState<'a> {
    fn of(link: Option<Option<&'a str>>) -> Self {
        match link {
            None => Self::Hidden,
            Some(None) => Self::Unlinked,
            Some(Some(link)) => Self::Linked(link),
        }
    }

    /// Whether something should be rendered at all
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// A visible badge, optionally linking somewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    link: Option<String>,
}

impl Badge {
    /// A badge linking to `link`, or to nothing if it is absent or empty
    #[must_use]
    pub fn new(link: Option<&str>) -> Self {
        Self {
            link: non_empty(link),
        }
    }

    /// Where the badge links to
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// The visible product badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBadge {
    link: Option<String>,
    image_url: Option<String>,
}

impl ProductBadge {
    /// A product badge showing `image_url` and linking to `link`. Empty
    /// values are treated as absent.
    #[must_use]
    pub fn new(link: Option<&str>, image_url: Option<&str>) -> Self {
        Self {
            link: non_empty(link),
            image_url: non_empty(image_url),
        }
    }

    /// Where the badge links to
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// URL of the logo
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// The logo as a CSS `background-image` value
    #[must_use]
    pub fn background_image(&self) -> Option<String> {
        self.image_url.as_ref().map(|url| format!("url({url})"))
    }
}

/// Which watermarks to display. `None` means the slot is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatermarkDecision {
    /// The deployment's own brand
    pub brand: Option<Badge>,

    /// The product logo
    pub product: Option<ProductBadge>,

    /// The "powered by" credit
    pub powered_by: Option<Badge>,
}

impl WatermarkDecision {
    /// How to render the brand slot
    #[must_use]
    pub fn brand_state(&self) -> BadgeState<'_> {
        BadgeState::of(self.brand.as_ref().map(Badge::link))
    }

    /// How to render the product slot
    #[must_use]
    pub fn product_state(&self) -> BadgeState<'_> {
        BadgeState::of(self.product.as_ref().map(ProductBadge::link))
    }

    /// How to render the "powered by" slot
    #[must_use]
    pub fn powered_by_state(&self) -> BadgeState<'_> {
        BadgeState::of(self.powered_by.as_ref().map(Badge::link))
    }

    pub(crate) fn brand_view(&self) -> SlotView<'_> {
        SlotView::new(self.brand_state(), None)
    }

    pub(crate) fn product_view(&self) -> SlotView<'_> {
        SlotView::new(
            self.product_state(),
            self.product.as_ref().and_then(ProductBadge::background_image),
        )
    }

    pub(crate) fn powered_by_view(&self) -> SlotView<'_> {
        SlotView::new(self.powered_by_state(), None)
    }
}

/// Flat representation of a slot, as handed to renderers
#[derive(Debug, Serialize)]
pub(crate) struct SlotView<'a> {
    visible: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    background_image: Option<String>,
}

impl<'a> SlotView<'a> {
    fn new(state: BadgeState<'a>, background_image: Option<String>) -> Self {
        let link = match state {
            BadgeState::Linked(link) => Some(link),
            BadgeState::Hidden | BadgeState::Unlinked => None,
        };

        Self {
            visible: state.is_visible(),
            link,
            background_image: background_image.filter(|_| state.is_visible()),
        }
    }
}

impl Serialize for WatermarkDecision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("WatermarkDecision", 3)?;
        state.serialize_field("brand", &self.brand_view())?;
        state.serialize_field("product", &self.product_view())?;
        state.serialize_field("powered_by", &self.powered_by_view())?;
        state.end()
    }
}
