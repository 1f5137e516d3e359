// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use meet_data_model::{BrandingState, SessionState, WatermarkSettings};

use crate::{Badge, POWERED_BY_URL, ProductBadge, WatermarkDecision};

/// Resolves watermark decisions against a fixed set of [`WatermarkSettings`].
///
/// The settings are captured once, the branding and session state are passed
/// on every call to [`WatermarkResolver::resolve`]. Resolving is a pure
/// function of those inputs.
#[derive(Debug, Clone, Copy)]
pub struct WatermarkResolver<'a> {
    settings: &'a WatermarkSettings,
    default_logo_url: Option<&'a str>,
}

impl<'a> WatermarkResolver<'a> {
    /// Create a resolver for the given settings
    #[must_use]
    pub fn new(settings: &'a WatermarkSettings) -> Self {
        Self {
            settings,
            default_logo_url: None,
        }
    }

    /// Use this logo for the product watermark instead of the configured
    /// default one, when no dynamic branding is in use. Empty values are
    /// ignored.
    #[must_use]
    pub fn with_default_logo_url(mut self, default_logo_url: &'a str) -> Self {
        self.default_logo_url = Some(default_logo_url).filter(|url| !url.is_empty());
        self
    }

    /// Decide which watermarks to display
    #[must_use]
    pub fn resolve(&self, branding: &BrandingState, session: &SessionState) -> WatermarkDecision {
        let decision = WatermarkDecision {
            brand: self.brand(),
            product: self.product(branding, session),
            powered_by: self.powered_by(),
        };

        tracing::debug!(
            brand = ?decision.brand_state(),
            product = ?decision.product_state(),
            powered_by = ?decision.powered_by_state(),
            "Resolved watermarks"
        );

        decision
    }

    fn brand(&self) -> Option<Badge> {
        let settings = self.settings;
        if settings.film_strip_only || !settings.show_brand_watermark {
            return None;
        }

        Some(Badge::new(
            settings.brand_watermark_link.as_deref(),
        ))
    }

    fn product(&self, branding: &BrandingState, session: &SessionState) -> Option<ProductBadge> {
        let settings = self.settings;

        let enabled_for_viewer = settings.show_product_watermark
            || (session.is_guest && settings.show_product_watermark_for_guests);
        let in_room_eligible =
            !settings.film_strip_only && branding.customization_ok() && enabled_for_viewer;

        // Before joining a room, the product watermark stands in for any other
        // branding, whatever the settings say
        if !in_room_eligible && !session.welcome_page_visible() {
            return None;
        }

        let badge = if branding.use_dynamic_branding_data {
            ProductBadge::new(branding.logo_click_url(), branding.logo_image_url())
        } else {
            let logo = self
                .default_logo_url
                .unwrap_or(settings.default_logo_url.as_str());

            ProductBadge::new(
                settings.product_watermark_link.as_deref(),
                Some(logo),
            )
        };

        Some(badge)
    }

    fn powered_by(&self) -> Option<Badge> {
        self.settings
            .show_powered_by
            .then(|| Badge::new(Some(POWERED_BY_URL)))
    }
}

/// Decide which watermarks to display, using the configured default logo.
///
/// Shorthand for `WatermarkResolver::new(settings).resolve(branding, session)`.
#[must_use]
pub fn resolve(
    settings: &WatermarkSettings,
    branding: &BrandingState,
    session: &SessionState,
) -> WatermarkDecision {
    WatermarkResolver::new(settings).resolve(branding, session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BadgeState;

    fn settings() -> WatermarkSettings {
        WatermarkSettings {
            film_strip_only: false,
            show_brand_watermark: true,
            brand_watermark_link: Some("https://brand.example.com/".to_owned()),
            show_powered_by: true,
            show_product_watermark: true,
            show_product_watermark_for_guests: true,
            product_watermark_link: Some("https://jitsi.org/".to_owned()),
            default_logo_url: "images/watermark.svg".to_owned(),
        }
    }

    fn ready() -> BrandingState {
        BrandingState {
            customization_ready: true,
            ..BrandingState::default()
        }
    }

    fn dynamic(click_url: &str, image_url: &str) -> BrandingState {
        BrandingState {
            customization_ready: true,
            use_dynamic_branding_data: true,
            logo_click_url: Some(click_url.to_owned()),
            logo_image_url: Some(image_url.to_owned()),
            ..BrandingState::default()
        }
    }

    #[test]
    fn typical_conference() {
        let decision = resolve(&settings(), &ready(), &SessionState::in_room(false));

        insta::assert_json_snapshot!(decision, @r###"
        {
          "brand": {
            "visible": true,
            "link": "https://brand.example.com/"
          },
          "product": {
            "visible": true,
            "link": "https://jitsi.org/",
            "background_image": "url(images/watermark.svg)"
          },
          "powered_by": {
            "visible": true,
            "link": "https://jitsi.org"
          }
        }
        "###);
    }

    #[test]
    fn film_strip_only_hides_brand_and_product_in_room() {
        let settings = WatermarkSettings {
            film_strip_only: true,
            ..settings()
        };

        let decision = resolve(&settings, &ready(), &SessionState::in_room(false));
        assert_eq!(decision.brand_state(), BadgeState::Hidden);
        assert_eq!(decision.product_state(), BadgeState::Hidden);
        // The credit isn't affected
        assert!(decision.powered_by_state().is_visible());

        // The welcome page still shows the product watermark
        let decision = resolve(&settings, &ready(), &SessionState::welcome_page());
        assert_eq!(decision.brand_state(), BadgeState::Hidden);
        assert!(decision.product_state().is_visible());
    }

    /// The product watermark is always shown on the welcome page, bypassing
    /// every other flag. This is intended: it acts as the branding of the
    /// landing page, before any room is joined.
    #[test]
    fn welcome_page_always_shows_product() {
        let settings = WatermarkSettings {
            film_strip_only: true,
            show_product_watermark: false,
            show_product_watermark_for_guests: false,
            ..WatermarkSettings::disabled()
        };
        let branding = BrandingState {
            customization_ready: false,
            customization_failed: true,
            ..BrandingState::default()
        };

        for is_guest in [false, true] {
            let session = SessionState {
                is_guest,
                room_active: false,
            };
            let decision = resolve(&settings, &branding, &session);
            assert!(decision.product.is_some());
        }
    }

    #[test]
    fn product_shown_in_room_once_branding_is_ready() {
        let decision = resolve(&settings(), &ready(), &SessionState::in_room(false));
        assert_eq!(
            decision.product_state(),
            BadgeState::Linked("https://jitsi.org/")
        );
    }

    #[test]
    fn product_hidden_in_room_until_branding_is_ready() {
        let session = SessionState::in_room(false);

        let decision = resolve(&settings(), &BrandingState::default(), &session);
        assert_eq!(decision.product_state(), BadgeState::Hidden);

        let failed = BrandingState {
            customization_failed: true,
            ..ready()
        };
        let decision = resolve(&settings(), &failed, &session);
        assert_eq!(decision.product_state(), BadgeState::Hidden);
    }

    #[test]
    fn product_shown_to_guests_only() {
        let settings = WatermarkSettings {
            show_product_watermark: false,
            show_product_watermark_for_guests: true,
            ..settings()
        };

        let decision = resolve(&settings, &ready(), &SessionState::in_room(true));
        assert!(decision.product.is_some());

        let decision = resolve(&settings, &ready(), &SessionState::in_room(false));
        assert!(decision.product.is_none());

        let settings = WatermarkSettings {
            show_product_watermark_for_guests: false,
            ..settings
        };
        let decision = resolve(&settings, &ready(), &SessionState::in_room(true));
        assert!(decision.product.is_none());
    }

    #[test]
    fn dynamic_branding_without_click_url() {
        let decision = resolve(
            &settings(),
            &dynamic("", "https://x/logo.png"),
            &SessionState::in_room(false),
        );

        let product = decision.product.as_ref().unwrap();
        assert_eq!(product.link(), None);
        assert_eq!(product.image_url(), Some("https://x/logo.png"));
        assert_eq!(
            product.background_image().as_deref(),
            Some("url(https://x/logo.png)")
        );
        assert_eq!(decision.product_state(), BadgeState::Unlinked);
    }

    #[test]
    fn dynamic_branding_ignores_static_link_and_logo() {
        let settings = settings();
        let resolver = WatermarkResolver::new(&settings).with_default_logo_url("custom.svg");
        let branding = BrandingState {
            logo_image_url: None,
            ..dynamic("https://custom.example.com/", "")
        };

        let decision = resolver.resolve(&branding, &SessionState::in_room(false));
        let product = decision.product.unwrap();
        assert_eq!(product.link(), Some("https://custom.example.com/"));
        assert_eq!(product.image_url(), None);
    }

    #[test]
    fn caller_supplied_logo_takes_precedence() {
        let settings = settings();
        let session = SessionState::in_room(false);

        let decision = WatermarkResolver::new(&settings)
            .with_default_logo_url("https://cdn.example.com/logo.svg")
            .resolve(&ready(), &session);
        assert_eq!(
            decision.product.unwrap().image_url(),
            Some("https://cdn.example.com/logo.svg")
        );

        let decision = WatermarkResolver::new(&settings)
            .with_default_logo_url("")
            .resolve(&ready(), &session);
        assert_eq!(
            decision.product.unwrap().image_url(),
            Some("images/watermark.svg")
        );
    }

    #[test]
    fn links_are_passed_through_verbatim() {
        let settings = WatermarkSettings {
            brand_watermark_link: Some("https://Brand.Example.com".to_owned()),
            product_watermark_link: Some("/about".to_owned()),
            ..settings()
        };

        let decision = resolve(&settings, &ready(), &SessionState::in_room(false));
        assert_eq!(
            decision.brand_state(),
            BadgeState::Linked("https://Brand.Example.com")
        );
        assert_eq!(decision.product_state(), BadgeState::Linked("/about"));
    }

    #[test]
    fn brand_without_link_is_unlinked() {
        let settings = WatermarkSettings {
            brand_watermark_link: None,
            ..settings()
        };

        let decision = resolve(&settings, &ready(), &SessionState::in_room(false));
        assert_eq!(decision.brand_state(), BadgeState::Unlinked);
    }

    #[test]
    fn product_without_link_is_unlinked() {
        let settings = WatermarkSettings {
            product_watermark_link: None,
            ..settings()
        };

        let decision = resolve(&settings, &ready(), &SessionState::in_room(false));
        assert_eq!(decision.product_state(), BadgeState::Unlinked);
    }

    #[test]
    fn powered_by_follows_its_flag_only() {
        let hidden = WatermarkSettings {
            show_powered_by: false,
            ..settings()
        };

        for session in [SessionState::welcome_page(), SessionState::in_room(true)] {
            for branding in [ready(), dynamic("https://a/", "https://a/logo.png")] {
                let decision = resolve(&hidden, &branding, &session);
                assert_eq!(decision.powered_by_state(), BadgeState::Hidden);
            }
        }

        let decision = resolve(&settings(), &ready(), &SessionState::in_room(false));
        assert_eq!(
            decision.powered_by_state(),
            BadgeState::Linked(POWERED_BY_URL)
        );
    }

    /// Walks every combination of boolean inputs and checks the properties
    /// which hold regardless of the rest of the input.
    #[test]
    fn invariants_hold_for_all_inputs() {
        const FLAGS: u32 = 14;

        for bits in 0..(1_u32 << FLAGS) {
            let flag = |n: u32| bits & (1 << n) != 0;
            let link = |n: u32, url: &str| flag(n).then(|| url.to_owned());
            let text = |n: u32, url: &str| {
                if flag(n) {
                    url.to_owned()
                } else {
                    String::new()
                }
            };

            let settings = WatermarkSettings {
                film_strip_only: flag(0),
                show_brand_watermark: flag(1),
                brand_watermark_link: link(2, "https://brand.example.com/"),
                show_powered_by: flag(3),
                show_product_watermark: flag(4),
                show_product_watermark_for_guests: flag(5),
                product_watermark_link: link(6, "https://jitsi.org/"),
                default_logo_url: "images/watermark.svg".to_owned(),
            };
            let branding = BrandingState {
                customization_ready: flag(7),
                customization_failed: flag(8),
                use_dynamic_branding_data: flag(9),
                logo_click_url: Some(text(10, "https://custom.example.com/")),
                logo_image_url: Some(text(11, "https://custom.example.com/logo.png")),
            };
            let session = SessionState {
                is_guest: flag(12),
                room_active: flag(13),
            };

            let decision = resolve(&settings, &branding, &session);

            // Linked badges never carry an empty link
            for state in [
                decision.brand_state(),
                decision.product_state(),
                decision.powered_by_state(),
            ] {
                if let BadgeState::Linked(link) = state {
                    assert!(!link.is_empty(), "empty link for input {bits:#b}");
                }
            }

            if settings.film_strip_only {
                assert!(decision.brand.is_none());
                assert_eq!(decision.product.is_some(), !session.room_active);
            }

            if !session.room_active {
                assert!(decision.product.is_some());
            }

            assert_eq!(decision.powered_by.is_some(), settings.show_powered_by);

            let brand_visible = !settings.film_strip_only && settings.show_brand_watermark;
            assert_eq!(decision.brand.is_some(), brand_visible);
            if let Some(brand) = &decision.brand {
                assert_eq!(brand.link(), settings.brand_watermark_link.as_deref());
            }

            let customization_ok = branding.customization_ready && !branding.customization_failed;
            let in_room_eligible = !settings.film_strip_only
                && customization_ok
                && (settings.show_product_watermark
                    || (session.is_guest && settings.show_product_watermark_for_guests));
            assert_eq!(
                decision.product.is_some(),
                in_room_eligible || !session.room_active,
                "product visibility for input {bits:#b}"
            );

            if let Some(product) = &decision.product {
                if branding.use_dynamic_branding_data {
                    assert_eq!(
                        product.link(),
                        flag(10).then_some("https://custom.example.com/")
                    );
                    assert_eq!(
                        product.image_url(),
                        flag(11).then_some("https://custom.example.com/logo.png")
                    );
                } else {
                    assert_eq!(product.link(), settings.product_watermark_link.as_deref());
                    assert_eq!(product.image_url(), Some("images/watermark.svg"));
                }
            }

            assert_eq!(decision, resolve(&settings, &branding, &session));
        }
    }
}
