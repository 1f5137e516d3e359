// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod interface;

pub use self::interface::InterfaceConfig;
use crate::util::ConfigurationSection;

/// Application configuration root
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct RootConfig {
    /// Configuration of the watermarks displayed over the conference
    #[serde(default)]
    pub interface: InterfaceConfig,
}

impl ConfigurationSection for RootConfig {
    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        self.interface.validate(figment)?;

        Ok(())
    }
}

impl RootConfig {
    /// Generate a new configuration with every option set to its default
    #[must_use]
    pub fn generate() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use figment::{
        Figment, Jail,
        providers::{Format, Yaml},
    };

    use super::*;

    #[test]
    fn generated_config_round_trips() {
        Jail::expect_with(|jail| {
            let generated = serde_yaml::to_string(&RootConfig::generate())
                .map_err(|e| e.to_string())?;
            jail.create_file("config.yaml", &generated)?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            let config = RootConfig::extract(&figment).map_err(|e| e.to_string())?;

            assert_eq!(config.interface, InterfaceConfig::default());

            Ok(())
        });
    }

    #[test]
    fn files_override_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    interface:
                      show_brand_watermark: false
                ",
            )?;
            jail.set_env("MEET_INTERFACE__SHOW_BRAND_WATERMARK", "true");
            jail.set_env("MEET_INTERFACE__SHOW_POWERED_BY", "true");

            let figment = crate::figment_from_files(&["config.yaml".into()]);
            let config = RootConfig::extract(&figment).map_err(|e| e.to_string())?;

            assert!(!config.interface.show_brand_watermark);
            assert!(config.interface.show_powered_by);

            Ok(())
        });
    }
}
