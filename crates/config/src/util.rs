// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use camino::Utf8PathBuf;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::de::DeserializeOwned;

/// Prefix of the environment variables merged into the configuration
pub const ENV_PREFIX: &str = "MEET_";

/// Build a [`Figment`] out of the given YAML files.
///
/// Environment variables prefixed with [`ENV_PREFIX`] are loaded first, nested
/// keys being separated by a double underscore, e.g.
/// `MEET_INTERFACE__SHOW_POWERED_BY=true`. Files are then merged on top of it,
/// in order, later files overriding earlier ones.
#[must_use]
pub fn figment_from_files(files: &[Utf8PathBuf]) -> Figment {
    let base = Figment::new().merge(Env::prefixed(ENV_PREFIX).split("__"));

    files
        .iter()
        .fold(base, |figment, path| figment.admerge(Yaml::file(path)))
}

/// Trait implemented by every configuration section, so that each part of
/// the application only loads the sections it needs.
pub trait ConfigurationSection: Sized + DeserializeOwned {
    /// Where the section lives relative to the root, `None` for the root
    /// itself.
    const PATH: Option<&'static str> = None;

    /// Validate the configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    fn validate(
        &self,
        _figment: &Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        Ok(())
    }

    /// Extract and validate the section from a [`Figment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the section is missing, malformed or invalid
    fn extract(
        figment: &Figment,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let this: Self = match Self::PATH {
            Some(path) => figment.extract_inner(path)?,
            None => figment.extract()?,
        };

        this.validate(figment)?;
        Ok(this)
    }
}

/// Extension of [`ConfigurationSection`] for sections which can be omitted
/// entirely from the configuration.
pub trait ConfigurationSectionExt: ConfigurationSection + Default {
    /// Extract the section from the given [`Figment`], falling back to its
    /// default value when it is not present at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is present but invalid
    fn extract_or_default(
        figment: &Figment,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync + 'static>> {
        match Self::PATH {
            Some(path) if !figment.contains(path) => Ok(Self::default()),
            _ => Self::extract(figment),
        }
    }
}

impl<T: ConfigurationSection + Default> ConfigurationSectionExt for T {}
