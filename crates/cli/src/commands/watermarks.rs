// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use figment::Figment;
use meet_config::{ConfigurationSectionExt, InterfaceConfig};
use meet_data_model::{BrandingState, SessionState};
use meet_watermarks::WatermarkResolver;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{info, info_span};

use crate::util::{watermark_settings_from_config, write_output};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Decide which watermarks to display, and print the decision as JSON
    Resolve {
        /// Dynamic branding payload, as JSON. Use `-` to read it from the
        /// standard input.
        ///
        /// If not specified, no dynamic branding is available
        #[arg(long)]
        branding: Option<Utf8PathBuf>,

        /// The viewer is a guest
        #[arg(long)]
        guest: bool,

        /// A conference room is joined. Without it, the welcome page is
        /// assumed to be displayed
        #[arg(long)]
        in_room: bool,

        /// Logo to use for the product watermark instead of the configured
        /// one
        #[arg(long)]
        default_logo_url: Option<String>,

        /// Where to write the decision
        ///
        /// If not specified, the decision will be written to stdout
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
}

/// Parse a dynamic branding payload. Individual fields degrade to their
/// default value, only a document which isn't a JSON object is an error.
fn parse_branding(payload: &[u8]) -> anyhow::Result<BrandingState> {
    serde_json::from_slice(payload).context("invalid branding payload")
}

/// Load the branding payload from `path`, `-` meaning `stdin`. Without a path
/// no dynamic branding is available.
async fn load_branding<R>(path: Option<&Utf8Path>, mut stdin: R) -> anyhow::Result<BrandingState>
where
    R: AsyncRead + Unpin,
{
    let Some(path) = path else {
        return Ok(BrandingState::default());
    };

    let payload = if path.as_str() == "-" {
        let mut payload = Vec::new();
        stdin
            .read_to_end(&mut payload)
            .await
            .context("could not read branding from standard input")?;
        payload
    } else {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("could not read branding from {path}"))?
    };

    parse_branding(&payload)
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::Resolve {
                branding,
                guest,
                in_room,
                default_logo_url,
                output,
            } => {
                let _span = info_span!("cli.watermarks.resolve").entered();

                let interface_config = InterfaceConfig::extract_or_default(figment)
                    .map_err(anyhow::Error::from_boxed)?;
                let settings = watermark_settings_from_config(&interface_config);

                let branding = load_branding(branding.as_deref(), tokio::io::stdin()).await?;
                let session = SessionState {
                    is_guest: guest,
                    room_active: in_room,
                };

                let mut resolver = WatermarkResolver::new(&settings);
                if let Some(default_logo_url) = &default_logo_url {
                    resolver = resolver.with_default_logo_url(default_logo_url);
                }

                let decision = resolver.resolve(&branding, &session);
                info!(
                    brand = decision.brand.is_some(),
                    product = decision.product.is_some(),
                    powered_by = decision.powered_by.is_some(),
                    "Resolved watermarks"
                );

                let mut decision = serde_json::to_string_pretty(&decision)?;
                decision.push('\n');
                write_output(output.as_deref(), decision.as_bytes()).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
