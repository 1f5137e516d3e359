// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use anyhow::Context;
use camino::Utf8Path;
use meet_config::InterfaceConfig;
use meet_data_model::WatermarkSettings;
use tokio::io::AsyncWriteExt;
use tracing::info;

fn link(link: &str) -> Option<String> {
    Some(link).filter(|l| !l.is_empty()).map(ToOwned::to_owned)
}

pub fn watermark_settings_from_config(config: &InterfaceConfig) -> WatermarkSettings {
    WatermarkSettings {
        film_strip_only: config.film_strip_only,
        show_brand_watermark: config.show_brand_watermark,
        brand_watermark_link: link(&config.brand_watermark_link),
        show_powered_by: config.show_powered_by,
        show_product_watermark: config.show_product_watermark,
        show_product_watermark_for_guests: config.show_product_watermark_for_guests,
        product_watermark_link: link(&config.product_watermark_link),
        default_logo_url: config.default_logo_url.clone(),
    }
}

/// Write a command output to the given file, or to stdout if none is given
pub async fn write_output(output: Option<&Utf8Path>, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(output) = output {
        info!("Writing output to {output:?}");
        let mut file = tokio::fs::File::create(output)
            .await
            .with_context(|| format!("could not create {output}"))?;
        file.write_all(contents).await?;
        file.flush().await?;
    } else {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(contents).await?;
        stdout.flush().await?;
    }

    Ok(())
}
