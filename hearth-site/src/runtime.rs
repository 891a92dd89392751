//! Glue between the resolved configuration and hearth-core.

use anyhow::Context;
use hearth_config::{Config, DataSource};
use hearth_core::navigation::Navigator;
use hearth_core::page::PageSettings;
use hearth_core::store::{FileListingSource, HttpListingSource, ListingSource};
use hearth_core::widgets::CarouselOptions;

pub fn listing_source(config: &Config) -> anyhow::Result<Box<dyn ListingSource>> {
    match &config.data.source {
        DataSource::Url(url) => {
            let source =
                HttpListingSource::new(url.clone(), config.data.fetch_timeout)
                    .context("failed to build HTTP client")?;
            Ok(Box::new(source))
        }
        DataSource::Path(path) => Ok(Box::new(FileListingSource::new(path.clone()))),
    }
}

pub fn page_settings(config: &Config) -> PageSettings {
    PageSettings {
        navigator: Navigator::new(config.site.detail_page.clone()),
        featured_card_limit: config.grid.featured_card_limit,
        carousel: CarouselOptions {
            slide_limit: config.carousel.featured_slide_limit,
            autoplay_interval: config.carousel.autoplay_interval,
            swipe_threshold: config.carousel.swipe_threshold,
        },
    }
}
