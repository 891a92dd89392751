//! # Hearth Site
//!
//! Command line front end for the Hearth listings site.
//!
//! - `render` loads the configured listing collection and writes one page
//!   (home, listings or property) as a static HTML document.
//! - `slideshow` runs the featured carousel on a simulated clock and prints
//!   every frame it produces.

mod document;
mod runtime;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use hearth_config::{Config, ConfigLoad, ConfigLoader, ConfigWarnings};
use hearth_core::page::Page;
use hearth_core::slides::{
    ManualClock, SlideFrame, SlideRenderer, SystemClock, TimerQueue,
    TracingRenderer, WidgetKey,
};
use hearth_core::store::ListingStore;
use hearth_core::surface::{MemorySurface, MountRole};
use hearth_core::{FilterField, ListingId};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "hearth-site")]
#[command(about = "Render Hearth listing pages and simulate the featured carousel")]
struct Cli {
    /// Path to a TOML configuration file (defaults to $HEARTH_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a page to an HTML document
    Render(RenderArgs),
    /// Advance the featured carousel on a simulated clock and print each frame
    Slideshow(SlideshowArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PageKind {
    Home,
    Listings,
    Property,
}

impl PageKind {
    fn title(self) -> &'static str {
        match self {
            PageKind::Home => "Home",
            PageKind::Listings => "Listings",
            PageKind::Property => "Property",
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
struct RenderArgs {
    /// Page to render
    #[arg(long, value_enum)]
    page: PageKind,

    /// Listing shown on the property page
    #[arg(long, required_if_eq("page", "property"))]
    id: Option<String>,

    /// Only listings with this status (active, pending, sold)
    #[arg(long)]
    status: Option<String>,

    /// Only listings of this type (house, condo, townhouse, ...)
    #[arg(long = "type")]
    property_type: Option<String>,

    /// Minimum price in dollars
    #[arg(long)]
    min_price: Option<String>,

    /// Maximum price in dollars
    #[arg(long)]
    max_price: Option<String>,

    /// Minimum number of bedrooms
    #[arg(long)]
    beds: Option<String>,

    /// Write the document here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

impl RenderArgs {
    fn filter_value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Status => self.status.as_deref(),
            FilterField::Type => self.property_type.as_deref(),
            FilterField::MinPrice => self.min_price.as_deref(),
            FilterField::MaxPrice => self.max_price.as_deref(),
            FilterField::Beds => self.beds.as_deref(),
        }
    }

    fn has_filters(&self) -> bool {
        FilterField::all()
            .iter()
            .any(|field| self.filter_value(*field).is_some())
    }

    /// Surface with the mount points and inputs of the requested page.
    fn surface(&self) -> MemorySurface {
        match self.page {
            PageKind::Home => MemorySurface::new().with_mounts(&[
                MountRole::FeaturedCarousel,
                MountRole::FeaturedListings,
            ]),
            PageKind::Listings => FilterField::all().iter().fold(
                MemorySurface::new().with_mounts(&[
                    MountRole::ListingsCount,
                    MountRole::AllListings,
                ]),
                |surface, field| {
                    surface.with_input(
                        *field,
                        self.filter_value(*field).unwrap_or_default(),
                    )
                },
            ),
            PageKind::Property => MemorySurface::new()
                .with_mounts(&[MountRole::Gallery, MountRole::Lightbox]),
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
struct SlideshowArgs {
    /// Number of autoplay intervals to simulate
    #[arg(long, default_value_t = 5)]
    ticks: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hearth_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    log_warnings(&warnings);
    info!(
        source = %config.data.source.describe(),
        autoplay = ?config.carousel.autoplay_interval,
        "configuration in effect"
    );

    match cli.command {
        Command::Render(args) => render(&config, args).await,
        Command::Slideshow(args) => slideshow(&config, args).await,
    }
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}

async fn render(config: &Config, args: RenderArgs) -> anyhow::Result<()> {
    let detail = args
        .id
        .as_deref()
        .map(ListingId::new)
        .transpose()
        .context("invalid --id")?;

    let source = runtime::listing_source(config)?;
    let store = ListingStore::load(source.as_ref()).await;

    let mut surface = args.surface();
    let mut renderers =
        |_key: WidgetKey| -> Box<dyn SlideRenderer> { Box::new(TracingRenderer) };
    let mut page = Page::initialize(
        store,
        runtime::page_settings(config),
        detail,
        &mut surface,
        TimerQueue::new(SystemClock::new()),
        &mut renderers,
    );
    if args.has_filters()
        && let Some(count) = page.apply_filters(&mut surface)
    {
        info!(count, "filters applied");
    }
    page.teardown();

    let html = document::render(args.page.title(), &surface).into_string();
    match &args.out {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

/// Prints one line per carousel frame.
#[derive(Debug)]
struct FramePrinter;

impl SlideRenderer for FramePrinter {
    fn render(&mut self, frame: &SlideFrame) {
        println!(
            "{} / {}  {}",
            frame.index + 1,
            frame.len,
            frame.position.transform().unwrap_or_default()
        );
    }
}

async fn slideshow(config: &Config, args: SlideshowArgs) -> anyhow::Result<()> {
    let source = runtime::listing_source(config)?;
    let store = ListingStore::load(source.as_ref()).await;

    let clock = ManualClock::new();
    let mut surface =
        MemorySurface::new().with_mount(MountRole::FeaturedCarousel);
    let mut renderers =
        |_key: WidgetKey| -> Box<dyn SlideRenderer> { Box::new(FramePrinter) };
    let mut page = Page::initialize(
        store,
        runtime::page_settings(config),
        None,
        &mut surface,
        TimerQueue::new(clock.clone()),
        &mut renderers,
    );
    if page.host().controller(WidgetKey::FeaturedCarousel).is_none() {
        anyhow::bail!("no featured listings to show");
    }

    for _ in 0..args.ticks {
        clock.advance(config.carousel.autoplay_interval);
        page.poll_timers();
    }
    page.teardown();
    Ok(())
}
