//! Card grids.

use hearth_model::Listing;
use maud::{Markup, html};

use super::card::property_card;
use crate::navigation::Navigator;

/// Number of cards in the home page featured strip.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Shown in place of the grid when there is nothing to list.
pub const NO_RESULTS_MESSAGE: &str =
    "No properties found matching your criteria.";

/// Which part of a collection a grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    /// Keep only featured listings, capped at `limit` (or
    /// [`DEFAULT_FEATURED_LIMIT`]).
    pub featured_only: bool,
    /// Truncate to the first `limit` listings.
    pub limit: Option<usize>,
}

impl GridOptions {
    /// Featured listings only, at most `limit`.
    pub fn featured(limit: usize) -> Self {
        Self {
            featured_only: true,
            limit: Some(limit),
        }
    }

    /// The first `limit` listings.
    pub fn limited(limit: usize) -> Self {
        Self {
            featured_only: false,
            limit: Some(limit),
        }
    }

    /// The listings a grid with these options displays, in input order.
    pub fn select<'a>(&self, listings: &[&'a Listing]) -> Vec<&'a Listing> {
        if self.featured_only {
            let limit = self.limit.unwrap_or(DEFAULT_FEATURED_LIMIT);
            listings
                .iter()
                .copied()
                .filter(|listing| listing.featured)
                .take(limit)
                .collect()
        } else {
            let limit = self.limit.unwrap_or(listings.len());
            listings.iter().copied().take(limit).collect()
        }
    }
}

/// Render `listings` as a grid of cards.
///
/// An empty input renders the no-results message. A non-empty input whose
/// selection comes out empty (no featured listings) renders nothing.
pub fn render_listings(
    listings: &[&Listing],
    options: &GridOptions,
    navigator: &Navigator,
) -> Markup {
    if listings.is_empty() {
        return html! { div.no-results { (NO_RESULTS_MESSAGE) } };
    }
    let shown = options.select(listings);
    html! {
        @for listing in &shown {
            (property_card(listing, navigator))
        }
    }
}
