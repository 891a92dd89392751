//! Listing filters.
//!
//! Every non-empty criterion is a conjunctive predicate. Numeric criteria
//! that do not parse are treated as absent, so malformed input narrows
//! nothing and never raises an error.

use hearth_model::{FilterCriteria, FilterField, Listing};
use tracing::debug;

use crate::navigation::Navigator;
use crate::render::grid::{GridOptions, render_listings};
use crate::store::ListingStore;
use crate::surface::{MountRole, Surface};

/// True when `listing` satisfies every present criterion.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if let Some(status) = criteria.status()
        && listing.status.as_str() != status
    {
        return false;
    }
    if let Some(kind) = criteria.property_type()
        && listing.property_type.as_str() != kind
    {
        return false;
    }
    if let Some(min) = criteria.min_price()
        && listing.price < min as f64
    {
        return false;
    }
    if let Some(max) = criteria.max_price()
        && listing.price > max as f64
    {
        return false;
    }
    if let Some(beds) = criteria.beds()
        && i64::from(listing.bedrooms) < beds
    {
        return false;
    }
    true
}

/// Ordered subsequence of `listings` that satisfies `criteria`.
pub fn filter_listings<'a, I>(
    listings: I,
    criteria: &FilterCriteria,
) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

/// `"N properties found"`, singular for exactly one.
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { "property" } else { "properties" };
    format!("{count} {noun} found")
}

/// Keeps the all-listings grid and the result count in sync with the filter
/// inputs present on the page.
#[derive(Debug, Clone)]
pub struct FilterController {
    store: ListingStore,
    navigator: Navigator,
    bound: Vec<FilterField>,
    criteria: FilterCriteria,
}

impl FilterController {
    /// Bind to the inputs the surface provides. Returns `None` when the
    /// surface has no all-listings mount point.
    pub fn setup<S: Surface + ?Sized>(
        store: ListingStore,
        navigator: Navigator,
        surface: &S,
    ) -> Option<Self> {
        if !surface.has_mount(MountRole::AllListings) {
            debug!("no all-listings mount point; filters disabled");
            return None;
        }
        let bound: Vec<FilterField> = FilterField::all()
            .iter()
            .copied()
            .filter(|field| surface.has_input(*field))
            .collect();
        debug!(bound = ?bound, "filter inputs bound");
        Some(Self {
            store,
            navigator,
            bound,
            criteria: FilterCriteria::default(),
        })
    }

    /// Inputs the page provides, in field order.
    pub fn bound_fields(&self) -> &[FilterField] {
        &self.bound
    }

    /// Criteria of the last applied filter.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// React to a change event on `field`. Unbound fields are ignored.
    /// Returns the new result count when the grid was re-rendered.
    pub fn handle_change<S: Surface + ?Sized>(
        &mut self,
        field: FilterField,
        surface: &mut S,
    ) -> Option<usize> {
        if !self.bound.contains(&field) {
            return None;
        }
        Some(self.apply(surface))
    }

    /// Rebuild the criteria from the current inputs, re-render the grid and
    /// update the count. Returns the number of visible listings.
    pub fn apply<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let bound = &self.bound;
        self.criteria = FilterCriteria::from_inputs(|field| {
            if bound.contains(&field) {
                surface.input_value(field)
            } else {
                None
            }
        });
        let visible = filter_listings(&self.store, &self.criteria);
        let count = visible.len();
        debug!(count, criteria = ?self.criteria, "filters applied");
        self.show(surface, &visible);
        count
    }

    /// Render the unfiltered collection.
    pub fn render_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        let all: Vec<&Listing> = self.store.iter().collect();
        self.show(surface, &all);
    }

    fn show<S: Surface + ?Sized>(&self, surface: &mut S, visible: &[&Listing]) {
        let grid = render_listings(visible, &GridOptions::default(), &self.navigator);
        surface.mount(MountRole::AllListings, grid.into_string());
        if surface.has_mount(MountRole::ListingsCount) {
            surface.mount(MountRole::ListingsCount, count_label(visible.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_model::{Address, ListingId, ListingStatus, PropertyType};

    fn listing(id: &str, price: f64, bedrooms: u32, status: &str) -> Listing {
        Listing {
            id: ListingId::new(id).unwrap(),
            title: format!("Home {id}"),
            address: Address::default(),
            price,
            bedrooms,
            bathrooms: 1.0,
            sqft: 1000.0,
            status: ListingStatus::from(status),
            property_type: PropertyType::House,
            images: Vec::new(),
            featured: false,
            mls_number: None,
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("1", 300_000.0, 2, "active"),
            listing("2", 500_000.0, 4, "pending"),
            listing("3", 750_000.0, 5, "sold"),
        ]
    }

    fn ids(found: &[&Listing]) -> Vec<String> {
        found.iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn min_price_scenario() {
        let listings = vec![
            listing("1", 300_000.0, 2, "active"),
            listing("2", 500_000.0, 4, "pending"),
        ];
        let criteria =
            FilterCriteria::new().with(FilterField::MinPrice, "400000");
        let found = filter_listings(&listings, &criteria);
        assert_eq!(ids(&found), ["2"]);
        assert_eq!(count_label(found.len()), "1 property found");
    }

    #[test]
    fn empty_criteria_is_identity() {
        let listings = sample();
        let found = filter_listings(&listings, &FilterCriteria::new());
        assert_eq!(ids(&found), ["1", "2", "3"]);
    }

    #[test]
    fn criteria_are_conjunctive() {
        let listings = sample();
        let criteria = FilterCriteria::new()
            .with(FilterField::MaxPrice, "600000")
            .with(FilterField::Beds, "3");
        assert_eq!(ids(&filter_listings(&listings, &criteria)), ["2"]);

        let criteria = FilterCriteria::new()
            .with(FilterField::Status, "sold")
            .with(FilterField::Type, "condo");
        assert!(filter_listings(&listings, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let listings = sample();
        let criteria = FilterCriteria::new()
            .with(FilterField::MinPrice, "350000")
            .with(FilterField::Status, "pending");
        let once = filter_listings(&listings, &criteria);
        let twice = filter_listings(once.iter().copied(), &criteria);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn malformed_numbers_are_no_constraint() {
        let listings = sample();
        let criteria = FilterCriteria::new()
            .with(FilterField::MinPrice, "cheap")
            .with(FilterField::MaxPrice, "")
            .with(FilterField::Beds, "many");
        assert_eq!(filter_listings(&listings, &criteria).len(), 3);
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 properties found");
        assert_eq!(count_label(1), "1 property found");
        assert_eq!(count_label(12), "12 properties found");
    }
}
