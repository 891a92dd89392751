//! Listing card fragment.

use hearth_model::{Listing, ListingStatus};
use maud::{Markup, html};

use super::placeholder::{PLACEHOLDER_IMAGE, Placeholder};
use crate::format::{format_number, format_price};
use crate::navigation::Navigator;

/// CSS modifier for the status badge: `sold`, `pending`, or none.
pub fn status_class(status: &ListingStatus) -> Option<&'static str> {
    match status {
        ListingStatus::Sold => Some("sold"),
        ListingStatus::Pending => Some("pending"),
        _ => None,
    }
}

/// Render one listing as a clickable card.
pub fn property_card(listing: &Listing, navigator: &Navigator) -> Markup {
    let image = listing.primary_image().unwrap_or(PLACEHOLDER_IMAGE);
    let badge = match status_class(&listing.status) {
        Some(modifier) => format!("property-status {modifier}"),
        None => "property-status".to_string(),
    };

    html! {
        article.property-card
            data-listing-id=(listing.id.as_str())
            data-href=(navigator.detail_href(&listing.id))
        {
            div.property-image {
                img src=(image)
                    alt=(listing.title)
                    onerror=(Placeholder::Card.onerror());
                span class=(badge) { (listing.status.label()) }
            }
            div.property-content {
                div.property-price { (format_price(listing.price)) }
                h3.property-title { (listing.title) }
                p.property-address { (listing.address.full()) }
                div.property-features {
                    span.property-feature {
                        span { "🛏️" } " " (listing.bedrooms) " Beds"
                    }
                    span.property-feature {
                        span { "🚿" } " " (format_number(listing.bathrooms)) " Baths"
                    }
                    span.property-feature {
                        span { "📐" } " " (format_number(listing.sqft)) " sqft"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_model::{Address, ListingId, PropertyType};

    fn listing() -> Listing {
        Listing {
            id: ListingId::new("7").unwrap(),
            title: "Maple <Cottage>".to_string(),
            address: Address {
                street: "12 Elm St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62701".to_string(),
            },
            price: 425_000.0,
            bedrooms: 3,
            bathrooms: 2.5,
            sqft: 1850.0,
            status: ListingStatus::Pending,
            property_type: PropertyType::House,
            images: vec!["images/maple-1.jpg".to_string()],
            featured: true,
            mls_number: None,
        }
    }

    #[test]
    fn card_shows_formatted_fields() {
        let html = property_card(&listing(), &Navigator::default()).into_string();
        assert!(html.contains("$425,000"));
        assert!(html.contains("12 Elm St, Springfield, IL 62701"));
        assert!(html.contains("2.5 Baths"));
        assert!(html.contains("1,850 sqft"));
        assert!(html.contains(r#"class="property-status pending""#));
        assert!(html.contains(">Pending<"));
        assert!(html.contains(r#"data-href="property.html?id=7""#));
        assert!(html.contains(r#"src="images/maple-1.jpg""#));
    }

    #[test]
    fn titles_are_escaped() {
        let html = property_card(&listing(), &Navigator::default()).into_string();
        assert!(html.contains("Maple &lt;Cottage&gt;"));
        assert!(!html.contains("<Cottage>"));
    }

    #[test]
    fn missing_images_fall_back_to_placeholder() {
        let mut listing = listing();
        listing.images.clear();
        let html = property_card(&listing, &Navigator::default()).into_string();
        assert!(html.contains(r#"src="images/placeholder.jpg""#));
        assert!(html.contains("data:image/svg+xml,"));
    }

    #[test]
    fn unknown_status_renders_verbatim_without_modifier() {
        let mut listing = listing();
        listing.status = ListingStatus::from("coming-soon");
        let html = property_card(&listing, &Navigator::default()).into_string();
        assert!(html.contains(r#"class="property-status""#));
        assert!(html.contains(">coming-soon<"));
    }
}
