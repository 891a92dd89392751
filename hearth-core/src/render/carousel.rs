//! Featured carousel fragment.

use hearth_model::Listing;
use maud::{Markup, PreEscaped, html};

use super::placeholder::{PLACEHOLDER_IMAGE, Placeholder};
use crate::format::{format_number, format_price};
use crate::navigation::Navigator;

/// Element id of the carousel root.
pub const CAROUSEL_ID: &str = "featured-carousel";

/// Render `slides` as a track of linked slides with prev/next buttons and
/// one dot per slide. No slides renders an empty fragment.
pub fn featured_carousel(slides: &[&Listing], navigator: &Navigator) -> Markup {
    if slides.is_empty() {
        return html! {};
    }
    html! {
        div.featured-carousel id=(CAROUSEL_ID) {
            div.carousel-track {
                @for listing in slides {
                    (slide(listing, navigator))
                }
            }
            button.carousel-prev data-action="prev" aria-label="Previous slide" {
                (PreEscaped("&#10094;"))
            }
            button.carousel-next data-action="next" aria-label="Next slide" {
                (PreEscaped("&#10095;"))
            }
            div.carousel-dots {
                @for index in 0..slides.len() {
                    button.carousel-dot.active[index == 0]
                        data-action="go-to"
                        data-index=(index)
                        aria-label=(format!("Go to slide {}", index + 1)) {}
                }
            }
        }
    }
}

fn slide(listing: &Listing, navigator: &Navigator) -> Markup {
    let image = listing.primary_image().unwrap_or(PLACEHOLDER_IMAGE);
    html! {
        div.carousel-slide {
            a.carousel-link href=(navigator.detail_href(&listing.id)) {
                div.carousel-image {
                    img src=(image)
                        alt=(listing.title)
                        onerror=(Placeholder::Slide.onerror());
                }
                div.carousel-content {
                    span class=(format!("carousel-status status-{}", listing.status.as_str())) {
                        (listing.status.label())
                    }
                    @if let Some(mls) = &listing.mls_number {
                        span.carousel-mls { "MLS# " (mls) }
                    }
                    h3.carousel-title { (listing.title) }
                    p.carousel-address { (listing.address.short()) }
                    div.carousel-details {
                        span.carousel-price { (format_price(listing.price)) }
                        span.carousel-specs {
                            (listing.bedrooms) " bed | "
                            (format_number(listing.bathrooms)) " bath | "
                            (format_number(listing.sqft)) " sqft"
                        }
                    }
                }
            }
        }
    }
}
