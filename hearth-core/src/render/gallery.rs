//! Property gallery and lightbox fragments.

use maud::{Markup, PreEscaped, html};

use super::placeholder::Placeholder;

/// Inline gallery: main image with counter, and prev/next buttons plus a
/// thumbnail strip when there is more than one image.
pub fn property_gallery(images: &[String]) -> Markup {
    let Some(first) = images.first() else {
        return html! {
            div.property-gallery-single {
                img src=(Placeholder::EmptyGallery.data_uri())
                    alt="No image available";
            }
        };
    };
    let several = images.len() > 1;

    html! {
        div.property-gallery-container {
            div.gallery-main data-action="open-lightbox" {
                img id="gallery-main-image"
                    src=(first)
                    alt="Property main image"
                    onerror=(Placeholder::GalleryMain.onerror());
                div.gallery-counter id="gallery-counter" { "1 / " (images.len()) }
                @if several {
                    button.gallery-nav.gallery-prev data-action="prev" {
                        (PreEscaped("&#10094;"))
                    }
                    button.gallery-nav.gallery-next data-action="next" {
                        (PreEscaped("&#10095;"))
                    }
                }
                div.gallery-expand-hint { "Click to expand" }
            }
            @if several {
                div.gallery-thumbs {
                    @for (index, src) in images.iter().enumerate() {
                        button.gallery-thumb.active[index == 0]
                            data-action="go-to"
                            data-index=(index)
                        {
                            img src=(src)
                                alt=(format!("Property image {}", index + 1))
                                onerror="this.parentElement.style.display='none'";
                        }
                    }
                }
            }
        }
    }
}

/// Full-screen overlay for the gallery, hidden until opened. Renders
/// nothing for a listing without images.
pub fn lightbox(images: &[String]) -> Markup {
    let Some(first) = images.first() else {
        return html! {};
    };
    html! {
        div.lightbox id="lightbox" data-action="close-backdrop" {
            button.lightbox-close data-action="close" { (PreEscaped("&times;")) }
            button.lightbox-prev data-action="prev" { (PreEscaped("&#10094;")) }
            div.lightbox-content {
                img id="lightbox-image" src=(first) alt="Property image";
                div.lightbox-counter id="lightbox-counter" { "1 / " (images.len()) }
            }
            button.lightbox-next data-action="next" { (PreEscaped("&#10095;")) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("images/house-{i}.jpg")).collect()
    }

    #[test]
    fn empty_gallery_is_a_single_placeholder() {
        let html = property_gallery(&[]).into_string();
        assert!(html.starts_with(r#"<div class="property-gallery-single">"#));
        assert!(html.contains("No%20Images"));
        assert!(lightbox(&[]).into_string().is_empty());
    }

    #[test]
    fn single_image_has_no_navigation() {
        let html = property_gallery(&images(1)).into_string();
        assert!(html.contains("1 / 1"));
        assert!(!html.contains("gallery-thumbs"));
        assert!(!html.contains("gallery-prev"));
        assert!(html.contains("Click to expand"));
    }

    #[test]
    fn several_images_get_thumbnails() {
        let html = property_gallery(&images(4)).into_string();
        assert!(html.contains("1 / 4"));
        assert_eq!(html.matches(r#"data-action="go-to""#).count(), 4);
        assert_eq!(html.matches("gallery-thumb active").count(), 1);
        assert!(html.contains(r#"alt="Property image 4""#));
    }

    #[test]
    fn lightbox_starts_on_first_image() {
        let html = lightbox(&images(3)).into_string();
        assert!(html.contains(r#"src="images/house-1.jpg""#));
        assert!(html.contains("1 / 3"));
        assert!(!html.contains("lightbox active"));
    }

    #[test]
    fn gallery_and_lightbox_carry_element_ids() {
        let gallery = property_gallery(&images(2)).into_string();
        assert!(gallery.contains(r#"id="gallery-main-image""#));
        assert!(gallery.contains(r#"id="gallery-counter""#));

        let overlay = lightbox(&images(2)).into_string();
        assert!(overlay.contains(r#"id="lightbox""#));
        assert!(overlay.contains(r#"id="lightbox-image""#));
        assert!(overlay.contains(r#"id="lightbox-counter""#));
    }
}
