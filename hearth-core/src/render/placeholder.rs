//! Generated stand-in graphics for missing or broken images.

/// Image used when a listing has no image references at all.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

/// Where a placeholder is shown; decides its size and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Listing card image.
    Card,
    /// Featured carousel slide.
    Slide,
    /// Main image of the property gallery.
    GalleryMain,
    /// Property gallery for a listing without images.
    EmptyGallery,
}

impl Placeholder {
    /// Width and height in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Placeholder::Card => (400, 300),
            _ => (800, 500),
        }
    }

    /// Text drawn in the middle of the image.
    pub fn caption(self) -> &'static str {
        match self {
            Placeholder::EmptyGallery => "No Images",
            _ => "No Image",
        }
    }

    fn font_size(self) -> u32 {
        match self {
            Placeholder::Card => 20,
            _ => 24,
        }
    }

    /// Grey box with the caption, as SVG source.
    pub fn svg(self) -> String {
        let (width, height) = self.dimensions();
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                r##"<rect fill="#f0f0f0" width="{w}" height="{h}"/>"##,
                r##"<text fill="#999" font-family="sans-serif" font-size="{fs}" x="{cx}" y="{cy}" text-anchor="middle" dy=".3em">{caption}</text>"##,
                "</svg>"
            ),
            w = width,
            h = height,
            fs = self.font_size(),
            cx = width / 2,
            cy = height / 2,
            caption = self.caption(),
        )
    }

    /// Percent-encoded `data:` URI of [`Placeholder::svg`].
    pub fn data_uri(self) -> String {
        format!("data:image/svg+xml,{}", urlencoding::encode(&self.svg()))
    }

    /// Inline image-load-failure handler that swaps in the placeholder once.
    pub fn onerror(self) -> String {
        format!("this.onerror=null;this.src='{}'", self.data_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_placeholder_is_small_and_singular() {
        let svg = Placeholder::Card.svg();
        assert!(svg.contains(r#"width="400" height="300""#));
        assert!(svg.contains(">No Image<"));
    }

    #[test]
    fn empty_gallery_says_no_images() {
        let uri = Placeholder::EmptyGallery.data_uri();
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(uri.contains("No%20Images"));
    }

    #[test]
    fn onerror_handler_does_not_break_out_of_quotes() {
        let handler = Placeholder::Slide.onerror();
        let inner = handler
            .strip_prefix("this.onerror=null;this.src='")
            .and_then(|rest| rest.strip_suffix('\''))
            .unwrap();
        assert!(!inner.contains('\''));
        assert!(!inner.contains('"'));
    }
}
