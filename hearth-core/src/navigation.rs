use hearth_model::ListingId;

/// Builds links to the listing detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    detail_page: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new("property.html")
    }
}

impl Navigator {
    /// Navigator linking to `detail_page`, e.g. `property.html`.
    pub fn new(detail_page: impl Into<String>) -> Self {
        Self {
            detail_page: detail_page.into(),
        }
    }

    /// Path of the detail page.
    pub fn detail_page(&self) -> &str {
        &self.detail_page
    }

    /// `<detail_page>?id=<id>`, with the id percent-encoded.
    pub fn detail_href(&self, id: &ListingId) -> String {
        format!(
            "{}?id={}",
            self.detail_page,
            urlencoding::encode(id.as_str())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_links_encode_the_id() {
        let nav = Navigator::default();
        let id = ListingId::new("42").unwrap();
        assert_eq!(nav.detail_href(&id), "property.html?id=42");
        let odd = ListingId::new("a&b c").unwrap();
        assert_eq!(nav.detail_href(&odd), "property.html?id=a%26b%20c");
    }
}
