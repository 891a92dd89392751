use std::fmt;

use super::ids::ListingId;

/// Sale status of a listing.
///
/// Unknown values are preserved verbatim so that display and filtering keep
/// working for data files that use statuses this crate does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
    Other(String),
}

impl ListingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
            ListingStatus::Other(raw) => raw,
        }
    }

    /// Badge text shown on cards and slides.
    pub fn label(&self) -> &str {
        match self {
            ListingStatus::Active => "For Sale",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
            ListingStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ListingStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => ListingStatus::Active,
            "pending" => ListingStatus::Pending,
            "sold" => ListingStatus::Sold,
            _ => ListingStatus::Other(raw),
        }
    }
}

/// Records without a status carry an empty raw value.
impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Other(String::new())
    }
}

impl From<&str> for ListingStatus {
    fn from(raw: &str) -> Self {
        ListingStatus::from(raw.to_string())
    }
}

impl From<ListingStatus> for String {
    fn from(status: ListingStatus) -> Self {
        match status {
            ListingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Property category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PropertyType {
    House,
    Condo,
    Townhouse,
    MultiFamily,
    Land,
    Other(String),
}

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        use PropertyType::*;
        &[House, Condo, Townhouse, MultiFamily, Land]
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::MultiFamily => "multi-family",
            PropertyType::Land => "land",
            PropertyType::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Land => "Land",
            PropertyType::Other(raw) => raw,
        }
    }
}

impl From<String> for PropertyType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "house" => PropertyType::House,
            "condo" => PropertyType::Condo,
            "townhouse" => PropertyType::Townhouse,
            "multi-family" => PropertyType::MultiFamily,
            "land" => PropertyType::Land,
            _ => PropertyType::Other(raw),
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other(String::new())
    }
}

impl From<&str> for PropertyType {
    fn from(raw: &str) -> Self {
        PropertyType::from(raw.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        match kind {
            PropertyType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Postal address. In listing documents the street line is the `address`
/// field and the remaining parts sit next to it on the listing itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    #[cfg_attr(feature = "serde", serde(rename = "address", default))]
    pub street: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zip: String,
}

impl Address {
    /// `street, city, state`
    pub fn short(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.state)
    }

    /// `street, city, state zip`
    pub fn full(&self) -> String {
        format!("{} {}", self.short(), self.zip)
    }
}

/// One property record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Listing {
    pub id: ListingId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub address: Address,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bedrooms: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bathrooms: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sqft: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ListingStatus,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub property_type: PropertyType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub mls_number: Option<String>,
}

impl Listing {
    /// First image reference, if the listing has any non-blank one.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|src| !src.trim().is_empty())
    }
}

/// Top-level shape of a listings data file: `{ "listings": [...] }`.
/// A missing `listings` field is treated as an empty collection.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListingsDocument {
    #[cfg_attr(feature = "serde", serde(default))]
    pub listings: Vec<Listing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_keeps_raw_label() {
        let status = ListingStatus::from("coming-soon");
        assert_eq!(status.label(), "coming-soon");
        assert_eq!(status.as_str(), "coming-soon");
        assert_eq!(ListingStatus::from("active").label(), "For Sale");
        assert_eq!(ListingStatus::from("sold").label(), "Sold");
    }

    #[test]
    fn address_formats() {
        let address = Address {
            street: "12 Elm St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62701".into(),
        };
        assert_eq!(address.short(), "12 Elm St, Springfield, IL");
        assert_eq!(address.full(), "12 Elm St, Springfield, IL 62701");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_listing_document() {
        let json = r#"{
            "listings": [{
                "id": 3,
                "title": "Lake House",
                "address": "1 Shore Rd",
                "city": "Madison",
                "state": "WI",
                "zip": "53703",
                "price": 450000,
                "bedrooms": 3,
                "bathrooms": 2.5,
                "sqft": 2100,
                "status": "pending",
                "type": "house",
                "images": ["images/lake-1.jpg"],
                "featured": true,
                "mlsNumber": "WI-553"
            }]
        }"#;
        let doc: ListingsDocument = serde_json::from_str(json).unwrap();
        let listing = &doc.listings[0];
        assert_eq!(listing.id.as_str(), "3");
        assert_eq!(listing.address.street, "1 Shore Rd");
        assert_eq!(listing.status, ListingStatus::Pending);
        assert_eq!(listing.property_type, PropertyType::House);
        assert_eq!(listing.mls_number.as_deref(), Some("WI-553"));
        assert_eq!(listing.primary_image(), Some("images/lake-1.jpg"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_status_and_type_default_to_blank() {
        let json = r#"{ "id": "9", "title": "Lot", "price": 50000 }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.status, ListingStatus::Other(String::new()));
        assert_eq!(listing.status.label(), "");
        assert_eq!(listing.property_type, PropertyType::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_listings_field_is_empty() {
        let doc: ListingsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.listings.is_empty());
    }
}
