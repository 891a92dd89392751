use crate::error::ModelError;

/// Stable identifier of a listing.
///
/// Listing documents carry ids either as JSON strings or numbers; both are
/// normalized to their string form so the id can be used verbatim in detail
/// page links.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidListingId(raw));
        }
        Ok(ListingId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ListingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ListingId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingId::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ListingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        let raw = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
        };
        ListingId::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(ListingId::new("   ").is_err());
        assert_eq!(ListingId::new(" 42 ").unwrap().as_str(), "42");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn numeric_ids_normalize_to_strings() {
        let id: ListingId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
        let id: ListingId = serde_json::from_str("\"mls-9\"").unwrap();
        assert_eq!(id.to_string(), "mls-9");
    }
}
