use std::fmt;

/// The five filter inputs of the listings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Status,
    Type,
    MinPrice,
    MaxPrice,
    Beds,
}

impl FilterField {
    pub fn all() -> &'static [FilterField] {
        use FilterField::*;
        &[Status, Type, MinPrice, MaxPrice, Beds]
    }

    /// Element id of the input on the listings page.
    pub fn input_id(&self) -> &'static str {
        match self {
            FilterField::Status => "filter-status",
            FilterField::Type => "filter-type",
            FilterField::MinPrice => "filter-min-price",
            FilterField::MaxPrice => "filter-max-price",
            FilterField::Beds => "filter-beds",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_id())
    }
}

/// Raw filter input state, rebuilt from the page on every change.
///
/// Values are kept exactly as typed. Empty strings and values without a
/// leading integer mean "no constraint"; see [`FilterCriteria::min_price`]
/// and friends for the parsed views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilterCriteria {
    pub status: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub beds: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from a lookup of the current input values. Inputs the
    /// lookup does not know about stay empty.
    pub fn from_inputs<F>(mut lookup: F) -> Self
    where
        F: FnMut(FilterField) -> Option<String>,
    {
        let mut criteria = Self::default();
        for field in FilterField::all() {
            if let Some(value) = lookup(*field) {
                criteria.set(*field, value);
            }
        }
        criteria
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Status => &mut self.status,
            FilterField::Type => &mut self.property_type,
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
            FilterField::Beds => &mut self.beds,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Status => &self.status,
            FilterField::Type => &self.property_type,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::Beds => &self.beds,
        }
    }

    pub fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }

    pub fn property_type(&self) -> Option<&str> {
        non_empty(&self.property_type)
    }

    pub fn min_price(&self) -> Option<i64> {
        parse_leading_int(&self.min_price)
    }

    pub fn max_price(&self) -> Option<i64> {
        parse_leading_int(&self.max_price)
    }

    pub fn beds(&self) -> Option<i64> {
        parse_leading_int(&self.beds)
    }

    /// True when no input carries a usable constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.status().is_none()
            && self.property_type().is_none()
            && self.min_price().is_none()
            && self.max_price().is_none()
            && self.beds().is_none()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Parse the leading integer of a form value: optional leading whitespace,
/// an optional sign, then decimal digits. Anything after the digits is
/// ignored (`"400000abc"` is 400000, `"12.5"` is 12). Values without a
/// leading integer, or ones that overflow, yield `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
