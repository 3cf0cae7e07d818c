use serde::{Deserialize, Serialize};

/// A catalog listing with an opaque attribute payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    /// Literal category tag as stored in the catalog - not a closed enum
    pub category: String,
    /// Non-negative price in catalog currency
    #[serde(default)]
    pub price: f64,
    /// Discount percentage, 0-100
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Opaque attribute bag: absent, a JSON-encoded string, or an object,
    /// possibly with a nested `specs` sub-object. Never trusted as parsed;
    /// consumers go through [`crate::AttributeView::resolve`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    String(String),
    Integer(u64),
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingId::String(s) => write!(f, "{}", s),
            ListingId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        ListingId::String(s)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId::String(s.to_string())
    }
}

impl From<u64> for ListingId {
    fn from(i: u64) -> Self {
        ListingId::Integer(i)
    }
}

impl Listing {
    /// Create a new listing with the fields every record carries
    #[inline]
    #[must_use]
    pub fn new(id: ListingId, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            category: category.into(),
            price,
            discount: 0.0,
            region: String::new(),
            name: String::new(),
            description: String::new(),
            attributes: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Price after applying the discount percentage
    #[inline]
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount / 100.0)
    }
}

/// A listing paired with its relevance score, used for ranking only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing: Listing,
    /// Non-negative; higher means a better match
    pub score: f64,
}

impl ScoredListing {
    #[inline]
    #[must_use]
    pub fn new(listing: Listing, score: f64) -> Self {
        Self { listing, score }
    }
}
