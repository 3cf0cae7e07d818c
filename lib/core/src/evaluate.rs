// Facet/range evaluation: filter a listing collection and score survivors
use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::AttributeView;
use crate::listing::{Listing, ScoredListing};

/// Result cap for the recommendation path; the general catalog-filter
/// path is unrestricted.
pub const RECOMMEND_LIMIT: usize = 5;

/// Score weights for the soft facets
const ROOMS_EXACT_SCORE: f64 = 3.0;
const ROOMS_MORE_SCORE: f64 = 1.0;
const LOCATION_SCORE: f64 = 5.0;

/// One explicit facet selection: either an exact value or a numeric range
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FacetConstraint {
    Range {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Exact(Value),
}

// An object is a range only when it carries nothing but numeric min/max
// bounds and at least one of them; any other object is an exact value.
// A plain untagged derive would swallow every object as an unbounded
// range, since both bounds are optional.
impl<'de> Deserialize<'de> for FacetConstraint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if let Some(obj) = value.as_object() {
            let only_bounds =
                !obj.is_empty() && obj.keys().all(|k| k == "min" || k == "max");
            if only_bounds {
                let bound = |key: &str| match obj.get(key) {
                    None | Some(Value::Null) => Some(None),
                    Some(v) => v.as_f64().map(Some),
                };
                if let (Some(min), Some(max)) = (bound("min"), bound("max")) {
                    return Ok(FacetConstraint::Range { min, max });
                }
            }
        }
        Ok(FacetConstraint::Exact(value))
    }
}

impl FacetConstraint {
    /// Whether the attribute view satisfies this facet for `key`.
    /// An absent attribute never satisfies an explicitly requested facet.
    fn matches(&self, view: &AttributeView, key: &str) -> bool {
        match self {
            FacetConstraint::Exact(expected) => match view.get(key) {
                Some(actual) => facet_value_eq(actual, expected),
                None => false,
            },
            FacetConstraint::Range { min, max } => match view.f64_of(key) {
                Some(actual) => {
                    min.map(|m| actual >= m).unwrap_or(true)
                        && max.map(|m| actual <= m).unwrap_or(true)
                }
                None => false,
            },
        }
    }
}

/// Exact-match comparison that tolerates the catalog's number-vs-string
/// drift: `"2018"` matches `2018`.
fn facet_value_eq(actual: &Value, expected: &Value) -> bool {
    if actual == expected {
        return true;
    }
    let as_f64 = |v: &Value| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match (as_f64(actual), as_f64(expected)) {
        (Some(a), Some(e)) => a == e,
        _ => false,
    }
}

/// Partially specified filter criteria. Every field is optional; the
/// empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Acceptable literal category tags - a disjunction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    /// Budget ceiling; listings priced above it are rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Requested room count; fewer rooms reject, more only score lower
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i64>,
    /// Location keyword boost - never rejects, only scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_keyword: Option<String>,
    /// Normalized district display form, best-effort (not used for filtering)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Open-ended explicit facet selections, all hard filters
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub facets: HashMap<String, FacetConstraint>,
}

impl ConstraintSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.max_price.is_none()
            && self.rooms.is_none()
            && self.location_keyword.is_none()
            && self.facets.is_empty()
    }

    /// Overlay explicit selections on top of interpreted constraints.
    /// A field set in `explicit` wins; facet maps are merged with
    /// `explicit` entries shadowing interpreted ones.
    #[must_use]
    pub fn merged_with(mut self, explicit: ConstraintSet) -> Self {
        if explicit.category.is_some() {
            self.category = explicit.category;
        }
        if explicit.max_price.is_some() {
            self.max_price = explicit.max_price;
        }
        if explicit.rooms.is_some() {
            self.rooms = explicit.rooms;
        }
        if explicit.location_keyword.is_some() {
            self.location_keyword = explicit.location_keyword;
        }
        if explicit.district.is_some() {
            self.district = explicit.district;
        }
        self.facets.extend(explicit.facets);
        self
    }
}

/// Evaluate one listing against the constraints.
/// `None` means rejected; `Some(score)` means kept with that score.
fn score_listing(listing: &Listing, constraints: &ConstraintSet) -> Option<f64> {
    if let Some(categories) = &constraints.category {
        if !categories.iter().any(|c| c == &listing.category) {
            return None;
        }
    }

    if let Some(max_price) = constraints.max_price {
        if listing.price > max_price {
            return None;
        }
    }

    let view = AttributeView::resolve(listing.attributes.as_ref());
    let mut score = 0.0;

    if let Some(wanted) = constraints.rooms {
        // absent or non-numeric rooms attribute counts as 0
        let rooms = view.i64_of("rooms").unwrap_or(0);
        if rooms == wanted {
            score += ROOMS_EXACT_SCORE;
        } else if rooms > wanted {
            score += ROOMS_MORE_SCORE;
        } else {
            return None;
        }
    }

    if let Some(keyword) = &constraints.location_keyword {
        let haystack = format!(
            "{} {} {}",
            listing.name,
            listing.description,
            view.str_of("district").unwrap_or_default()
        )
        .to_lowercase();
        if haystack.contains(keyword.as_str()) {
            score += LOCATION_SCORE;
        }
    }

    for (key, facet) in &constraints.facets {
        if !facet.matches(&view, key) {
            return None;
        }
    }

    Some(score)
}

/// Filter a listing collection against the constraints and rank the
/// survivors by descending score, ties keeping their original relative
/// order. Pure: the input slice is never reordered or mutated.
#[must_use]
pub fn evaluate(listings: &[Listing], constraints: &ConstraintSet) -> Vec<ScoredListing> {
    // par_iter keeps input order through collect, so the stable sort
    // below sees the same tie order as a sequential scan
    let mut scored: Vec<ScoredListing> = listings
        .par_iter()
        .filter_map(|listing| {
            score_listing(listing, constraints)
                .map(|score| ScoredListing::new(listing.clone(), score))
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

/// Recommendation path: same evaluation, truncated to the top
/// [`RECOMMEND_LIMIT`] matches.
#[must_use]
pub fn recommend(listings: &[Listing], constraints: &ConstraintSet) -> Vec<ScoredListing> {
    let mut results = evaluate(listings, constraints);
    results.truncate(RECOMMEND_LIMIT);
    results
}
