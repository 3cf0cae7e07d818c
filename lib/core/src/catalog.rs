use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::evaluate::{self, ConstraintSet};
use crate::interpret::QueryInterpreter;
use crate::listing::{Listing, ScoredListing};
use crate::{Error, Result};

/// One search request against the catalog: free text and/or explicit
/// facet selections, with an optional result cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text phrase, interpreted into constraints when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Explicit UI facet selections; override interpreted fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Search output: ranked listings plus the constraint set that was
/// actually applied (for UI display of the interpreted query).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<ScoredListing>,
    pub constraints: ConstraintSet,
}

/// In-memory listing store shared by the request boundary.
///
/// The engine itself is pure; the catalog is the one stateful shell
/// around it, and it caches nothing - every search re-evaluates the
/// current listings.
pub struct Catalog {
    listings: RwLock<AHashMap<String, Listing>>,
    interpreter: QueryInterpreter,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(AHashMap::new()),
            interpreter: QueryInterpreter::new(),
        }
    }

    #[must_use]
    pub fn with_interpreter(interpreter: QueryInterpreter) -> Self {
        Self {
            listings: RwLock::new(AHashMap::new()),
            interpreter,
        }
    }

    pub fn count(&self) -> usize {
        self.listings.read().len()
    }

    /// Insert or update a listing
    pub fn upsert(&self, listing: Listing) -> Result<()> {
        if listing.price < 0.0 {
            return Err(Error::InvalidListing(format!(
                "negative price for listing {}",
                listing.id
            )));
        }
        if !(0.0..=100.0).contains(&listing.discount) {
            return Err(Error::InvalidListing(format!(
                "discount out of range for listing {}",
                listing.id
            )));
        }
        self.listings.write().insert(listing.id.to_string(), listing);
        Ok(())
    }

    /// Bulk insert
    pub fn upsert_all(&self, listings: Vec<Listing>) -> Result<()> {
        for listing in listings {
            self.upsert(listing)?;
        }
        Ok(())
    }

    /// Get a listing by id
    pub fn get(&self, id: &str) -> Option<Listing> {
        self.listings.read().get(id).cloned()
    }

    /// Delete a listing by id
    pub fn delete(&self, id: &str) -> bool {
        self.listings.write().remove(id).is_some()
    }

    /// Snapshot of all listings, in insertion-independent map order
    pub fn iter(&self) -> Vec<Listing> {
        self.listings.read().values().cloned().collect()
    }

    /// Interpret the query text (if any), overlay the explicit facet
    /// selections, and evaluate the current listings.
    pub fn search(&self, query: &SearchQuery) -> SearchOutcome {
        let interpreted = query
            .text
            .as_deref()
            .map(|t| self.interpreter.interpret(t))
            .unwrap_or_default();
        let constraints = match &query.constraints {
            Some(explicit) => interpreted.merged_with(explicit.clone()),
            None => interpreted,
        };

        // snapshot sorted by id so evaluation order (and therefore tie
        // order in the ranking) does not depend on map iteration
        let mut listings = self.iter();
        listings.sort_by(|a, b| a.id.to_string().cmp(&b.id.to_string()));

        let mut results = evaluate::evaluate(&listings, &constraints);
        if let Some(limit) = query.limit {
            results.truncate(limit);
        }
        SearchOutcome {
            results,
            constraints,
        }
    }

    /// Top-5 recommendation path over the current listings
    pub fn recommend(&self, constraints: &ConstraintSet) -> Vec<ScoredListing> {
        let mut listings = self.iter();
        listings.sort_by(|a, b| a.id.to_string().cmp(&b.id.to_string()));
        evaluate::recommend(&listings, constraints)
    }

    /// Load listings from a JSON array (seed files, test fixtures)
    pub fn load_json(&self, json: &str) -> Result<usize> {
        let listings: Vec<Listing> =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        let count = listings.len();
        self.upsert_all(listings)?;
        Ok(count)
    }
}
