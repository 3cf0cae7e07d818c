//! # bozor
//!
//! An in-memory catalog query/filter/compare engine for a classifieds
//! marketplace whose listings span heterogeneous domains (real estate,
//! vehicles, electronics) sharing one storage shape but different
//! attribute schemas.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install bozor
//! bozor --http-port 8080 --seed listings.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use bozor::prelude::*;
//!
//! let catalog = Catalog::new();
//! let listing = Listing::new(ListingId::Integer(1), "Квартиры", 45000.0)
//!     .with_attributes(serde_json::json!({ "rooms": 2, "district": "Mirabad" }));
//! catalog.upsert(listing).unwrap();
//!
//! // Free-text search: category, rooms, and budget are interpreted
//! let outcome = catalog.search(&SearchQuery {
//!     text: Some("квартира 2 комнаты до 50k".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(outcome.results.len(), 1);
//! ```
//!
//! ## Crate Structure
//!
//! bozor is composed of two crates:
//!
//! - [`bozor-core`](https://docs.rs/bozor-core) - Query interpretation, facet
//!   evaluation, category taxonomy, comparison rules
//! - [`bozor-api`](https://docs.rs/bozor-api) - REST boundary
//!
//! ## Features
//!
//! - **Query Interpretation**: bilingual free-text phrases to structured constraints
//! - **Facet Filtering**: exact-match and numeric-range facets over schema-flexible attributes
//! - **Relevance Scoring**: room-count and location boosts with stable ranking
//! - **Comparability Rules**: bounded, domain-homogeneous comparison groups
//! - **Fail-soft Attributes**: malformed payloads never break evaluation

// Re-export core types
pub use bozor_core::{
    AttributeView, Catalog, CategoryGroup, CompareRejection, ComparisonSet, ConstraintSet,
    Error, FacetConstraint, Listing, ListingId, QueryInterpreter, Result, ScoredListing,
    SearchOutcome, SearchQuery, COMPARE_LIMIT, DEFAULT_BUDGET_FLOOR, RECOMMEND_LIMIT,
};
pub use bozor_core::{evaluate, interpret, recommend};

// Re-export API
pub use bozor_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        evaluate, interpret, recommend, AttributeView, Catalog, CategoryGroup,
        CompareRejection, ComparisonSet, ConstraintSet, Error, FacetConstraint, Listing,
        ListingId, QueryInterpreter, RestApi, Result, ScoredListing, SearchOutcome,
        SearchQuery, COMPARE_LIMIT, DEFAULT_BUDGET_FLOOR, RECOMMEND_LIMIT,
    };
}
