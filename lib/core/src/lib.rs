//! # bozor Core
//!
//! Core library for the bozor catalog engine.
//!
//! This crate provides the decision logic for a multi-domain
//! classifieds catalog:
//!
//! - [`AttributeView`] - fail-soft normalization of schema-flexible listing attributes
//! - [`CategoryGroup`] - bilingual category taxonomy for filtering and comparability
//! - [`QueryInterpreter`] - free-text phrases to structured constraints
//! - [`evaluate`](evaluate::evaluate) - facet/range filtering with relevance scoring
//! - [`ComparisonSet`] - bounded, domain-homogeneous comparison groups
//! - [`Catalog`] - the stateful in-memory shell around the pure engine
//!
//! ## Example
//!
//! ```rust
//! use bozor_core::{Catalog, Listing, ListingId, SearchQuery};
//!
//! let catalog = Catalog::new();
//! let listing = Listing::new(ListingId::Integer(1), "Квартиры", 45000.0)
//!     .with_attributes(serde_json::json!({ "rooms": 2 }));
//! catalog.upsert(listing).unwrap();
//!
//! let outcome = catalog.search(&SearchQuery {
//!     text: Some("квартира 2 комнаты до 50k".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(outcome.results.len(), 1);
//! ```

pub mod attributes;
pub mod catalog;
pub mod compare;
pub mod error;
pub mod evaluate;
pub mod interpret;
pub mod listing;
pub mod taxonomy;

pub use attributes::AttributeView;
pub use catalog::{Catalog, SearchOutcome, SearchQuery};
pub use compare::{CompareRejection, ComparisonSet, COMPARE_LIMIT};
pub use error::{Error, Result};
pub use evaluate::{evaluate, recommend, ConstraintSet, FacetConstraint, RECOMMEND_LIMIT};
pub use interpret::{interpret, QueryInterpreter, DEFAULT_BUDGET_FLOOR};
pub use listing::{Listing, ListingId, ScoredListing};
pub use taxonomy::CategoryGroup;
