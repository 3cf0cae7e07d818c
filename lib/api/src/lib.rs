//! REST boundary for the bozor catalog engine.
//!
//! Thin adapter over [`bozor_core`]: request/response DTOs and routing
//! only, no decision logic of its own.

pub mod rest;

pub use rest::RestApi;
