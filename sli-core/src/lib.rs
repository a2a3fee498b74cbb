#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the sibling crates.
//! [sli_core]: https://docs.rs/sli_core/latest/sli_core/index.html
//! [sli_engine]: https://docs.rs/sli_engine/latest/sli_engine/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for sales ledger analytics.
///
/// This module contains the fundamental data structures that represent the domain entities.
///
/// The models in this module are primarily data structures with minimal business logic,
/// following the principles of the hexagonal architecture to separate domain entities
/// from their persistence and processing implementations.
pub mod models;

/// Interface traits for sales ledger analytics.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain logic and external adapters
/// (such as databases, APIs, or other services) without specifying implementation details.
/// This separation allows for easier testing and the ability to swap out infrastructure
/// components without affecting the core business logic.
pub mod ports;
