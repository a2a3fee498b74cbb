#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod engine;
mod ledger;
mod pipeline;
mod reports;
mod trend;

pub use engine::ReportEngine;
pub use ledger::Ledger;

#[cfg(feature = "io")]
pub mod io;

// We use non-std collections here for their ordering semantics: groups come
// out in first-occurrence order, which is what the stable sorts preserve
// through ties.
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
