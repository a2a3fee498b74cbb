use crate::models::{LineItem, SalesDocument};
use time::OffsetDateTime;

/// Read-only access to the two record collections backing every report.
///
/// This is the engine's only boundary. Implementations are expected to
/// return already-validated records: non-empty product and customer names,
/// non-negative finite prices, positive quantities, unique document
/// identifiers. The engine does not re-check these invariants.
///
/// Fetches may fail with a transient store error; the engine propagates such
/// failures to its caller unchanged and never interprets them. Retry policy
/// is the store's concern.
pub trait RecordSource {
    /// Error type for fetch failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch sales documents, optionally restricted to those issued at or
    /// after `issued_since`.
    ///
    /// # Arguments
    ///
    /// - `issued_since`: inclusive lower bound on the issue timestamp, or
    ///   `None` for the full collection
    fn documents(
        &self,
        issued_since: Option<OffsetDateTime>,
    ) -> impl Future<Output = Result<Vec<SalesDocument>, Self::Error>> + Send;

    /// Fetch line items, optionally restricted to those whose owning
    /// document was issued at or after `issued_since`.
    ///
    /// The time scope applies to the owning document, not to the line item
    /// itself; line items carry no timestamp of their own.
    ///
    /// # Arguments
    ///
    /// - `issued_since`: inclusive lower bound on the owning document's
    ///   issue timestamp, or `None` for the full collection
    fn line_items(
        &self,
        issued_since: Option<OffsetDateTime>,
    ) -> impl Future<Output = Result<Vec<LineItem>, Self::Error>> + Send;
}
