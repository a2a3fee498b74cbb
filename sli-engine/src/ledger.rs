use crate::Set;
use sli_core::{
    models::{DocumentId, LineItem, SalesDocument},
    ports::RecordSource,
};
use std::convert::Infallible;
use time::OffsetDateTime;

/// An in-memory snapshot of a sales ledger.
///
/// This is the default [`RecordSource`]: an owned, immutable collection of
/// documents and line items. Fetches cannot fail, so its error type is
/// [`Infallible`].
///
/// Construction from untrusted data should go through the `io` module's
/// `RawLedger`, which validates the record invariants. Building a `Ledger`
/// directly is appropriate for records that are already known to be valid,
/// such as fixtures or rows from a trusted store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    /// The sales documents
    pub documents: Vec<SalesDocument>,
    /// The line items, each referencing one of the documents
    pub line_items: Vec<LineItem>,
}

impl Ledger {
    /// Bundle documents and line items into a snapshot.
    pub fn new(documents: Vec<SalesDocument>, line_items: Vec<LineItem>) -> Self {
        Self {
            documents,
            line_items,
        }
    }
}

impl RecordSource for Ledger {
    type Error = Infallible;

    fn documents(
        &self,
        issued_since: Option<OffsetDateTime>,
    ) -> impl Future<Output = Result<Vec<SalesDocument>, Infallible>> + Send {
        let documents = match issued_since {
            Some(since) => self
                .documents
                .iter()
                .filter(|document| document.issued_at >= since)
                .cloned()
                .collect(),
            None => self.documents.clone(),
        };
        async move { Ok(documents) }
    }

    fn line_items(
        &self,
        issued_since: Option<OffsetDateTime>,
    ) -> impl Future<Output = Result<Vec<LineItem>, Infallible>> + Send {
        let line_items = match issued_since {
            Some(since) => {
                // The scope applies to the owning document's issue time.
                let in_window: Set<DocumentId> = self
                    .documents
                    .iter()
                    .filter(|document| document.issued_at >= since)
                    .map(|document| document.id)
                    .collect();
                self.line_items
                    .iter()
                    .filter(|line| in_window.contains(&line.document_id))
                    .cloned()
                    .collect()
            }
            None => self.line_items.clone(),
        };
        async move { Ok(line_items) }
    }
}
