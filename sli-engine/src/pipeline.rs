//! The join/group/reduce substrate shared by the grouped reports.
//!
//! Every grouped report starts the same way: pair each line item with its
//! owning document, partition the pairs by some key, and reduce each
//! partition to a quantity/revenue/distinct-document aggregate. The reports
//! themselves are thin, declarative instances over these pieces.

use crate::{Map, Set};
use sli_core::models::{DocumentId, LineItem, SalesDocument};
use std::hash::Hash;

/// A line item paired with the document it belongs to.
pub(crate) type Pair<'a> = (&'a LineItem, &'a SalesDocument);

/// Equality-join line items to their owning documents.
///
/// Pairs come out in line-item order. Line items referencing an unknown
/// document are dropped, which is what excludes orphans from every report.
pub(crate) fn join<'a>(
    line_items: &'a [LineItem],
    documents: &'a [SalesDocument],
) -> Vec<Pair<'a>> {
    let by_id: Map<DocumentId, &SalesDocument> =
        documents.iter().map(|document| (document.id, document)).collect();

    line_items
        .iter()
        .filter_map(|line| by_id.get(&line.document_id).map(|document| (line, *document)))
        .collect()
}

/// The reduction of one partition of the pair stream.
#[derive(Debug, Clone, Default)]
pub(crate) struct GroupStats {
    /// Sum of quantities over the partition
    pub total_quantity: u64,
    /// Sum of line amounts over the partition
    pub total_revenue: f64,
    documents: Set<DocumentId>,
}

impl GroupStats {
    fn record(&mut self, line: &LineItem, document: &SalesDocument) {
        self.total_quantity += u64::from(line.quantity);
        self.total_revenue += line.line_amount();
        self.documents.insert(document.id);
    }

    /// How many distinct documents contributed to the partition.
    ///
    /// One document may carry many line items, so this is a set cardinality,
    /// not a row count.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Partition the pair stream by `key` and reduce each partition.
///
/// Groups keep the first-occurrence order of their keys.
pub(crate) fn group_by<'a, K, F>(pairs: &[Pair<'a>], key: F) -> Map<K, GroupStats>
where
    K: Eq + Hash,
    F: Fn(&'a LineItem, &'a SalesDocument) -> K,
{
    let mut groups: Map<K, GroupStats> = Map::default();
    for (line, document) in pairs {
        groups.entry(key(line, document)).or_default().record(line, document);
    }
    groups
}
