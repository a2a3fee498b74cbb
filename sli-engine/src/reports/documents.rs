use crate::{Map, pipeline::Pair};
use sli_core::models::{Averages, DocumentId, DocumentSummary, SalesDocument};

/// The `top` documents by total value, descending.
///
/// Unlike the grouped reports this is an outer join over the documents:
/// a document with no line items still appears, with line count 0 and
/// total 0.0.
pub(crate) fn document_summaries(
    documents: &[SalesDocument],
    pairs: &[Pair<'_>],
    top: usize,
) -> Vec<DocumentSummary> {
    let mut per_document: Map<DocumentId, (usize, f64)> = Map::default();
    for (line, document) in pairs {
        let entry = per_document.entry(document.id).or_default();
        entry.0 += 1;
        entry.1 += line.line_amount();
    }

    let mut summaries: Vec<DocumentSummary> = documents
        .iter()
        .map(|document| {
            let (line_count, total) = per_document
                .get(&document.id)
                .copied()
                .unwrap_or((0, 0.0));
            DocumentSummary {
                document: document.id.to_string(),
                issued_at: document.issued_at,
                line_count,
                total,
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.total.total_cmp(&a.total));
    summaries.truncate(top);
    summaries
}

/// Mean line count and mean value per document, over all documents.
///
/// Documents without line items pull both means down, and an empty document
/// collection yields (0.0, 0.0) rather than an error.
pub(crate) fn averages(documents: &[SalesDocument], pairs: &[Pair<'_>]) -> Averages {
    if documents.is_empty() {
        return Averages {
            lines_per_document: 0.0,
            document_value: 0.0,
        };
    }

    let count = documents.len() as f64;
    let total: f64 = pairs.iter().map(|(line, _)| line.line_amount()).sum();
    Averages {
        lines_per_document: pairs.len() as f64 / count,
        document_value: total / count,
    }
}
