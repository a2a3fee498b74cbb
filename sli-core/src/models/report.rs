//! Typed results of the report catalogue.
//!
//! Every value here is recomputed from the input records on each engine call;
//! nothing is cached or persisted. Revenue figures are always the sum of
//! unit price times quantity over the contributing line items, and document
//! counts are counts of distinct document identifiers, never line-item rows.

use super::YearMonth;
use time::OffsetDateTime;

/// Aggregate sales of one product.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductTotal {
    /// The product name
    pub product: String,

    /// Total units sold across all contributing line items
    pub total_quantity: u64,

    /// Total revenue across all contributing line items
    pub total_revenue: f64,
}

/// Aggregate sales within one calendar month.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthTotal {
    /// The month being aggregated
    pub month: YearMonth,

    /// Total revenue in the month
    pub total_revenue: f64,

    /// How many distinct documents contributed
    pub document_count: usize,
}

/// Aggregate sales to one customer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerTotal {
    /// The customer name
    pub customer: String,

    /// Total revenue from this customer
    pub total_revenue: f64,

    /// How many distinct documents this customer has
    pub document_count: usize,
}

/// Per-document roll-up of line count and value.
///
/// Unlike the grouped reports, summaries cover every document, including
/// those with no line items at all.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentSummary {
    /// The document identifier, rendered for display
    pub document: String,

    /// When the document was issued
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    #[cfg_attr(
        feature = "schemars",
        schemars(schema_with = "crate::models::datetime_schema")
    )]
    pub issued_at: OffsetDateTime,

    /// How many line items the document has
    pub line_count: usize,

    /// The document total, zero when there are no line items
    pub total: f64,
}

/// Aggregate sales on one day of the week.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekdayTotal {
    /// The weekday label, see [`WEEKDAY_LABELS`](super::WEEKDAY_LABELS)
    pub weekday: String,

    /// Total revenue on this weekday
    pub total_revenue: f64,

    /// How many distinct documents were issued on this weekday
    pub document_count: usize,
}

/// Mean line count and mean value per document, over all documents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Averages {
    /// Mean number of line items per document
    pub lines_per_document: f64,

    /// Mean document total
    pub document_value: f64,
}

/// A product ranked by the trend of its monthly sales.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductDecline {
    /// The product name
    pub product: String,

    /// Least-squares slope of monthly quantity against a 0-based
    /// chronological index; negative slopes indicate decline
    pub slope: f64,

    /// The months backing the regression, chronologically ordered.
    /// Only the period identifiers are carried, not per-month values.
    pub series: Vec<YearMonth>,
}

/// A customer retained within the lookback window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecurringCustomer {
    /// The customer name
    pub customer: String,

    /// On how many distinct calendar dates the customer purchased
    pub distinct_purchases: usize,

    /// Total revenue from this customer inside the window
    pub total_revenue: f64,
}
