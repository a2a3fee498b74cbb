//! Wire-facing ledger types.
//!
//! Deserialization is deliberately permissive: the raw types accept anything
//! structurally valid, and [`RawLedger::prepare`] is the single place where
//! the record invariants are checked before the data becomes a [`Ledger`].
//! Serialization goes the other way through `From<Ledger>`.

use crate::{Ledger, Set};
use serde::{Deserialize, Serialize};
use sli_core::models::{LineItem, SalesDocument};
use time::OffsetDateTime;

// Timestamps serialize as RFC3339 strings, so the generated schema should say so.
#[cfg(feature = "schemars")]
fn datetime_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "format": "date-time",
    })
}

/// The wire form of a sales document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RawDocument {
    /// The document identifier, unique within the ledger
    pub id: i64,

    /// When the document was issued, RFC3339
    #[serde(with = "time::serde::rfc3339")]
    #[cfg_attr(feature = "schemars", schemars(schema_with = "datetime_schema"))]
    pub issued_at: OffsetDateTime,

    /// The receiving customer's name
    pub customer: String,
}

/// The wire form of a line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RawLineItem {
    /// The product name
    pub product: String,

    /// The price of a single unit
    pub unit_price: f64,

    /// How many units were sold, defaulting to 1 when omitted
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// The identifier of the owning document
    pub document_id: i64,
}

fn default_quantity() -> u32 {
    1
}

/// The wire form of a whole ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RawLedger {
    /// The sales documents
    #[serde(default)]
    pub documents: Vec<RawDocument>,

    /// The line items
    #[serde(default)]
    pub line_items: Vec<RawLineItem>,
}

impl RawLedger {
    /// Validate the raw records and assemble the ledger snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a duplicated document id, an empty
    /// customer or product name, a non-finite or negative unit price, a zero
    /// quantity, or a line item referencing a document that is not part of
    /// this ledger.
    pub fn prepare(self) -> Result<Ledger, LedgerError> {
        let mut ids: Set<i64> = Set::default();
        for document in &self.documents {
            if document.customer.is_empty() {
                return Err(LedgerError::EmptyCustomer { id: document.id });
            }
            if !ids.insert(document.id) {
                return Err(LedgerError::DuplicateDocument { id: document.id });
            }
        }

        for (index, line) in self.line_items.iter().enumerate() {
            if line.product.is_empty() {
                return Err(LedgerError::EmptyProduct { index });
            }
            if !line.unit_price.is_finite() {
                return Err(LedgerError::NonFinitePrice { index });
            }
            if line.unit_price < 0.0 {
                return Err(LedgerError::NegativePrice { index });
            }
            if line.quantity == 0 {
                return Err(LedgerError::ZeroQuantity { index });
            }
            if !ids.contains(&line.document_id) {
                return Err(LedgerError::UnknownDocument {
                    index,
                    document: line.document_id,
                });
            }
        }

        Ok(Ledger {
            documents: self
                .documents
                .into_iter()
                .map(|raw| SalesDocument {
                    id: raw.id.into(),
                    issued_at: raw.issued_at,
                    customer: raw.customer,
                })
                .collect(),
            line_items: self
                .line_items
                .into_iter()
                .map(|raw| LineItem {
                    product: raw.product,
                    unit_price: raw.unit_price,
                    quantity: raw.quantity,
                    document_id: raw.document_id.into(),
                })
                .collect(),
        })
    }
}

impl TryFrom<RawLedger> for Ledger {
    type Error = LedgerError;

    fn try_from(value: RawLedger) -> Result<Self, Self::Error> {
        value.prepare()
    }
}

impl From<Ledger> for RawLedger {
    fn from(value: Ledger) -> Self {
        Self {
            documents: value
                .documents
                .into_iter()
                .map(|document| RawDocument {
                    id: document.id.into(),
                    issued_at: document.issued_at,
                    customer: document.customer,
                })
                .collect(),
            line_items: value
                .line_items
                .into_iter()
                .map(|line| RawLineItem {
                    product: line.product,
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    document_id: line.document_id.into(),
                })
                .collect(),
        }
    }
}

/// The ways in which a raw ledger can be invalid.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// Error when a document id appears more than once
    #[error("document {id} appears more than once")]
    DuplicateDocument {
        /// The offending document id
        id: i64,
    },
    /// Error when a document has an empty customer name
    #[error("document {id} has an empty customer name")]
    EmptyCustomer {
        /// The offending document id
        id: i64,
    },
    /// Error when a line item has an empty product name
    #[error("line item {index} has an empty product name")]
    EmptyProduct {
        /// The position of the offending line item
        index: usize,
    },
    /// Error when a unit price is NaN or infinite
    #[error("line item {index} has a non-finite unit price")]
    NonFinitePrice {
        /// The position of the offending line item
        index: usize,
    },
    /// Error when a unit price is negative
    #[error("line item {index} has a negative unit price")]
    NegativePrice {
        /// The position of the offending line item
        index: usize,
    },
    /// Error when a quantity is zero
    #[error("line item {index} has zero quantity")]
    ZeroQuantity {
        /// The position of the offending line item
        index: usize,
    },
    /// Error when a line item references a document not in the ledger
    #[error("line item {index} references unknown document {document}")]
    UnknownDocument {
        /// The position of the offending line item
        index: usize,
        /// The unmatched document id
        document: i64,
    },
}
