use time::OffsetDateTime;

/// The identifier of a sales document.
///
/// Stores assign these; the engine only ever compares and displays them.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct DocumentId(i64);

impl From<i64> for DocumentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<DocumentId> for i64 {
    fn from(value: DocumentId) -> i64 {
        value.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A sales record aggregating zero or more line items.
///
/// Documents are read-only inputs to the engine. The one-to-many relation to
/// [`LineItem`] is expressed through [`LineItem::document_id`]; storage-side
/// ownership is an external concern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalesDocument {
    /// The unique identifier of this document
    pub id: DocumentId,

    /// When the document was issued
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    #[cfg_attr(
        feature = "schemars",
        schemars(schema_with = "crate::models::datetime_schema")
    )]
    pub issued_at: OffsetDateTime,

    /// The name of the receiving customer. Non-empty.
    pub customer: String,
}

/// One product entry within a sales document.
///
/// Line items have no independent lifecycle: one whose [`document_id`] does
/// not match any known document is excluded from every report by the join.
///
/// [`document_id`]: LineItem::document_id
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    /// The name of the product sold. Non-empty.
    pub product: String,

    /// The price of a single unit. Non-negative and finite.
    pub unit_price: f64,

    /// How many units were sold. Positive.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub quantity: u32,

    /// The document this line belongs to
    pub document_id: DocumentId,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// The monetary amount of this line, unit price times quantity.
    ///
    /// Revenue is always derived this way, never stored.
    pub fn line_amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
