mod calendar;
mod config;
mod record;
mod report;

pub use calendar::{WEEKDAY_LABELS, YearMonth, lookback_start, shift_months, weekday_label};
pub use config::ReportConfig;
pub use record::{DocumentId, LineItem, SalesDocument};
pub use report::{
    Averages, CustomerTotal, DocumentSummary, MonthTotal, ProductDecline, ProductTotal,
    RecurringCustomer, WeekdayTotal,
};

// Timestamps serialize as RFC3339 strings, so the generated schema should say so.
#[cfg(feature = "schemars")]
pub(crate) fn datetime_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "format": "date-time",
    })
}
