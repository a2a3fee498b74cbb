use crate::pipeline::{Pair, group_by};
use sli_core::models::{WeekdayTotal, weekday_label};

/// Revenue and document count per day of the week.
///
/// Only weekdays with at least one sale appear, in first-occurrence order.
/// The label mapping uses the 0 = Sunday convention.
pub(crate) fn sales_by_weekday(pairs: &[Pair<'_>]) -> Vec<WeekdayTotal> {
    let groups = group_by(pairs, |_, document| {
        document.issued_at.weekday().number_days_from_sunday()
    });

    groups
        .into_iter()
        .map(|(index, stats)| WeekdayTotal {
            weekday: weekday_label(index).to_string(),
            total_revenue: stats.total_revenue,
            document_count: stats.document_count(),
        })
        .collect()
}
