use crate::pipeline::{Pair, group_by};
use sli_core::models::{MonthTotal, YearMonth};

fn month_totals(pairs: &[Pair<'_>]) -> Vec<MonthTotal> {
    group_by(pairs, |_, document| YearMonth::from(document.issued_at))
        .into_iter()
        .map(|(month, stats)| MonthTotal {
            month,
            total_revenue: stats.total_revenue,
            document_count: stats.document_count(),
        })
        .collect()
}

/// The calendar month with the highest total revenue, if any sales exist.
pub(crate) fn best_month(pairs: &[Pair<'_>]) -> Option<MonthTotal> {
    let mut totals = month_totals(pairs);
    totals.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    totals.into_iter().next()
}

/// Revenue and document count per month, chronologically ascending.
///
/// Grouping guarantees one entry per distinct month; the sort makes the
/// series strictly increasing in (year, month).
pub(crate) fn monthly_trend(pairs: &[Pair<'_>]) -> Vec<MonthTotal> {
    let mut totals = month_totals(pairs);
    totals.sort_by_key(|total| total.month);
    totals
}
