use crate::{
    Map, Set,
    pipeline::{Pair, group_by},
};
use sli_core::models::{CustomerTotal, RecurringCustomer};
use time::Date;

/// The `top` customers by total revenue, descending.
///
/// Fewer than `top` customers returns them all.
pub(crate) fn top_customers(pairs: &[Pair<'_>], top: usize) -> Vec<CustomerTotal> {
    let groups = group_by(pairs, |_, document| document.customer.as_str());

    let mut totals: Vec<CustomerTotal> = groups
        .into_iter()
        .map(|(customer, stats)| CustomerTotal {
            customer: customer.to_string(),
            total_revenue: stats.total_revenue,
            document_count: stats.document_count(),
        })
        .collect();
    totals.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    totals.truncate(top);
    totals
}

#[derive(Default)]
struct Recurrence {
    dates: Set<Date>,
    revenue: f64,
}

/// Customers with at least `min_purchases` distinct purchase dates in the
/// window, by total revenue descending.
///
/// Purchases count by calendar date, not timestamp: two documents issued on
/// the same day are one purchase date.
pub(crate) fn recurring_customers(
    pairs: &[Pair<'_>],
    min_purchases: usize,
) -> Vec<RecurringCustomer> {
    let mut groups: Map<&str, Recurrence> = Map::default();
    for (line, document) in pairs {
        let entry = groups.entry(document.customer.as_str()).or_default();
        entry.dates.insert(document.issued_at.date());
        entry.revenue += line.line_amount();
    }

    let mut recurring: Vec<RecurringCustomer> = groups
        .into_iter()
        .filter(|(_, recurrence)| recurrence.dates.len() >= min_purchases)
        .map(|(customer, recurrence)| RecurringCustomer {
            customer: customer.to_string(),
            distinct_purchases: recurrence.dates.len(),
            total_revenue: recurrence.revenue,
        })
        .collect();
    recurring.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    recurring
}
