use crate::{
    Map,
    pipeline::{Pair, group_by},
    trend::ols_slope,
};
use indexmap::map::Entry;
use sli_core::models::{ProductDecline, ProductTotal, YearMonth};

/// The product with the highest total quantity sold, if any line items exist.
///
/// Ties in quantity resolve to the product seen first.
pub(crate) fn best_selling_product(pairs: &[Pair<'_>]) -> Option<ProductTotal> {
    let groups = group_by(pairs, |line, _| line.product.as_str());

    let mut totals: Vec<ProductTotal> = groups
        .into_iter()
        .map(|(product, stats)| ProductTotal {
            product: product.to_string(),
            total_quantity: stats.total_quantity,
            total_revenue: stats.total_revenue,
        })
        .collect();
    totals.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    totals.into_iter().next()
}

/// For each month in the window, the product with the highest quantity.
///
/// Months come out in first-occurrence order; within a month, a quantity tie
/// goes to the product seen first.
pub(crate) fn best_product_per_month(pairs: &[Pair<'_>]) -> Vec<ProductTotal> {
    let groups = group_by(pairs, |line, document| {
        (YearMonth::from(document.issued_at), line.product.as_str())
    });

    let mut champions: Map<YearMonth, ProductTotal> = Map::default();
    for ((month, product), stats) in groups {
        let candidate = ProductTotal {
            product: product.to_string(),
            total_quantity: stats.total_quantity,
            total_revenue: stats.total_revenue,
        };
        match champions.entry(month) {
            Entry::Occupied(mut entry) => {
                if candidate.total_quantity > entry.get().total_quantity {
                    entry.insert(candidate);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
        }
    }

    champions.into_values().collect()
}

/// Products ranked by the steepness of their monthly quantity decline.
///
/// Each product's in-window line items are grouped into a chronological
/// monthly quantity series, and the least-squares slope of that series
/// against its 0-based index is the ranking metric, ascending: the most
/// negative slope comes first. Products with fewer than two monthly points
/// have no defined trend and are excluded outright.
pub(crate) fn declining_products(pairs: &[Pair<'_>], top: usize) -> Vec<ProductDecline> {
    let monthly = group_by(pairs, |line, document| {
        (line.product.as_str(), YearMonth::from(document.issued_at))
    });

    let mut series_by_product: Map<&str, Vec<(YearMonth, u64)>> = Map::default();
    for ((product, month), stats) in monthly {
        series_by_product
            .entry(product)
            .or_default()
            .push((month, stats.total_quantity));
    }

    let mut declines: Vec<ProductDecline> = series_by_product
        .into_iter()
        .filter_map(|(product, mut series)| {
            series.sort_by_key(|(month, _)| *month);
            let quantities: Vec<f64> = series
                .iter()
                .map(|(_, quantity)| *quantity as f64)
                .collect();
            // None below two points: no trend to speak of
            ols_slope(&quantities).map(|slope| ProductDecline {
                product: product.to_string(),
                slope,
                series: series.into_iter().map(|(month, _)| month).collect(),
            })
        })
        .collect();

    declines.sort_by(|a, b| a.slope.total_cmp(&b.slope));
    declines.truncate(top);
    declines
}
