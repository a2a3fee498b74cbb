//! The report catalogue.
//!
//! Each function here is one pipeline instance: a grouping key, a metric to
//! order by, and an optional limit. All of them are pure functions over an
//! already-joined snapshot; time filtering happens upstream at the fetch.

mod customers;
mod documents;
mod months;
mod products;
mod weekdays;

pub(crate) use customers::{recurring_customers, top_customers};
pub(crate) use documents::{averages, document_summaries};
pub(crate) use months::{best_month, monthly_trend};
pub(crate) use products::{best_product_per_month, best_selling_product, declining_products};
pub(crate) use weekdays::sales_by_weekday;
