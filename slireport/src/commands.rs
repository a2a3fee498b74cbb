use clap::ValueEnum;
use serde_json::{Map, Value, to_value};
use sli_engine::{Ledger, ReportEngine};
use time::OffsetDateTime;

// The report catalogue as a flag-friendly enum, plus `all` to run the whole
// catalogue in one pass.
#[derive(Clone, Copy, ValueEnum)]
pub enum Report {
    BestSellingProduct,
    BestMonth,
    MonthlyTrend,
    TopCustomers,
    DocumentSummaries,
    BestProductPerMonth,
    SalesByWeekday,
    Averages,
    DecliningProducts,
    RecurringCustomers,
    All,
}

impl Report {
    pub async fn run(
        &self,
        engine: &ReportEngine<Ledger>,
        now: OffsetDateTime,
    ) -> anyhow::Result<Value> {
        Ok(match self {
            Report::BestSellingProduct => to_value(engine.best_selling_product().await?)?,
            Report::BestMonth => to_value(engine.best_month().await?)?,
            Report::MonthlyTrend => to_value(engine.monthly_trend(now).await?)?,
            Report::TopCustomers => to_value(engine.top_customers().await?)?,
            Report::DocumentSummaries => to_value(engine.document_summaries().await?)?,
            Report::BestProductPerMonth => to_value(engine.best_product_per_month(now).await?)?,
            Report::SalesByWeekday => to_value(engine.sales_by_weekday().await?)?,
            Report::Averages => to_value(engine.averages().await?)?,
            Report::DecliningProducts => to_value(engine.declining_products(now).await?)?,
            Report::RecurringCustomers => to_value(engine.recurring_customers(now).await?)?,
            Report::All => {
                let mut catalogue = Map::new();
                catalogue.insert(
                    "best_selling_product".into(),
                    to_value(engine.best_selling_product().await?)?,
                );
                catalogue.insert("best_month".into(), to_value(engine.best_month().await?)?);
                catalogue.insert(
                    "monthly_trend".into(),
                    to_value(engine.monthly_trend(now).await?)?,
                );
                catalogue.insert(
                    "top_customers".into(),
                    to_value(engine.top_customers().await?)?,
                );
                catalogue.insert(
                    "document_summaries".into(),
                    to_value(engine.document_summaries().await?)?,
                );
                catalogue.insert(
                    "best_product_per_month".into(),
                    to_value(engine.best_product_per_month(now).await?)?,
                );
                catalogue.insert(
                    "sales_by_weekday".into(),
                    to_value(engine.sales_by_weekday().await?)?,
                );
                catalogue.insert("averages".into(), to_value(engine.averages().await?)?);
                catalogue.insert(
                    "declining_products".into(),
                    to_value(engine.declining_products(now).await?)?,
                );
                catalogue.insert(
                    "recurring_customers".into(),
                    to_value(engine.recurring_customers(now).await?)?,
                );
                Value::Object(catalogue)
            }
        })
    }
}
