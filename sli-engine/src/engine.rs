use crate::{pipeline, reports};
use sli_core::{
    models::{
        Averages, CustomerTotal, DocumentSummary, LineItem, MonthTotal, ProductDecline,
        ProductTotal, RecurringCustomer, ReportConfig, SalesDocument, WeekdayTotal,
        lookback_start,
    },
    ports::RecordSource,
};
use time::OffsetDateTime;

/// The report catalogue, evaluated over a [`RecordSource`].
///
/// Each method fetches the records it needs, joins line items to their
/// documents, and reduces the result. The fetch is the only asynchronous
/// step and the only one that can fail; store errors surface unchanged.
/// Everything after it is pure computation over the materialized snapshot,
/// so dropping a returned future before its fetch resolves cancels cleanly.
///
/// Time-filtered reports take the reference time as an argument rather than
/// reading a clock, keeping results reproducible.
#[derive(Debug, Clone)]
pub struct ReportEngine<S> {
    source: S,
    config: ReportConfig,
}

impl<S> ReportEngine<S> {
    /// Wrap a record source with the given catalogue configuration.
    pub fn new(source: S, config: ReportConfig) -> Self {
        Self { source, config }
    }

    /// The catalogue configuration in effect.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}

impl<S: RecordSource> ReportEngine<S> {
    async fn fetch(
        &self,
        issued_since: Option<OffsetDateTime>,
    ) -> Result<(Vec<SalesDocument>, Vec<LineItem>), S::Error> {
        let documents = self.source.documents(issued_since).await?;
        let line_items = self.source.line_items(issued_since).await?;
        tracing::debug!(
            documents = documents.len(),
            line_items = line_items.len(),
            "records fetched"
        );
        Ok((documents, line_items))
    }

    /// The product with the highest total quantity sold, or `None` when the
    /// ledger has no joined line items.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn best_selling_product(&self) -> Result<Option<ProductTotal>, S::Error> {
        let (documents, line_items) = self.fetch(None).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::best_selling_product(&pairs))
    }

    /// The calendar month with the highest revenue, or `None` when the
    /// ledger has no joined line items.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn best_month(&self) -> Result<Option<MonthTotal>, S::Error> {
        let (documents, line_items) = self.fetch(None).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::best_month(&pairs))
    }

    /// Revenue per month over the last [`trend_months`] months, in
    /// chronological order.
    ///
    /// [`trend_months`]: ReportConfig::trend_months
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn monthly_trend(&self, now: OffsetDateTime) -> Result<Vec<MonthTotal>, S::Error> {
        let since = lookback_start(now, self.config.trend_months);
        let (documents, line_items) = self.fetch(Some(since)).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::monthly_trend(&pairs))
    }

    /// The [`top_customers`] customers by revenue, descending.
    ///
    /// [`top_customers`]: ReportConfig::top_customers
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn top_customers(&self) -> Result<Vec<CustomerTotal>, S::Error> {
        let (documents, line_items) = self.fetch(None).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::top_customers(&pairs, self.config.top_customers))
    }

    /// The [`document_summaries`] most valuable documents, descending.
    ///
    /// Every document participates, including those without line items.
    ///
    /// [`document_summaries`]: ReportConfig::document_summaries
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn document_summaries(&self) -> Result<Vec<DocumentSummary>, S::Error> {
        let (documents, line_items) = self.fetch(None).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::document_summaries(
            &documents,
            &pairs,
            self.config.document_summaries,
        ))
    }

    /// For each month in the last [`champion_months`] months, the product
    /// with the highest quantity sold.
    ///
    /// [`champion_months`]: ReportConfig::champion_months
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn best_product_per_month(
        &self,
        now: OffsetDateTime,
    ) -> Result<Vec<ProductTotal>, S::Error> {
        let since = lookback_start(now, self.config.champion_months);
        let (documents, line_items) = self.fetch(Some(since)).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::best_product_per_month(&pairs))
    }

    /// Revenue and document count per day of the week.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn sales_by_weekday(&self) -> Result<Vec<WeekdayTotal>, S::Error> {
        let (documents, line_items) = self.fetch(None).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::sales_by_weekday(&pairs))
    }

    /// Mean line count and mean value per document, over all documents.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn averages(&self) -> Result<Averages, S::Error> {
        let (documents, line_items) = self.fetch(None).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::averages(&documents, &pairs))
    }

    /// The [`declining_products`] products whose monthly quantities over the
    /// last [`decline_months`] months trend down most steeply.
    ///
    /// Products with fewer than two in-window months are excluded, since a
    /// single point has no trend.
    ///
    /// [`declining_products`]: ReportConfig::declining_products
    /// [`decline_months`]: ReportConfig::decline_months
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn declining_products(
        &self,
        now: OffsetDateTime,
    ) -> Result<Vec<ProductDecline>, S::Error> {
        let since = lookback_start(now, self.config.decline_months);
        let (documents, line_items) = self.fetch(Some(since)).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::declining_products(
            &pairs,
            self.config.declining_products,
        ))
    }

    /// Customers with at least [`min_recurring_purchases`] distinct purchase
    /// dates in the last [`recurrence_months`] months, by revenue descending.
    ///
    /// [`min_recurring_purchases`]: ReportConfig::min_recurring_purchases
    /// [`recurrence_months`]: ReportConfig::recurrence_months
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn recurring_customers(
        &self,
        now: OffsetDateTime,
    ) -> Result<Vec<RecurringCustomer>, S::Error> {
        let since = lookback_start(now, self.config.recurrence_months);
        let (documents, line_items) = self.fetch(Some(since)).await?;
        let pairs = pipeline::join(&line_items, &documents);
        Ok(reports::recurring_customers(
            &pairs,
            self.config.min_recurring_purchases,
        ))
    }
}
