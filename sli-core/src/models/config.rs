/// Tunable parameters of the report catalogue.
///
/// Every field has a default matching the catalogue definition, so hosts can
/// deserialize a partial configuration and rely on the rest.
///
/// # Examples
///
/// ```
/// use sli_core::models::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.trend_months, 12);
/// assert_eq!(config.top_customers, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportConfig {
    /// Lookback window of the monthly trend report, in months
    #[cfg_attr(feature = "serde", serde(default = "default_trend_months"))]
    pub trend_months: u32,

    /// How many customers the top-customers report returns
    #[cfg_attr(feature = "serde", serde(default = "default_top_customers"))]
    pub top_customers: usize,

    /// How many documents the document-summaries report returns
    #[cfg_attr(feature = "serde", serde(default = "default_document_summaries"))]
    pub document_summaries: usize,

    /// Lookback window of the best-product-per-month report, in months
    #[cfg_attr(feature = "serde", serde(default = "default_champion_months"))]
    pub champion_months: u32,

    /// Lookback window of the declining-products report, in months
    #[cfg_attr(feature = "serde", serde(default = "default_decline_months"))]
    pub decline_months: u32,

    /// How many products the declining-products report returns
    #[cfg_attr(feature = "serde", serde(default = "default_declining_products"))]
    pub declining_products: usize,

    /// Lookback window of the recurring-customers report, in months
    #[cfg_attr(feature = "serde", serde(default = "default_recurrence_months"))]
    pub recurrence_months: u32,

    /// Minimum distinct purchase dates for a customer to count as recurring
    #[cfg_attr(feature = "serde", serde(default = "default_min_recurring_purchases"))]
    pub min_recurring_purchases: usize,
}

fn default_trend_months() -> u32 {
    12
}

fn default_top_customers() -> usize {
    10
}

fn default_document_summaries() -> usize {
    10
}

fn default_champion_months() -> u32 {
    6
}

fn default_decline_months() -> u32 {
    6
}

fn default_declining_products() -> usize {
    5
}

fn default_recurrence_months() -> u32 {
    12
}

fn default_min_recurring_purchases() -> usize {
    3
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trend_months: default_trend_months(),
            top_customers: default_top_customers(),
            document_summaries: default_document_summaries(),
            champion_months: default_champion_months(),
            decline_months: default_decline_months(),
            declining_products: default_declining_products(),
            recurrence_months: default_recurrence_months(),
            min_recurring_purchases: default_min_recurring_purchases(),
        }
    }
}
