use clap::{Args, Parser};
use sli_core::models::ReportConfig;
use sli_engine::{ReportEngine, io::RawLedger};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments: which report to run, where the ledger comes from
// and the results go, and any overrides to the catalogue defaults.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// The report to run
    #[arg(value_enum)]
    pub report: Report,

    #[command(flatten)]
    pub io: IOArgs,

    #[command(flatten)]
    pub overrides: Overrides,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        let input = self.io.read()?;
        let ledger = serde_json::from_reader::<_, RawLedger>(input)?.prepare()?;

        // The only place the wall clock is read; everything downstream takes
        // the reference time as an argument.
        let now = self.overrides.now.unwrap_or_else(OffsetDateTime::now_utc);
        let engine = ReportEngine::new(ledger, self.overrides.config());

        let results = self.report.run(&engine, now).await?;
        let output = self.io.write()?;
        serde_json::to_writer_pretty(output, &results)?;

        Ok(())
    }
}

// Flag-level overrides of the catalogue defaults. Each flag adjusts every
// field it plausibly names, so `--months 3` tightens whichever lookback
// window the selected report uses.
#[derive(Args)]
pub struct Overrides {
    /// The reference time for lookback windows, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_rfc3339)]
    pub now: Option<OffsetDateTime>,

    /// Override the lookback window of time-filtered reports, in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Override how many entries the top-N reports return
    #[arg(long)]
    pub top: Option<usize>,

    /// Override the distinct-purchase threshold for recurring customers
    #[arg(long)]
    pub min_purchases: Option<usize>,
}

impl Overrides {
    pub fn config(&self) -> ReportConfig {
        let mut config = ReportConfig::default();
        if let Some(months) = self.months {
            config.trend_months = months;
            config.champion_months = months;
            config.decline_months = months;
            config.recurrence_months = months;
        }
        if let Some(top) = self.top {
            config.top_customers = top;
            config.document_summaries = top;
            config.declining_products = top;
        }
        if let Some(min_purchases) = self.min_purchases {
            config.min_recurring_purchases = min_purchases;
        }
        config
    }
}

fn parse_rfc3339(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}
