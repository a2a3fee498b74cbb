use approx::assert_ulps_eq;
use rstest::*;
use rstest_reuse::{self, *};
use sli_core::models::{LineItem, ReportConfig, SalesDocument, YearMonth};
use sli_engine::{Ledger, ReportEngine, io::RawLedger};
use time::macros::datetime;

// The shared fixture: ten documents across six months of 2024, three
// products, four customers, one document without any line items. All prices
// are exact binary fractions so revenue sums are exact.
//
// Per-product totals: alpha 13 units / 130.0, beta 12 / 60.0, gamma 14 / 35.0.
// Per-month revenue: Jan 25, Feb 30, Mar 50, Apr 65, May 35, Jun 20.
// Per-customer revenue: Globex 85, Initech 80, Umbrella 60.

fn document(id: i64, issued_at: time::OffsetDateTime, customer: &str) -> SalesDocument {
    SalesDocument {
        id: id.into(),
        issued_at,
        customer: customer.into(),
    }
}

fn line(product: &str, unit_price: f64, quantity: u32, document_id: i64) -> LineItem {
    LineItem {
        product: product.into(),
        unit_price,
        quantity,
        document_id: document_id.into(),
    }
}

#[fixture]
fn sales_ledger() -> Ledger {
    Ledger::new(
        vec![
            document(1, datetime!(2024-01-10 10:00:00 UTC), "Globex"),
            document(2, datetime!(2024-02-14 10:00:00 UTC), "Initech"),
            document(3, datetime!(2024-03-05 10:00:00 UTC), "Globex"),
            document(4, datetime!(2024-03-20 10:00:00 UTC), "Initech"),
            document(5, datetime!(2024-04-02 10:00:00 UTC), "Globex"),
            document(6, datetime!(2024-04-18 10:00:00 UTC), "Umbrella"),
            document(7, datetime!(2024-05-07 09:00:00 UTC), "Globex"),
            document(8, datetime!(2024-05-07 17:30:00 UTC), "Globex"),
            document(9, datetime!(2024-06-01 10:00:00 UTC), "Initech"),
            document(10, datetime!(2024-06-10 10:00:00 UTC), "Empty Cart"),
        ],
        vec![
            line("alpha", 10.0, 2, 1),
            line("beta", 5.0, 1, 1),
            line("alpha", 10.0, 3, 2),
            line("alpha", 10.0, 1, 3),
            line("gamma", 2.5, 4, 3),
            line("beta", 5.0, 6, 4),
            line("gamma", 2.5, 2, 5),
            line("alpha", 10.0, 5, 6),
            line("beta", 5.0, 2, 6),
            line("alpha", 10.0, 2, 7),
            line("beta", 5.0, 3, 8),
            line("gamma", 2.5, 8, 9),
        ],
    )
}

// The same records as a wire payload, to prove the io path and the direct
// path agree.
fn json_ledger() -> Ledger {
    let raw: RawLedger = serde_json::from_str(
        r#"{
        "documents": [
            {"id": 1, "issued_at": "2024-01-10T10:00:00Z", "customer": "Globex"},
            {"id": 2, "issued_at": "2024-02-14T10:00:00Z", "customer": "Initech"},
            {"id": 3, "issued_at": "2024-03-05T10:00:00Z", "customer": "Globex"},
            {"id": 4, "issued_at": "2024-03-20T10:00:00Z", "customer": "Initech"},
            {"id": 5, "issued_at": "2024-04-02T10:00:00Z", "customer": "Globex"},
            {"id": 6, "issued_at": "2024-04-18T10:00:00Z", "customer": "Umbrella"},
            {"id": 7, "issued_at": "2024-05-07T09:00:00Z", "customer": "Globex"},
            {"id": 8, "issued_at": "2024-05-07T17:30:00Z", "customer": "Globex"},
            {"id": 9, "issued_at": "2024-06-01T10:00:00Z", "customer": "Initech"},
            {"id": 10, "issued_at": "2024-06-10T10:00:00Z", "customer": "Empty Cart"}
        ],
        "line_items": [
            {"product": "alpha", "unit_price": 10.0, "quantity": 2, "document_id": 1},
            {"product": "beta", "unit_price": 5.0, "quantity": 1, "document_id": 1},
            {"product": "alpha", "unit_price": 10.0, "quantity": 3, "document_id": 2},
            {"product": "alpha", "unit_price": 10.0, "quantity": 1, "document_id": 3},
            {"product": "gamma", "unit_price": 2.5, "quantity": 4, "document_id": 3},
            {"product": "beta", "unit_price": 5.0, "quantity": 6, "document_id": 4},
            {"product": "gamma", "unit_price": 2.5, "quantity": 2, "document_id": 5},
            {"product": "alpha", "unit_price": 10.0, "quantity": 5, "document_id": 6},
            {"product": "beta", "unit_price": 5.0, "quantity": 2, "document_id": 6},
            {"product": "alpha", "unit_price": 10.0, "quantity": 2, "document_id": 7},
            {"product": "beta", "unit_price": 5.0, "quantity": 3, "document_id": 8},
            {"product": "gamma", "unit_price": 2.5, "quantity": 8, "document_id": 9}
        ]
    }"#,
    )
    .unwrap();
    raw.prepare().unwrap()
}

fn engine(ledger: Ledger) -> ReportEngine<Ledger> {
    ReportEngine::new(ledger, ReportConfig::default())
}

const NOW: time::OffsetDateTime = datetime!(2024-06-15 12:00:00 UTC);

fn month(year: i32, month: u8) -> YearMonth {
    YearMonth { year, month }
}

// Every report should see identical data whether the ledger was built
// directly or parsed from JSON.

#[template]
#[rstest]
#[case::direct(sales_ledger())]
#[case::from_json(json_ledger())]
fn all_ledgers(#[case] ledger: Ledger) {}

#[apply(all_ledgers)]
#[tokio::test]
async fn best_selling_product_ranks_by_quantity_not_revenue(#[case] ledger: Ledger) {
    let best = engine(ledger).best_selling_product().await.unwrap().unwrap();

    // gamma moves the most units even though alpha earns the most
    assert_eq!(best.product, "gamma");
    assert_eq!(best.total_quantity, 14);
    assert_ulps_eq!(best.total_revenue, 35.0);
}

#[apply(all_ledgers)]
#[tokio::test]
async fn best_month_ranks_by_revenue(#[case] ledger: Ledger) {
    let best = engine(ledger).best_month().await.unwrap().unwrap();

    assert_eq!(best.month, month(2024, 4));
    assert_ulps_eq!(best.total_revenue, 65.0);
    assert_eq!(best.document_count, 2);
}

#[apply(all_ledgers)]
#[tokio::test]
async fn recurring_customers_count_distinct_dates(#[case] ledger: Ledger) {
    let recurring = engine(ledger).recurring_customers(NOW).await.unwrap();

    // Globex purchased on four distinct dates (documents 7 and 8 share one),
    // Initech on three. Umbrella's single date is below the threshold.
    assert_eq!(recurring.len(), 2);
    assert_eq!(recurring[0].customer, "Globex");
    assert_eq!(recurring[0].distinct_purchases, 4);
    assert_ulps_eq!(recurring[0].total_revenue, 85.0);
    assert_eq!(recurring[1].customer, "Initech");
    assert_eq!(recurring[1].distinct_purchases, 3);
    assert_ulps_eq!(recurring[1].total_revenue, 80.0);
}

#[rstest]
#[tokio::test]
async fn monthly_trend_is_chronological_with_no_duplicate_months(sales_ledger: Ledger) {
    let trend = engine(sales_ledger).monthly_trend(NOW).await.unwrap();

    let months: Vec<YearMonth> = trend.iter().map(|total| total.month).collect();
    assert_eq!(
        months,
        vec![
            month(2024, 1),
            month(2024, 2),
            month(2024, 3),
            month(2024, 4),
            month(2024, 5),
            month(2024, 6),
        ]
    );
    assert!(months.windows(2).all(|pair| pair[0] < pair[1]));

    let revenues: Vec<f64> = trend.iter().map(|total| total.total_revenue).collect();
    for (actual, expected) in revenues.iter().zip([25.0, 30.0, 50.0, 65.0, 35.0, 20.0]) {
        assert_ulps_eq!(*actual, expected);
    }

    // March and April each have two contributing documents
    assert_eq!(trend[2].document_count, 2);
    assert_eq!(trend[3].document_count, 2);
}

#[rstest]
#[tokio::test]
async fn grouping_conserves_total_revenue(sales_ledger: Ledger) {
    // Summing any non-overlapping partition recovers the ledger total.
    let total: f64 = sales_ledger
        .line_items
        .iter()
        .map(|line| line.line_amount())
        .sum();
    assert_ulps_eq!(total, 225.0);

    let engine = engine(sales_ledger);

    let by_month: f64 = engine
        .monthly_trend(NOW)
        .await
        .unwrap()
        .iter()
        .map(|total| total.total_revenue)
        .sum();
    assert_ulps_eq!(by_month, total);

    let by_customer: f64 = engine
        .top_customers()
        .await
        .unwrap()
        .iter()
        .map(|total| total.total_revenue)
        .sum();
    assert_ulps_eq!(by_customer, total);
}

#[rstest]
#[tokio::test]
async fn top_customers_orders_by_revenue_and_returns_what_exists(sales_ledger: Ledger) {
    let customers = engine(sales_ledger).top_customers().await.unwrap();

    // Only three customers have sales; the limit of ten is not padded.
    assert_eq!(customers.len(), 3);
    assert_eq!(customers[0].customer, "Globex");
    assert_ulps_eq!(customers[0].total_revenue, 85.0);
    assert_eq!(customers[0].document_count, 5);
    assert_eq!(customers[1].customer, "Initech");
    assert_eq!(customers[1].document_count, 3);
    assert_eq!(customers[2].customer, "Umbrella");
    assert_eq!(customers[2].document_count, 1);
}

#[rstest]
#[tokio::test]
async fn top_customers_honors_a_tighter_limit(sales_ledger: Ledger) {
    let engine = ReportEngine::new(
        sales_ledger,
        ReportConfig {
            top_customers: 2,
            ..Default::default()
        },
    );

    let customers = engine.top_customers().await.unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer, "Globex");
    assert_eq!(customers[1].customer, "Initech");
}

#[rstest]
#[tokio::test]
async fn document_summaries_include_lineless_documents(sales_ledger: Ledger) {
    let summaries = engine(sales_ledger).document_summaries().await.unwrap();

    assert_eq!(summaries.len(), 10);
    assert_eq!(summaries[0].document, "6");
    assert_ulps_eq!(summaries[0].total, 60.0);
    assert_eq!(summaries[0].line_count, 2);

    // Equal totals keep document order: 2 before 4 at 30.0 each.
    assert_eq!(summaries[1].document, "2");
    assert_eq!(summaries[2].document, "4");

    // The document with no line items still appears, at zero.
    let last = summaries.last().unwrap();
    assert_eq!(last.document, "10");
    assert_eq!(last.line_count, 0);
    assert_ulps_eq!(last.total, 0.0);
}

#[rstest]
#[tokio::test]
async fn best_product_per_month_picks_the_quantity_champion(sales_ledger: Ledger) {
    let champions = engine(sales_ledger).best_product_per_month(NOW).await.unwrap();

    // The six month window starts 2024-01-15, so January's sales are out.
    let expected = [
        ("alpha", 3),
        ("beta", 6),
        ("alpha", 5),
        ("beta", 3),
        ("gamma", 8),
    ];
    assert_eq!(champions.len(), expected.len());
    for (champion, (product, quantity)) in champions.iter().zip(expected) {
        assert_eq!(champion.product, product);
        assert_eq!(champion.total_quantity, quantity);
    }
}

#[rstest]
#[tokio::test]
async fn sales_by_weekday_counts_documents_distinctly(sales_ledger: Ledger) {
    let weekdays = engine(sales_ledger).sales_by_weekday().await.unwrap();

    let labels: Vec<&str> = weekdays
        .iter()
        .map(|total| total.weekday.as_str())
        .collect();
    assert_eq!(labels, vec!["Wednesday", "Tuesday", "Thursday", "Saturday"]);

    // Four Tuesday documents despite two sharing a calendar date.
    let tuesday = &weekdays[1];
    assert_eq!(tuesday.document_count, 4);
    assert_ulps_eq!(tuesday.total_revenue, 60.0);

    let wednesday = &weekdays[0];
    assert_eq!(wednesday.document_count, 3);
    assert_ulps_eq!(wednesday.total_revenue, 85.0);
}

#[rstest]
#[tokio::test]
async fn averages_span_all_documents_including_lineless_ones(sales_ledger: Ledger) {
    let averages = engine(sales_ledger).averages().await.unwrap();

    // 12 line items over 10 documents, 225.0 over 10 documents.
    assert_ulps_eq!(averages.lines_per_document, 1.2);
    assert_ulps_eq!(averages.document_value, 22.5);
}

#[rstest]
#[tokio::test]
async fn declining_products_rank_steepest_decline_first(sales_ledger: Ledger) {
    let declining = engine(sales_ledger).declining_products(NOW).await.unwrap();

    assert_eq!(declining.len(), 3);

    // beta's in-window quantities 6, 2, 3 fall fastest
    assert_eq!(declining[0].product, "beta");
    assert_ulps_eq!(declining[0].slope, -1.5);
    assert_eq!(
        declining[0].series,
        vec![month(2024, 3), month(2024, 4), month(2024, 5)]
    );

    // alpha drifts slightly upward, gamma clearly upward
    assert_eq!(declining[1].product, "alpha");
    assert_ulps_eq!(declining[1].slope, 0.1);
    assert_eq!(declining[2].product, "gamma");
    assert_ulps_eq!(declining[2].slope, 2.0);
    assert_eq!(
        declining[2].series,
        vec![month(2024, 3), month(2024, 4), month(2024, 6)]
    );
}

#[rstest]
#[tokio::test]
async fn a_tighter_trend_window_drops_older_months(sales_ledger: Ledger) {
    let engine = ReportEngine::new(
        sales_ledger,
        ReportConfig {
            trend_months: 3,
            ..Default::default()
        },
    );

    // Window starts 2024-04-15: document 5 (April 2) is out, so April only
    // counts the Umbrella sale.
    let trend = engine.monthly_trend(NOW).await.unwrap();
    let months: Vec<YearMonth> = trend.iter().map(|total| total.month).collect();
    assert_eq!(months, vec![month(2024, 4), month(2024, 5), month(2024, 6)]);
    assert_ulps_eq!(trend[0].total_revenue, 60.0);
    assert_eq!(trend[0].document_count, 1);
}

#[tokio::test]
async fn declining_products_exclude_single_month_series() {
    let ledger = Ledger::new(
        vec![
            document(1, datetime!(2024-05-01 10:00:00 UTC), "A"),
            document(2, datetime!(2024-06-01 10:00:00 UTC), "A"),
        ],
        vec![
            line("fading", 1.0, 10, 1),
            line("fading", 1.0, 4, 2),
            // one month of data, however big, has no trend
            line("one-hit", 1.0, 100, 2),
        ],
    );

    let declining = engine(ledger).declining_products(NOW).await.unwrap();
    assert_eq!(declining.len(), 1);
    assert_eq!(declining[0].product, "fading");
    assert_eq!(declining[0].slope, -6.0);
}

#[tokio::test]
async fn slope_of_a_perfectly_linear_series_is_exact() {
    let documents = vec![
        document(1, datetime!(2024-01-05 10:00:00 UTC), "A"),
        document(2, datetime!(2024-02-05 10:00:00 UTC), "A"),
        document(3, datetime!(2024-03-05 10:00:00 UTC), "A"),
        document(4, datetime!(2024-04-05 10:00:00 UTC), "A"),
    ];
    let line_items = vec![
        line("steady-fall", 1.0, 10, 1),
        line("steady-fall", 1.0, 8, 2),
        line("steady-fall", 1.0, 6, 3),
        line("steady-fall", 1.0, 4, 4),
    ];

    let engine = engine(Ledger::new(documents, line_items));
    let declining = engine
        .declining_products(datetime!(2024-04-15 12:00:00 UTC))
        .await
        .unwrap();

    assert_eq!(declining.len(), 1);
    assert_eq!(declining[0].slope, -2.0);
}

#[tokio::test]
async fn recurrence_threshold_excludes_sparse_customers() {
    // "twice" buys big on two distinct dates (two documents share a date),
    // "thrice" buys small on three.
    let ledger = Ledger::new(
        vec![
            document(1, datetime!(2024-03-01 09:00:00 UTC), "twice"),
            document(2, datetime!(2024-04-01 09:00:00 UTC), "twice"),
            document(3, datetime!(2024-04-01 18:00:00 UTC), "twice"),
            document(4, datetime!(2024-03-01 09:00:00 UTC), "thrice"),
            document(5, datetime!(2024-04-01 09:00:00 UTC), "thrice"),
            document(6, datetime!(2024-05-01 09:00:00 UTC), "thrice"),
        ],
        vec![
            line("widget", 100.0, 1, 1),
            line("widget", 100.0, 1, 2),
            line("widget", 100.0, 1, 3),
            line("widget", 1.0, 1, 4),
            line("widget", 1.0, 1, 5),
            line("widget", 1.0, 1, 6),
        ],
    );

    let recurring = engine(ledger).recurring_customers(NOW).await.unwrap();
    assert_eq!(recurring.len(), 1);
    assert_eq!(recurring[0].customer, "thrice");
    assert_eq!(recurring[0].distinct_purchases, 3);
    assert_ulps_eq!(recurring[0].total_revenue, 3.0);
}

#[tokio::test]
async fn averages_of_one_document_with_three_lines() {
    let ledger = Ledger::new(
        vec![document(1, datetime!(2024-06-01 10:00:00 UTC), "A")],
        vec![
            line("x", 10.0, 1, 1),
            line("y", 10.0, 1, 1),
            line("z", 10.0, 1, 1),
        ],
    );

    let averages = engine(ledger).averages().await.unwrap();
    assert_eq!(averages.lines_per_document, 3.0);
    assert_eq!(averages.document_value, 30.0);
}

#[tokio::test]
async fn an_empty_ledger_yields_empty_reports_not_errors() {
    let engine = engine(Ledger::default());

    assert_eq!(engine.best_selling_product().await.unwrap(), None);
    assert_eq!(engine.best_month().await.unwrap(), None);
    assert!(engine.monthly_trend(NOW).await.unwrap().is_empty());
    assert!(engine.top_customers().await.unwrap().is_empty());
    assert!(engine.document_summaries().await.unwrap().is_empty());
    assert!(engine.best_product_per_month(NOW).await.unwrap().is_empty());
    assert!(engine.sales_by_weekday().await.unwrap().is_empty());
    assert!(engine.declining_products(NOW).await.unwrap().is_empty());
    assert!(engine.recurring_customers(NOW).await.unwrap().is_empty());

    let averages = engine.averages().await.unwrap();
    assert_eq!(averages.lines_per_document, 0.0);
    assert_eq!(averages.document_value, 0.0);
}
