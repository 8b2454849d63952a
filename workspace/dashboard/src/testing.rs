//! In-memory collaborator used by the coordinator tests.
//!
//! Every call is recorded. Responses are derived from the request so a test can
//! tell which cycle produced a committed snapshot: record titles carry the
//! year, month, search text and page, and the statistics carry the month in
//! `total_sold_items`.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use common::{
    BarSeries, CategorySlice, Endpoint, PeriodQuery, PieSeries, PriceBucket, RecordId,
    StatisticsSummary, TransactionPage, TransactionQuery, TransactionRecord,
};
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use tokio::sync::oneshot;

use crate::api::DashboardApi;
use crate::error::{FetchError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Transactions(TransactionQuery),
    Statistics(PeriodQuery),
    BarChart(PeriodQuery),
    PieChart(PeriodQuery),
}

#[derive(Default)]
pub struct ScriptedApi {
    calls: RefCell<Vec<Call>>,
    /// Transactions requests for these months wait until the sender fires
    gates: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
    /// Endpoints whose next request fails
    failures: RefCell<HashSet<Endpoint>>,
    total_pages: Cell<Option<u32>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report this page count with every transactions response.
    pub fn with_total_pages(self, total_pages: u32) -> Self {
        self.total_pages.set(Some(total_pages));
        self
    }

    /// Hold the next transactions request for `month` until the returned sender fires.
    pub fn hold_month(&self, month: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(month, rx);
        tx
    }

    pub fn fail_next(&self, endpoint: Endpoint) {
        self.failures.borrow_mut().insert(endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn transaction_queries(&self) -> Vec<TransactionQuery> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Transactions(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    fn take_failure(&self, endpoint: Endpoint) -> Result<()> {
        if self.failures.borrow_mut().remove(&endpoint) {
            return Err(FetchError::Status {
                endpoint,
                status: 500,
            });
        }
        Ok(())
    }

    /// Title used for the records of a transactions response.
    pub fn title_for(query: &TransactionQuery, index: usize) -> String {
        format!(
            "{}-{}-{}-p{}-#{}",
            query.year, query.month, query.search, query.page, index
        )
    }
}

#[async_trait(?Send)]
impl DashboardApi for ScriptedApi {
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage> {
        self.calls.borrow_mut().push(Call::Transactions(query.clone()));
        let gate = self.gates.borrow_mut().remove(&query.month);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.take_failure(Endpoint::Transactions)?;

        let transactions = (0..2)
            .map(|index| TransactionRecord {
                id: RecordId::Numeric(index as i64 + 1),
                title: Self::title_for(query, index),
                price: Decimal::new(1999, 2),
                description: String::new(),
                category: "electronics".to_string(),
                sold: index % 2 == 0,
                date_of_sale: Utc
                    .with_ymd_and_hms(query.year, query.month.clamp(1, 12), 1, 12, 0, 0)
                    .unwrap(),
            })
            .collect();

        Ok(TransactionPage {
            transactions,
            page: Some(query.page),
            per_page: Some(query.per_page),
            total_count: None,
            total_pages: self.total_pages.get(),
        })
    }

    async fn fetch_statistics(&self, period: &PeriodQuery) -> Result<StatisticsSummary> {
        self.calls.borrow_mut().push(Call::Statistics(*period));
        self.take_failure(Endpoint::Statistics)?;
        Ok(StatisticsSummary {
            total_sale_amount: Decimal::new(100, 0),
            total_sold_items: u64::from(period.month),
            total_not_sold_items: 1,
        })
    }

    async fn fetch_bar_chart(&self, period: &PeriodQuery) -> Result<BarSeries> {
        self.calls.borrow_mut().push(Call::BarChart(*period));
        self.take_failure(Endpoint::BarChart)?;
        Ok(BarSeries {
            buckets: vec![PriceBucket {
                range: "0-100".to_string(),
                count: u64::from(period.month),
            }],
        })
    }

    async fn fetch_pie_chart(&self, period: &PeriodQuery) -> Result<PieSeries> {
        self.calls.borrow_mut().push(Call::PieChart(*period));
        self.take_failure(Endpoint::PieChart)?;
        Ok(PieSeries {
            slices: vec![CategorySlice {
                category: "electronics".to_string(),
                count: u64::from(period.month),
            }],
        })
    }
}
