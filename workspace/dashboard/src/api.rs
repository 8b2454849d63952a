use async_trait::async_trait;
use common::{BarSeries, PeriodQuery, PieSeries, StatisticsSummary, TransactionPage, TransactionQuery};

use crate::error::Result;

/// Read-only client of the collaborator API.
///
/// Futures are not required to be `Send`: the browser client is single-threaded
/// and the coordinator never moves work across threads.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// One page of records matching year, month and search text.
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage>;

    async fn fetch_statistics(&self, period: &PeriodQuery) -> Result<StatisticsSummary>;

    async fn fetch_bar_chart(&self, period: &PeriodQuery) -> Result<BarSeries>;

    async fn fetch_pie_chart(&self, period: &PeriodQuery) -> Result<PieSeries>;
}
