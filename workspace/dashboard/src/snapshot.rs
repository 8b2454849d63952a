use common::{BarSeries, PieSeries, StatisticsSummary, TransactionPage};

use crate::filter::FilterState;

/// The four results of one refresh cycle, committed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Sequence number of the cycle that produced this snapshot
    pub cycle: u64,
    /// Selection the data was requested for
    pub filter: FilterState,
    pub transactions: TransactionPage,
    pub statistics: StatisticsSummary,
    pub bar_chart: BarSeries,
    pub pie_chart: PieSeries,
}

impl Snapshot {
    pub fn total_pages(&self) -> Option<u32> {
        self.transactions.total_pages()
    }
}
