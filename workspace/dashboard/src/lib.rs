//! Client-side coordinator for the transactions dashboard.
//!
//! [`FilterFetchCoordinator`] owns the year/month/search/page selection and the
//! last committed [`Snapshot`]. Any change to the selection triggers a refresh
//! cycle that requests the transactions page, the statistics, the bar chart and
//! the pie chart concurrently from a [`DashboardApi`] and commits all four
//! together. Cycles carry a monotonic sequence number; results of a cycle that
//! was superseded by a later one are dropped.
//!
//! The [`views`] module turns a snapshot into display-ready values for the
//! table, statistics, charts and pager.

pub mod api;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod snapshot;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::DashboardApi;
pub use coordinator::{
    CycleFailure, CycleOutcome, DashboardState, FailurePolicy, FilterFetchCoordinator, Phase,
    RefreshCycle, Status, Subscription,
};
pub use error::{FetchError, Result};
pub use filter::FilterState;
pub use snapshot::Snapshot;
