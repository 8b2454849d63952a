use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, error, info, trace};

use crate::api::DashboardApi;
use crate::error::FetchError;
use crate::filter::FilterState;
use crate::snapshot::Snapshot;

/// Whether a refresh cycle is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
}

/// What happens to the error of a failed cycle once it has been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep the previous snapshot and expose the error in `DashboardState::last_error`.
    #[default]
    ReportAndKeepStale,
    /// Keep the previous snapshot and only log the error.
    KeepStaleSilently,
}

/// Summary of what the rendering layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing fetched yet and nothing in flight
    Empty,
    Loading,
    Ready,
    /// Latest cycle failed; the snapshot on display is from an earlier cycle
    Stale,
    /// Latest cycle failed and there is no earlier snapshot
    Failed,
}

/// A failed cycle as remembered by the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleFailure {
    pub cycle: u64,
    pub error: FetchError,
}

/// Immutable view of the coordinator handed to observers and views.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub filter: FilterState,
    pub phase: Phase,
    pub snapshot: Option<Rc<Snapshot>>,
    pub last_error: Option<CycleFailure>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn status(&self) -> Status {
        if self.is_loading() {
            return Status::Loading;
        }
        match (&self.snapshot, &self.last_error) {
            (None, None) => Status::Empty,
            (None, Some(_)) => Status::Failed,
            (Some(_), Some(_)) => Status::Stale,
            (Some(_), None) => Status::Ready,
        }
    }

    /// Page count reported for the current selection.
    ///
    /// `None` when the committed snapshot belongs to a different selection or the
    /// API did not report totals.
    pub fn total_pages(&self) -> Option<u32> {
        self.snapshot
            .as_ref()
            .filter(|snapshot| snapshot.filter.same_selection(&self.filter))
            .and_then(|snapshot| snapshot.total_pages())
    }

    pub fn can_go_prev(&self) -> bool {
        self.filter.page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        match self.total_pages() {
            Some(total_pages) => self.filter.page() < total_pages,
            None => true,
        }
    }
}

/// How a refresh cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// All four results were stored as the new snapshot
    Committed { cycle: u64 },
    /// One of the requests failed; the previous snapshot stays in place
    Failed { cycle: u64, error: FetchError },
    /// A later cycle was triggered first; the result was dropped unseen
    Superseded { cycle: u64, latest: u64 },
}

type Listener = Rc<dyn Fn(&DashboardState)>;

struct Shared {
    state: DashboardState,
    latest_cycle: u64,
    policy: FailurePolicy,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Owns the filter selection and the last committed snapshot, and runs refresh cycles.
///
/// Every mutation is applied immediately and, when it changed the selection,
/// returns a [`RefreshCycle`] that the caller drives to completion on its
/// executor. Each cycle captures a sequence number when it is triggered and
/// only commits if no later cycle has been triggered in the meantime, so a
/// slow response can never overwrite a newer one.
pub struct FilterFetchCoordinator<A: ?Sized> {
    api: Rc<A>,
    shared: Rc<RefCell<Shared>>,
}

impl<A: ?Sized> Clone for FilterFetchCoordinator<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<A: DashboardApi + ?Sized + 'static> FilterFetchCoordinator<A> {
    pub fn new(api: Rc<A>, filter: FilterState) -> Self {
        Self::with_policy(api, filter, FailurePolicy::default())
    }

    pub fn with_policy(api: Rc<A>, filter: FilterState, policy: FailurePolicy) -> Self {
        debug!(?filter, ?policy, "Creating filter fetch coordinator");
        Self {
            api,
            shared: Rc::new(RefCell::new(Shared {
                state: DashboardState {
                    filter,
                    phase: Phase::Idle,
                    snapshot: None,
                    last_error: None,
                },
                latest_cycle: 0,
                policy,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn state(&self) -> DashboardState {
        self.shared.borrow().state.clone()
    }

    pub fn filter(&self) -> FilterState {
        self.shared.borrow().state.filter.clone()
    }

    /// Register an observer called after every state change.
    ///
    /// The observer stays registered until the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&DashboardState) + 'static,
    {
        let mut shared = self.shared.borrow_mut();
        let id = shared.next_listener_id;
        shared.next_listener_id += 1;
        shared.listeners.push((id, Rc::new(listener)));
        trace!(id, "Observer subscribed");
        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn set_year(&self, year: i32) -> Option<RefreshCycle<A>> {
        self.mutate("year", |filter| filter.set_year(year))
    }

    pub fn set_month(&self, month: u32) -> Option<RefreshCycle<A>> {
        self.mutate("month", |filter| filter.set_month(month))
    }

    pub fn set_search(&self, search: impl Into<String>) -> Option<RefreshCycle<A>> {
        let search = search.into();
        self.mutate("search", |filter| filter.set_search(search))
    }

    /// Move to the next page. A no-op once the last page reported for the
    /// current selection is reached; unconditional when no total is known.
    pub fn next_page(&self) -> Option<RefreshCycle<A>> {
        let last_page = self.shared.borrow().state.total_pages();
        self.mutate("next page", |filter| filter.next_page(last_page))
    }

    /// Move to the previous page. A no-op on page 1.
    pub fn prev_page(&self) -> Option<RefreshCycle<A>> {
        self.mutate("previous page", |filter| filter.prev_page())
    }

    /// Start a cycle for the current selection even though nothing changed.
    pub fn refresh(&self) -> RefreshCycle<A> {
        self.begin_cycle()
    }

    fn mutate<F>(&self, what: &str, change: F) -> Option<RefreshCycle<A>>
    where
        F: FnOnce(&mut FilterState) -> bool,
    {
        let changed = change(&mut self.shared.borrow_mut().state.filter);
        if !changed {
            trace!("Change of {} left the selection untouched", what);
            return None;
        }
        debug!("Selection changed: {}", what);
        Some(self.begin_cycle())
    }

    fn begin_cycle(&self) -> RefreshCycle<A> {
        let (cycle, filter) = {
            let mut shared = self.shared.borrow_mut();
            shared.latest_cycle += 1;
            shared.state.phase = Phase::Fetching;
            (shared.latest_cycle, shared.state.filter.clone())
        };
        debug!(
            cycle,
            year = filter.year(),
            month = filter.month(),
            search = filter.search(),
            page = filter.page(),
            "Refresh cycle triggered"
        );
        self.notify();
        RefreshCycle {
            coordinator: self.clone(),
            cycle,
            filter,
        }
    }

    fn resolve(&self, cycle: u64, filter: FilterState, result: Result<Snapshot, FetchError>) -> CycleOutcome {
        let outcome = {
            let mut shared = self.shared.borrow_mut();
            if cycle != shared.latest_cycle {
                let latest = shared.latest_cycle;
                debug!(cycle, latest, "Discarding result of superseded refresh cycle");
                return CycleOutcome::Superseded { cycle, latest };
            }

            shared.state.phase = Phase::Idle;
            match result {
                Ok(snapshot) => {
                    info!(
                        cycle,
                        transactions = snapshot.transactions.len(),
                        "Refresh cycle committed"
                    );
                    shared.state.snapshot = Some(Rc::new(snapshot));
                    shared.state.last_error = None;
                    CycleOutcome::Committed { cycle }
                }
                Err(err) => {
                    error!(cycle, ?filter, "Error fetching data: {}", err);
                    if shared.policy == FailurePolicy::ReportAndKeepStale {
                        shared.state.last_error = Some(CycleFailure {
                            cycle,
                            error: err.clone(),
                        });
                    }
                    CycleOutcome::Failed { cycle, error: err }
                }
            }
        };
        self.notify();
        outcome
    }

    fn notify(&self) {
        let (state, listeners) = {
            let shared = self.shared.borrow();
            let listeners: Vec<Listener> = shared
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (shared.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }
}

/// One fan-out/fan-in round of the four requests, bound to the selection at trigger time.
#[must_use = "a refresh cycle does nothing until it is run"]
pub struct RefreshCycle<A: ?Sized> {
    coordinator: FilterFetchCoordinator<A>,
    cycle: u64,
    filter: FilterState,
}

impl<A: DashboardApi + ?Sized + 'static> RefreshCycle<A> {
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Issue the four requests concurrently and hand the joined result back to the coordinator.
    ///
    /// The first rejection rejects the whole join.
    pub async fn run(self) -> CycleOutcome {
        let api = Rc::clone(&self.coordinator.api);
        let query = self.filter.transaction_query();
        let period = self.filter.period_query();

        let joined = tokio::try_join!(
            api.fetch_transactions(&query),
            api.fetch_statistics(&period),
            api.fetch_bar_chart(&period),
            api.fetch_pie_chart(&period),
        );

        let result = joined.map(|(transactions, statistics, bar_chart, pie_chart)| Snapshot {
            cycle: self.cycle,
            filter: self.filter.clone(),
            transactions,
            statistics,
            bar_chart,
            pie_chart,
        });

        self.coordinator.resolve(self.cycle, self.filter, result)
    }
}

/// Keeps an observer registered; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    shared: Weak<RefCell<Shared>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            trace!(id = self.id, "Observer unsubscribed");
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, ScriptedApi};
    use common::{Endpoint, PeriodQuery, TransactionQuery};
    use std::cell::RefCell;

    fn coordinator_with(api: ScriptedApi) -> (Rc<ScriptedApi>, FilterFetchCoordinator<ScriptedApi>) {
        let api = Rc::new(api);
        let coordinator = FilterFetchCoordinator::new(Rc::clone(&api), FilterState::new(2024, 1, 5));
        (api, coordinator)
    }

    fn committed_month(state: &DashboardState) -> Option<u32> {
        state.snapshot.as_ref().map(|snapshot| snapshot.filter.month())
    }

    #[tokio::test]
    async fn test_initial_cycle_fetches_all_four_and_commits() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());

        let cycle = coordinator.refresh();
        assert!(coordinator.state().is_loading());
        assert_eq!(coordinator.state().status(), Status::Loading);

        let outcome = cycle.run().await;
        assert_eq!(outcome, CycleOutcome::Committed { cycle: 1 });

        let period = PeriodQuery { year: 2024, month: 1 };
        let calls = api.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls.contains(&Call::Transactions(TransactionQuery {
            year: 2024,
            month: 1,
            search: String::new(),
            page: 1,
            per_page: 5,
        })));
        assert!(calls.contains(&Call::Statistics(period)));
        assert!(calls.contains(&Call::BarChart(period)));
        assert!(calls.contains(&Call::PieChart(period)));

        let state = coordinator.state();
        assert!(!state.is_loading());
        assert_eq!(state.status(), Status::Ready);
        let snapshot = state.snapshot.expect("snapshot committed");
        let titles: Vec<&str> = snapshot
            .transactions
            .transactions
            .iter()
            .map(|record| record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["2024-1--p1-#0", "2024-1--p1-#1"]);
    }

    #[tokio::test]
    async fn test_month_change_resets_page_and_refetches() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());
        coordinator.refresh().run().await;
        for _ in 0..3 {
            coordinator.next_page().expect("page advances").run().await;
        }
        assert_eq!(coordinator.filter().page(), 4);

        let cycle = coordinator.set_month(3).expect("month change triggers a cycle");
        assert_eq!(cycle.filter().page(), 1);
        assert_eq!(cycle.filter().month(), 3);
        cycle.run().await;

        let last = api.transaction_queries().pop().unwrap();
        assert_eq!(last.month, 3);
        assert_eq!(last.page, 1);
    }

    #[tokio::test]
    async fn test_all_filter_mutations_reset_page() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());

        coordinator.next_page().unwrap().run().await;
        coordinator.set_year(2023).unwrap().run().await;
        assert_eq!(coordinator.filter().page(), 1);

        coordinator.next_page().unwrap().run().await;
        coordinator.set_search("jacket").unwrap().run().await;
        assert_eq!(coordinator.filter().page(), 1);
        assert_eq!(coordinator.filter().search(), "jacket");
    }

    #[tokio::test]
    async fn test_unchanged_selection_triggers_nothing() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());
        assert!(coordinator.set_month(1).is_none());
        assert!(coordinator.set_year(2024).is_none());
        assert!(coordinator.set_search("").is_none());
        assert!(coordinator.prev_page().is_none());
        assert!(!coordinator.state().is_loading());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_prev_page_never_below_one() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());
        let moves = [true, true, false, false, false, true, false, false, false, false];
        for forward in moves {
            let cycle = if forward {
                coordinator.next_page()
            } else {
                coordinator.prev_page()
            };
            if let Some(cycle) = cycle {
                cycle.run().await;
            }
            assert!(coordinator.filter().page() >= 1);
        }
        assert_eq!(coordinator.filter().page(), 1);
    }

    #[tokio::test]
    async fn test_older_cycle_resolving_late_is_discarded() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());

        let first = coordinator.set_month(2).unwrap();
        let second = coordinator.set_month(3).unwrap();

        assert_eq!(second.run().await, CycleOutcome::Committed { cycle: 2 });
        assert_eq!(committed_month(&coordinator.state()), Some(3));

        assert_eq!(
            first.run().await,
            CycleOutcome::Superseded { cycle: 1, latest: 2 }
        );
        let state = coordinator.state();
        assert_eq!(committed_month(&state), Some(3));
        assert_eq!(state.snapshot.as_ref().unwrap().statistics.total_sold_items, 3);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_concurrent_cycles_commit_in_trigger_order() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());
        let release_first = api.hold_month(2);

        let first = coordinator.set_month(2).unwrap();
        let second = coordinator.set_month(3).unwrap();

        let observer = coordinator.clone();
        let (first_outcome, (second_outcome, between)) = tokio::join!(first.run(), async move {
            let outcome = second.run().await;
            let between = observer.state();
            let _ = release_first.send(());
            (outcome, between)
        });

        assert_eq!(second_outcome, CycleOutcome::Committed { cycle: 2 });
        assert_eq!(committed_month(&between), Some(3));
        assert!(!between.is_loading());

        assert_eq!(first_outcome, CycleOutcome::Superseded { cycle: 1, latest: 2 });
        assert_eq!(committed_month(&coordinator.state()), Some(3));
    }

    #[tokio::test]
    async fn test_older_cycle_resolving_first_keeps_loading() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());

        let first = coordinator.set_month(2).unwrap();
        let second = coordinator.set_month(3).unwrap();

        assert!(matches!(first.run().await, CycleOutcome::Superseded { .. }));
        let state = coordinator.state();
        assert!(state.is_loading());
        assert!(state.snapshot.is_none());

        assert_eq!(second.run().await, CycleOutcome::Committed { cycle: 2 });
        assert_eq!(committed_month(&coordinator.state()), Some(3));
    }

    #[tokio::test]
    async fn test_failed_cycle_keeps_previous_snapshot() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());
        coordinator.refresh().run().await;
        let before = coordinator.state().snapshot.unwrap();

        api.fail_next(Endpoint::PieChart);
        let outcome = coordinator.set_month(5).unwrap().run().await;
        assert!(matches!(
            outcome,
            CycleOutcome::Failed { cycle: 2, error: FetchError::Status { endpoint: Endpoint::PieChart, status: 500 } }
        ));

        let state = coordinator.state();
        assert!(!state.is_loading());
        assert!(Rc::ptr_eq(state.snapshot.as_ref().unwrap(), &before));
        assert_eq!(state.status(), Status::Stale);
        assert_eq!(state.last_error.as_ref().unwrap().cycle, 2);
        // the selection itself moved on even though its data did not arrive
        assert_eq!(state.filter.month(), 5);

        coordinator.refresh().run().await;
        let state = coordinator.state();
        assert_eq!(state.status(), Status::Ready);
        assert!(state.last_error.is_none());
        assert_eq!(committed_month(&state), Some(5));
    }

    #[tokio::test]
    async fn test_failure_before_any_snapshot() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());
        api.fail_next(Endpoint::Transactions);
        coordinator.refresh().run().await;
        assert_eq!(coordinator.state().status(), Status::Failed);
    }

    #[tokio::test]
    async fn test_silent_policy_only_logs() {
        let api = Rc::new(ScriptedApi::new());
        let coordinator = FilterFetchCoordinator::with_policy(
            Rc::clone(&api),
            FilterState::new(2024, 1, 5),
            FailurePolicy::KeepStaleSilently,
        );
        coordinator.refresh().run().await;

        api.fail_next(Endpoint::Statistics);
        let outcome = coordinator.set_month(2).unwrap().run().await;
        assert!(matches!(outcome, CycleOutcome::Failed { .. }));

        let state = coordinator.state();
        assert!(state.last_error.is_none());
        assert_eq!(state.status(), Status::Ready);
        assert_eq!(committed_month(&state), Some(1));
    }

    #[tokio::test]
    async fn test_superseded_failure_does_not_touch_state() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new());
        api.fail_next(Endpoint::BarChart);

        let first = coordinator.set_month(2).unwrap();
        let second = coordinator.set_month(3).unwrap();

        assert!(matches!(first.run().await, CycleOutcome::Superseded { .. }));
        let state = coordinator.state();
        assert!(state.last_error.is_none());
        assert!(state.is_loading());

        assert_eq!(second.run().await, CycleOutcome::Committed { cycle: 2 });
    }

    #[tokio::test]
    async fn test_observers_never_see_partial_snapshot() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());
        let seen: Rc<RefCell<Vec<DashboardState>>> = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            coordinator.subscribe(move |state| seen.borrow_mut().push(state.clone()))
        };

        coordinator.refresh().run().await;
        coordinator.set_month(7).unwrap().run().await;

        let seen = seen.borrow();
        // trigger and commit for each of the two cycles
        assert_eq!(seen.len(), 4);
        assert!(seen[0].is_loading() && seen[0].snapshot.is_none());
        for state in seen.iter() {
            if let Some(snapshot) = &state.snapshot {
                let month = u64::from(snapshot.filter.month());
                assert_eq!(snapshot.statistics.total_sold_items, month);
                assert_eq!(snapshot.bar_chart.buckets[0].count, month);
                assert_eq!(snapshot.pie_chart.slices[0].count, month);
                assert!(snapshot.transactions.transactions[0]
                    .title
                    .starts_with(&format!("2024-{}-", month)));
            }
        }
        assert_eq!(committed_month(&seen[3]), Some(7));
    }

    #[tokio::test]
    async fn test_dropped_subscription_stops_notifications() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());
        let count = Rc::new(RefCell::new(0));
        let subscription = {
            let count = Rc::clone(&count);
            coordinator.subscribe(move |_| *count.borrow_mut() += 1)
        };

        coordinator.refresh().run().await;
        assert_eq!(*count.borrow(), 2);

        drop(subscription);
        coordinator.refresh().run().await;
        assert_eq!(*count.borrow(), 2);
    }

    #[tokio::test]
    async fn test_next_page_clamps_to_reported_total() {
        let (api, coordinator) = coordinator_with(ScriptedApi::new().with_total_pages(2));
        coordinator.refresh().run().await;
        assert!(coordinator.state().can_go_next());

        coordinator.next_page().expect("page 2 exists").run().await;
        assert_eq!(coordinator.filter().page(), 2);
        assert!(!coordinator.state().can_go_next());
        assert!(coordinator.next_page().is_none());
        assert_eq!(api.transaction_queries().len(), 2);
    }

    #[tokio::test]
    async fn test_next_page_is_unbounded_without_totals() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new());
        coordinator.refresh().run().await;
        for expected in 2..=6 {
            coordinator.next_page().unwrap().run().await;
            assert_eq!(coordinator.filter().page(), expected);
        }
    }

    #[tokio::test]
    async fn test_total_from_other_selection_does_not_clamp() {
        let (_api, coordinator) = coordinator_with(ScriptedApi::new().with_total_pages(1));
        coordinator.refresh().run().await;
        assert!(coordinator.next_page().is_none());

        // new selection in flight, the committed total no longer applies
        let pending = coordinator.set_search("ring").unwrap();
        assert_eq!(coordinator.state().total_pages(), None);
        let advanced = coordinator.next_page().expect("unknown total allows advancing");
        assert_eq!(advanced.filter().page(), 2);

        assert!(matches!(pending.run().await, CycleOutcome::Superseded { .. }));
        assert_eq!(advanced.run().await, CycleOutcome::Committed { cycle: 3 });
    }
}
