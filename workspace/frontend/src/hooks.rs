use std::rc::Rc;

use dashboard::{DashboardState, FailurePolicy, FilterFetchCoordinator, FilterState, RefreshCycle};
use yew::prelude::*;

use crate::api_client::HttpDashboardApi;
use crate::settings::AppSettings;

type Coordinator = FilterFetchCoordinator<HttpDashboardApi>;

/// Latest coordinator state plus the callbacks that mutate it.
///
/// Handed to the component tree through a context; views only read `state`.
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: DashboardState,
    pub on_year_change: Callback<i32>,
    pub on_month_change: Callback<u32>,
    pub on_search_change: Callback<String>,
    pub on_prev_page: Callback<()>,
    pub on_next_page: Callback<()>,
    pub on_retry: Callback<()>,
}

fn spawn_cycle(cycle: Option<RefreshCycle<HttpDashboardApi>>) {
    let Some(cycle) = cycle else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = cycle.run().await;
        log::debug!("Refresh cycle finished: {:?}", outcome);
    });
}

/// Owns one coordinator for the lifetime of the calling component and mirrors
/// its state into Yew state, so every committed change re-renders.
#[hook]
pub fn use_dashboard(settings: &AppSettings) -> DashboardHandle {
    let coordinator: Rc<Coordinator> = {
        let settings = settings.clone();
        use_memo((), move |_| {
            let api = Rc::new(HttpDashboardApi::new(settings.client.api_base_url.clone()));
            let policy = if settings.client.report_fetch_errors {
                FailurePolicy::ReportAndKeepStale
            } else {
                FailurePolicy::KeepStaleSilently
            };
            let filter = FilterState::for_today(settings.client.page_size);
            log::info!(
                "Dashboard starting at {}-{:02}, {} records per page",
                filter.year(),
                filter.month(),
                filter.page_size()
            );
            FilterFetchCoordinator::with_policy(api, filter, policy)
        })
    };

    let state = {
        let coordinator = coordinator.clone();
        use_state(move || coordinator.state())
    };

    // Subscribe and fetch on mount
    {
        let coordinator = coordinator.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let subscription = coordinator.subscribe(move |next| state.set(next.clone()));
            spawn_cycle(Some(coordinator.refresh()));
            move || drop(subscription)
        });
    }

    let on_year_change = {
        let coordinator = coordinator.clone();
        use_callback((), move |year: i32, _| spawn_cycle(coordinator.set_year(year)))
    };

    let on_month_change = {
        let coordinator = coordinator.clone();
        use_callback((), move |month: u32, _| spawn_cycle(coordinator.set_month(month)))
    };

    let on_search_change = {
        let coordinator = coordinator.clone();
        use_callback((), move |search: String, _| spawn_cycle(coordinator.set_search(search)))
    };

    let on_prev_page = {
        let coordinator = coordinator.clone();
        use_callback((), move |_: (), _| spawn_cycle(coordinator.prev_page()))
    };

    let on_next_page = {
        let coordinator = coordinator.clone();
        use_callback((), move |_: (), _| spawn_cycle(coordinator.next_page()))
    };

    let on_retry = {
        let coordinator = coordinator.clone();
        use_callback((), move |_: (), _| {
            log::debug!("User requested a retry");
            spawn_cycle(Some(coordinator.refresh()));
        })
    };

    DashboardHandle {
        state: (*state).clone(),
        on_year_change,
        on_month_change,
        on_search_change,
        on_prev_page,
        on_next_page,
        on_retry,
    }
}
