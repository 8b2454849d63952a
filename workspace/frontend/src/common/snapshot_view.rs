use std::rc::Rc;

use dashboard::{Snapshot, Status};
use yew::prelude::*;

use super::error::ErrorBanner;
use super::loading::Loading;
use crate::hooks::DashboardHandle;

#[derive(Properties, PartialEq)]
pub struct SnapshotViewProps {
    pub render: Callback<Rc<Snapshot>, Html>,
    #[prop_or_default]
    pub loading_text: Option<String>,
}

/// Renders the committed snapshot through `render`, handling the other states:
/// - Loading: spinner in place of the content
/// - Failed / Stale: error banner with retry, followed by the stale snapshot if any
/// - Empty: nothing fetched yet
#[function_component(SnapshotView)]
pub fn snapshot_view(props: &SnapshotViewProps) -> Html {
    let Some(dashboard) = use_context::<DashboardHandle>() else {
        log::error!("SnapshotView rendered outside the dashboard context");
        return html! {};
    };
    let state = &dashboard.state;

    let banner = match &state.last_error {
        Some(failure) if !state.is_loading() => html! {
            <ErrorBanner
                message={failure.error.to_string()}
                stale={state.snapshot.is_some()}
                on_retry={Some(dashboard.on_retry.clone())}
            />
        },
        _ => html! {},
    };

    let content = match state.status() {
        Status::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        Status::Empty | Status::Failed => html! {
            <div class="text-center py-8 text-gray-500">{"No data loaded."}</div>
        },
        Status::Ready | Status::Stale => match &state.snapshot {
            Some(snapshot) => props.render.emit(Rc::clone(snapshot)),
            None => html! {},
        },
    };

    html! {
        <>
            {banner}
            {content}
        </>
    }
}
