use yew::prelude::*;

use crate::common::loading::{Loading, SpinnerSize};
use crate::hooks::DashboardHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let loading = use_context::<DashboardHandle>()
        .map(|dashboard| dashboard.state.is_loading())
        .unwrap_or(false);

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="txdash-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                if loading {
                    <Loading size={SpinnerSize::Small} />
                }
            </div>
        </div>
    }
}
