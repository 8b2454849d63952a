use dashboard::views::page_info;
use yew::prelude::*;

use crate::hooks::DashboardHandle;

#[function_component(Pagination)]
pub fn pagination() -> Html {
    let Some(dashboard) = use_context::<DashboardHandle>() else {
        return html! {};
    };
    let info = page_info(&dashboard.state);

    let on_previous = {
        let on_prev_page = dashboard.on_prev_page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_prev_page.emit(());
        })
    };

    let on_next = {
        let on_next_page = dashboard.on_next_page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_next_page.emit(());
        })
    };

    html! {
        <div class="flex justify-center items-center gap-2 my-4">
            <button class="btn btn-sm" disabled={!info.can_prev} onclick={on_previous}>
                <i class="fas fa-chevron-left"></i>
                {" Previous"}
            </button>
            <span class="px-2 text-sm">{&info.label}</span>
            <button class="btn btn-sm" disabled={!info.can_next} onclick={on_next}>
                {"Next "}
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}
