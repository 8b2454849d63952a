use chrono::{Datelike, Local};
use dashboard::views::month_name;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::DashboardHandle;

const YEARS_BACK: i32 = 5;

/// Year, month and search inputs.
#[function_component(Controls)]
pub fn controls() -> Html {
    let Some(dashboard) = use_context::<DashboardHandle>() else {
        return html! {};
    };
    let filter = &dashboard.state.filter;

    let current_year = Local::now().year();
    let mut years: Vec<i32> = (current_year - YEARS_BACK..=current_year).rev().collect();
    if !years.contains(&filter.year()) {
        years.push(filter.year());
    }

    let on_year = {
        let on_year_change = dashboard.on_year_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<i32>() {
                Ok(year) => on_year_change.emit(year),
                Err(err) => log::warn!("Ignoring year selection '{}': {}", select.value(), err),
            }
        })
    };

    let on_month = {
        let on_month_change = dashboard.on_month_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u32>() {
                Ok(month) => on_month_change.emit(month),
                Err(err) => log::warn!("Ignoring month selection '{}': {}", select.value(), err),
            }
        })
    };

    let on_search = {
        let on_search_change = dashboard.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_change.emit(input.value());
        })
    };

    html! {
        <div class="flex flex-wrap gap-4 items-end mb-4">
            <label class="form-control w-40">
                <span class="label-text">{"Year"}</span>
                <select class="select select-bordered select-sm" onchange={on_year}>
                    { for years.iter().map(|year| html! {
                        <option value={year.to_string()} selected={*year == filter.year()}>{year}</option>
                    })}
                </select>
            </label>
            <label class="form-control w-40">
                <span class="label-text">{"Month"}</span>
                <select class="select select-bordered select-sm" onchange={on_month}>
                    { for (1..=12u32).map(|month| html! {
                        <option value={month.to_string()} selected={month == filter.month()}>{month_name(month)}</option>
                    })}
                </select>
            </label>
            <label class="form-control flex-1 min-w-48">
                <span class="label-text">{"Search"}</span>
                <input
                    type="search"
                    class="input input-bordered input-sm"
                    placeholder="Title, description or price"
                    value={filter.search().to_string()}
                    oninput={on_search}
                />
            </label>
        </div>
    }
}
