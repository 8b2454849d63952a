use std::rc::Rc;

use dashboard::views::statistics_cards;
use dashboard::Snapshot;
use yew::prelude::*;

use crate::common::snapshot_view::SnapshotView;

#[function_component(StatisticsView)]
pub fn statistics_view() -> Html {
    let render = Callback::from(|snapshot: Rc<Snapshot>| {
        let cards = statistics_cards(
            &snapshot.statistics,
            snapshot.filter.year(),
            snapshot.filter.month(),
        );

        html! {
            <>
                <h2 class="text-lg font-semibold mb-2">{format!("Statistics - {}", cards.period_label)}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="stats shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">{"Total sale"}</div>
                            <div class="stat-value text-primary">{&cards.total_sale_amount}</div>
                        </div>
                    </div>
                    <div class="stats shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">{"Total sold items"}</div>
                            <div class="stat-value text-success">{cards.total_sold_items}</div>
                        </div>
                    </div>
                    <div class="stats shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">{"Total not sold items"}</div>
                            <div class="stat-value text-error">{cards.total_not_sold_items}</div>
                        </div>
                    </div>
                </div>
            </>
        }
    });

    html! { <SnapshotView render={render} /> }
}
