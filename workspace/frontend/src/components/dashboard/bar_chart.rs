use std::rc::Rc;

use dashboard::views::{bar_chart_data, bar_chart_layout};
use dashboard::Snapshot;
use yew::prelude::*;

use super::plot::PlotlyChart;
use crate::common::snapshot_view::SnapshotView;

#[function_component(BarChartView)]
pub fn bar_chart_view() -> Html {
    let render = Callback::from(|snapshot: Rc<Snapshot>| {
        if snapshot.bar_chart.is_empty() {
            return html! {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-bar text-4xl mb-4 opacity-50"></i>
                    <p>{"No price data for this month."}</p>
                </div>
            };
        }
        let data = bar_chart_data(&snapshot.bar_chart);
        let layout = bar_chart_layout(snapshot.filter.year(), snapshot.filter.month());
        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <PlotlyChart div_id="chart-price-ranges" data={data} layout={layout} />
                </div>
            </div>
        }
    });

    html! { <SnapshotView render={render} /> }
}
