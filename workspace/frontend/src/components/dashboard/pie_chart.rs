use std::rc::Rc;

use dashboard::views::{pie_chart_data, pie_chart_layout};
use dashboard::Snapshot;
use yew::prelude::*;

use super::plot::PlotlyChart;
use crate::common::snapshot_view::SnapshotView;

#[function_component(PieChartView)]
pub fn pie_chart_view() -> Html {
    let render = Callback::from(|snapshot: Rc<Snapshot>| {
        if snapshot.pie_chart.is_empty() {
            return html! {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-pie text-4xl mb-4 opacity-50"></i>
                    <p>{"No categories for this month."}</p>
                </div>
            };
        }
        let data = pie_chart_data(&snapshot.pie_chart);
        let layout = pie_chart_layout(snapshot.filter.year(), snapshot.filter.month());
        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <PlotlyChart div_id="chart-categories" data={data} layout={layout} />
                </div>
            </div>
        }
    });

    html! { <SnapshotView render={render} /> }
}
