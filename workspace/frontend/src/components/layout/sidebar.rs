use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="txdash-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-receipt"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"Transactions"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Table} classes="nav-link"><i class="fas fa-table w-5"></i> {"Table"}</Link<Route>></li>
                <li><Link<Route> to={Route::Statistics} classes="nav-link"><i class="fas fa-calculator w-5"></i> {"Statistics"}</Link<Route>></li>
                <li><Link<Route> to={Route::BarChart} classes="nav-link"><i class="fas fa-chart-bar w-5"></i> {"Price Ranges"}</Link<Route>></li>
                <li><Link<Route> to={Route::PieChart} classes="nav-link"><i class="fas fa-chart-pie w-5"></i> {"Categories"}</Link<Route>></li>
            </ul>
        </div>
    }
}
