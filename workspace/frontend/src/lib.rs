use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use components::dashboard::{BarChartView, PieChartView, StatisticsView, TransactionsView};
use components::layout::layout::Layout;
use hooks::{use_dashboard, DashboardHandle};
use settings::AppSettings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Table,
    #[at("/statistics")]
    Statistics,
    #[at("/bar-chart")]
    BarChart,
    #[at("/pie-chart")]
    PieChart,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Table => {
            log::trace!("Rendering transactions table");
            html! { <Layout title="Transactions"><TransactionsView /></Layout> }
        }
        Route::Statistics => {
            log::trace!("Rendering statistics");
            html! { <Layout title="Statistics"><StatisticsView /></Layout> }
        }
        Route::BarChart => {
            log::trace!("Rendering price range chart");
            html! { <Layout title="Price Ranges"><BarChartView /></Layout> }
        }
        Route::PieChart => {
            log::trace!("Rendering category chart");
            html! { <Layout title="Categories"><PieChartView /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout title="404" filters={false}>
                    <h1>{"404 Not Found"}</h1>
                    <Link<Route> to={Route::Table} classes="link">{"Back to transactions"}</Link<Route>>
                </Layout>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: AppSettings,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let dashboard = use_dashboard(&props.settings);

    html! {
        <ContextProvider<DashboardHandle> context={dashboard}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<DashboardHandle>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_bindgen_futures::spawn_local(async {
        let settings = settings::load_settings().await;
        wasm_logger::init(wasm_logger::Config::new(settings.log_level));

        log::info!("=== Transactions Dashboard Starting ===");
        log::info!("Application settings: {:?}", settings);
        log::debug!("API base URL: {}", settings.client.api_base_url);
        log::debug!("Debug mode: {}", settings.debug_mode);

        log::trace!("Initializing Yew renderer");
        yew::Renderer::<App>::with_props(AppProps { settings }).render();
        log::info!("Application initialized successfully");
    });
}
