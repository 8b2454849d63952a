use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js(value: &Value) -> Option<JsValue> {
    match js_sys::JSON::parse(&value.to_string()) {
        Ok(js) => Some(js),
        Err(err) => {
            log::error!("Could not convert chart definition to JS: {:?}", err);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub div_id: AttrValue,
    pub data: Value,
    pub layout: Value,
}

/// Hands a ready data/layout pair to Plotly JS; redraws whenever either changes.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.data.clone(), props.layout.clone(), props.div_id.clone()),
        move |(container_ref, data, layout, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);
                let config = serde_json::json!({"responsive": true, "displayModeBar": false});
                if let (Some(data), Some(layout), Some(config)) = (to_js(data), to_js(layout), to_js(&config)) {
                    log::trace!("Drawing chart {}", div_id);
                    newPlot(div_id, data, layout, config);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:400px;"></div>
    }
}
