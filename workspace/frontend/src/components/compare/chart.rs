use common::MonthlyPoint;
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::context::use_app_context;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub first_name: &'static str,
    pub first_series: Vec<MonthlyPoint>,
    pub second_name: &'static str,
    pub second_series: Vec<MonthlyPoint>,
}

#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &Props) -> Html {
    let ctx = use_app_context();
    let container_ref = use_node_ref();

    let deps = (
        container_ref.clone(),
        props.first_name,
        props.first_series.clone(),
        props.second_name,
        props.second_series.clone(),
        ctx.language,
    );

    use_effect_with(
        deps,
        move |(container_ref, first_name, first_series, second_name, second_series, language)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("chart-district-comparison");

                let months: Vec<String> = first_series.iter().map(|p| p.month.clone()).collect();
                let first: Vec<u64> = first_series.iter().map(|p| p.persondays).collect();
                let second: Vec<u64> = second_series.iter().map(|p| p.persondays).collect();

                let trace_a = Scatter::new(months.clone(), first)
                    .mode(Mode::LinesMarkers)
                    .name(*first_name)
                    .line(plotly::common::Line::new().color("rgb(59, 130, 246)").width(2.0));

                let trace_b = Scatter::new(months, second)
                    .mode(Mode::LinesMarkers)
                    .name(*second_name)
                    .line(plotly::common::Line::new().color("rgb(234, 88, 12)").width(2.0));

                let layout = Layout::new()
                    .y_axis(
                        plotly::layout::Axis::new()
                            .title(plotly::common::Title::with_text(language.text().persondays_axis)),
                    )
                    .height(400);

                let data_js = js_sys::Array::new();
                for trace in [
                    serde_json::to_string(&trace_a),
                    serde_json::to_string(&trace_b),
                ] {
                    match trace {
                        Ok(json) => {
                            if let Ok(value) = js_sys::JSON::parse(&json) {
                                data_js.push(&value);
                            }
                        }
                        Err(e) => log::error!("Failed to serialize comparison trace: {}", e),
                    }
                }

                let layout_json = serde_json::to_string(&layout).unwrap_or_default();
                if let Ok(layout_js) = js_sys::JSON::parse(&layout_json) {
                    newPlot("chart-district-comparison", data_js.into(), layout_js);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
