use common::compare::YearRow;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::context::use_app_context;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<YearRow>,
    pub years: Vec<String>,
}

#[function_component(TrendsChart)]
pub fn trends_chart(props: &Props) -> Html {
    let ctx = use_app_context();
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.rows.clone(), props.years.clone(), ctx.language),
        move |(chart_ref, rows, years, language)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let months: Vec<&str> = rows.iter().map(|r| r.month).collect();

                let traces: Vec<serde_json::Value> = years
                    .iter()
                    .map(|year| {
                        let values: Vec<f64> = rows
                            .iter()
                            .map(|r| r.expenditure.get(year).copied().unwrap_or(0.0))
                            .collect();
                        serde_json::json!({
                            "x": months,
                            "y": values,
                            "type": "bar",
                            "name": year
                        })
                    })
                    .collect();

                let layout = serde_json::json!({
                    "barmode": "group",
                    "margin": {"t": 10, "r": 10, "l": 60, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false},
                    "yaxis": {
                        "showgrid": true,
                        "gridcolor": "#eee",
                        "title": {"text": language.text().expenditure_lakh}
                    },
                    "legend": {"orientation": "h", "y": -0.2}
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&traces).unwrap(),
                        serde_wasm_bindgen::to_value(&layout).unwrap(),
                        serde_wasm_bindgen::to_value(&config).unwrap(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-state-trends" class="chart-container" style="height: 360px;"></div>
    }
}
