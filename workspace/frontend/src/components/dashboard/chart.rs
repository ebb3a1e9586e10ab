use common::MonthlyPoint;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::context::use_app_context;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Vec<MonthlyPoint>,
}

#[function_component(EmploymentChart)]
pub fn employment_chart(props: &Props) -> Html {
    let ctx = use_app_context();
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.series.clone(), ctx.language),
        move |(chart_ref, series, language)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let text = language.text();
                let months: Vec<String> = series.iter().map(|p| p.month.clone()).collect();
                let persondays: Vec<u64> = series.iter().map(|p| p.persondays).collect();
                let households: Vec<u64> = series.iter().map(|p| p.households).collect();

                let traces = serde_json::json!([
                    {
                        "x": months,
                        "y": persondays,
                        "type": "bar",
                        "name": text.persondays_axis,
                        "marker": {"color": "#3b82f6"}
                    },
                    {
                        "x": months,
                        "y": households,
                        "type": "scatter",
                        "mode": "lines+markers",
                        "name": text.kpi_households_employed,
                        "yaxis": "y2",
                        "line": {"color": "#f59e0b"}
                    }
                ]);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 50, "l": 50, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee"},
                    "yaxis2": {"overlaying": "y", "side": "right", "showgrid": false},
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
        <div ref={chart_ref} id="chart-district-employment" class="chart-container" style="height: 300px;"></div>
    }
}

#[function_component(ExpenditureChart)]
pub fn expenditure_chart(props: &Props) -> Html {
    let ctx = use_app_context();
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.series.clone(), ctx.language),
        move |(chart_ref, series, language)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let text = language.text();
                let months: Vec<String> = series.iter().map(|p| p.month.clone()).collect();
                let expenditure: Vec<f64> = series.iter().map(|p| p.expenditure).collect();

                let traces = serde_json::json!([{
                    "x": months,
                    "y": expenditure,
                    "type": "scatter",
                    "mode": "lines",
                    "fill": "tozeroy",
                    "line": {"color": "#22c55e", "shape": "spline"},
                    "name": text.expenditure_lakh
                }]);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": text.expenditure_lakh}}
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
        <div ref={chart_ref} id="chart-district-expenditure" class="chart-container" style="height: 300px;"></div>
    }
}
