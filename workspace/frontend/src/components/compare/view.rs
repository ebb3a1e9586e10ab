use common::compare::derive_district_series;
use common::districts::district_by_code;
use common::sample::comparison_base_series;
use yew::prelude::*;

use crate::components::dashboard::picker::DistrictPicker;
use crate::context::use_app_context;

use super::chart::ComparisonChart;

#[function_component(Compare)]
pub fn compare() -> Html {
    let ctx = use_app_context();
    let text = ctx.text();

    let first = use_state(|| "0501".to_string());
    let second = use_state(|| "0511".to_string());

    let on_first = {
        let first = first.clone();
        Callback::from(move |code: String| first.set(code))
    };
    let on_second = {
        let second = second.clone();
        Callback::from(move |code: String| second.set(code))
    };

    // Derived locally; no network round trip on this view.
    let base = comparison_base_series();
    let first_series = derive_district_series(&first, &base);
    let second_series = derive_district_series(&second, &base);

    let first_name = district_by_code(&first).map(|d| d.name).unwrap_or_default();
    let second_name = district_by_code(&second).map(|d| d.name).unwrap_or_default();

    html! {
        <>
            <div class="card bg-base-100 shadow">
                <div class="card-body py-4">
                    <div class="flex flex-wrap items-end gap-4">
                        <DistrictPicker
                            selected={(*first).clone()}
                            on_select={on_first}
                            label={text.first_district.to_string()}
                        />
                        <DistrictPicker
                            selected={(*second).clone()}
                            on_select={on_second}
                            label={text.second_district.to_string()}
                        />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{text.compare_title}</h2>
                    <ComparisonChart
                        first_name={first_name}
                        first_series={first_series}
                        second_name={second_name}
                        second_series={second_series}
                    />
                    <p class="text-xs text-gray-500 mt-2">
                        <i class="fas fa-circle-info mr-1"></i>
                        {text.mock_series_note}
                    </p>
                </div>
            </div>
        </>
    }
}
