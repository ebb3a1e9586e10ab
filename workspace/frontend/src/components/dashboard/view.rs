use chrono::Local;
use common::districts::district_by_code;
use yew::prelude::*;

use crate::api_client::district::{fetch_district_or_sample, DistrictPayload};
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;
use crate::context::use_app_context;
use crate::hooks::FetchState;

use super::chart::{EmploymentChart, ExpenditureChart};
use super::kpis::KpiCards;
use super::picker::{DistrictPicker, LocateButton};

const DEFAULT_DISTRICT: &str = "0501";

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let ctx = use_app_context();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let text = ctx.text();

    let selected = use_state(|| DEFAULT_DISTRICT.to_string());
    let fetch_state = use_state(|| FetchState::<DistrictPayload>::Loading);

    // One fresh request per selection; no caching, no retry. A rapid
    // re-selection can race the previous request and the last response to
    // resolve wins.
    {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let language = ctx.language;
        use_effect_with((*selected).clone(), move |code| {
            let code = code.clone();
            fetch_state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let payload = fetch_district_or_sample(&code).await;
                if payload.is_sample() {
                    toast_ctx.show_warning(language.text().notice_fetch_failed.to_string());
                }
                fetch_state.set(FetchState::Success(payload));
            });
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |code: String| {
            log::debug!("District selected: {}", code);
            selected.set(code);
        })
    };

    let district_name = district_by_code(&selected)
        .map(|d| d.name)
        .unwrap_or_default();
    let as_on = Local::now().format("%d %b %Y").to_string();

    html! {
        <>
            <div class="card bg-base-100 shadow">
                <div class="card-body py-4">
                    <div class="flex flex-wrap items-end gap-4">
                        <DistrictPicker selected={(*selected).clone()} on_select={on_select.clone()} />
                        <LocateButton on_locate={on_select} />
                        <div class="ml-auto text-right">
                            <div class="text-lg font-semibold">{district_name}</div>
                            <div class="text-xs text-gray-500">{&as_on}</div>
                        </div>
                    </div>
                </div>
            </div>

            {match &*fetch_state {
                FetchState::Success(payload) => {
                    let data = payload.data();
                    html! {
                        <>
                            {if payload.is_sample() {
                                html! {
                                    <div class="alert alert-warning mt-4">
                                        <i class="fas fa-exclamation-triangle"></i>
                                        <span>{text.sample_data_notice}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}

                            <div class="mt-6">
                                <KpiCards kpis={data.kpis.clone()} />
                            </div>

                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">{text.monthly_employment}</h2>
                                        <EmploymentChart series={data.timeseries.clone()} />
                                    </div>
                                </div>
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">{text.monthly_expenditure}</h2>
                                        <ExpenditureChart series={data.timeseries.clone()} />
                                    </div>
                                </div>
                            </div>
                        </>
                    }
                }
                _ => html! { <Loading text={text.loading_data.to_string()} /> },
            }}
        </>
    }
}
