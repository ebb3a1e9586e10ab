use common::districts::{match_locality, DISTRICTS};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::geocode::reverse_geocode;
use crate::common::toast::ToastContext;
use crate::context::use_app_context;
use crate::geo::{current_coordinates, GeoError};

#[derive(Properties, PartialEq)]
pub struct PickerProps {
    pub selected: String,
    pub on_select: Callback<String>,
    /// Label above the select; defaults to the localized "select district".
    #[prop_or_default]
    pub label: Option<String>,
}

#[function_component(DistrictPicker)]
pub fn district_picker(props: &PickerProps) -> Html {
    let ctx = use_app_context();
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| ctx.text().select_district.to_string());

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <select class="select select-bordered select-sm" onchange={onchange}>
                {for DISTRICTS.iter().map(|d| {
                    html! {
                        <option value={d.code} selected={d.code == props.selected}>
                            {d.name}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LocateProps {
    pub on_locate: Callback<String>,
}

/// Resolves the device position to a district and selects it. Best-effort:
/// every failure ends in a toast and manual selection.
#[function_component(LocateButton)]
pub fn locate_button(props: &LocateProps) -> Html {
    let ctx = use_app_context();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let locating = use_state(|| false);

    let onclick = {
        let on_locate = props.on_locate.clone();
        let toast_ctx = toast_ctx.clone();
        let locating = locating.clone();
        let language = ctx.language;

        Callback::from(move |_| {
            if *locating {
                return;
            }
            locating.set(true);

            let on_locate = on_locate.clone();
            let toast_ctx = toast_ctx.clone();
            let locating = locating.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let text = language.text();
                match current_coordinates().await {
                    Err(GeoError::Unsupported) => {
                        toast_ctx.show_error(text.notice_geo_unsupported.to_string());
                    }
                    Err(GeoError::PermissionDenied) => {
                        toast_ctx.show_error(text.notice_geo_denied.to_string());
                    }
                    Err(GeoError::Unavailable(_)) => {
                        toast_ctx.show_error(text.notice_geocode_failed.to_string());
                    }
                    Ok((lat, lon)) => match reverse_geocode(lat, lon).await {
                        Err(_) => {
                            toast_ctx.show_error(text.notice_geocode_failed.to_string());
                        }
                        Ok(place) => {
                            match place.locality_hint().and_then(match_locality) {
                                Some(district) => {
                                    log::info!("Located district {} ({})", district.name, district.code);
                                    toast_ctx.show_success(format!(
                                        "{}: {}",
                                        text.notice_located, district.name
                                    ));
                                    on_locate.emit(district.code.to_string());
                                }
                                None => {
                                    toast_ctx.show_info(text.notice_no_match.to_string());
                                }
                            }
                        }
                    },
                }
                locating.set(false);
            });
        })
    };

    html! {
        <button class="btn btn-outline btn-primary btn-sm" onclick={onclick} disabled={*locating}>
            {if *locating {
                html! {
                    <>
                        <span class="loading loading-spinner loading-xs"></span>
                        {ctx.text().locating}
                    </>
                }
            } else {
                html! {
                    <>
                        <i class="fas fa-location-crosshairs"></i>
                        {ctx.text().use_my_location}
                    </>
                }
            }}
        </button>
    }
}
