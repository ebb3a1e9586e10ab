use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::context::use_app_context;
use crate::settings;

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let ctx = use_app_context();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let text = ctx.text();

    let current = settings::get_settings();
    let host = use_state(|| current.api_host.clone());
    let port = use_state(|| current.api_port.to_string());

    let on_host = {
        let host = host.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            host.set(input.value());
        })
    };

    let on_port = {
        let port = port.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            port.set(input.value());
        })
    };

    let on_save = {
        let host = host.clone();
        let port = port.clone();
        let toast_ctx = toast_ctx.clone();
        let language = ctx.language;

        Callback::from(move |_| {
            let host_val = (*host).clone();
            let port_val = port.parse::<u16>().unwrap_or(3000);

            settings::update_settings(|s| {
                s.api_host = host_val.clone();
                s.api_port = port_val;
            });

            match settings::get_settings().save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved: host={} port={}", host_val, port_val);
                    toast_ctx.show_success(language.text().settings_saved.to_string());
                }
                Err(e) => {
                    log::error!("Failed to persist settings: {:?}", e);
                    toast_ctx.show_error(format!("{:?}", e));
                }
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{text.connection_settings}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{text.api_host_label}</span></label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={(*host).clone()}
                            oninput={on_host}
                        />
                    </div>
                    <div class="form-control w-full mt-2">
                        <label class="label"><span class="label-text">{text.api_port_label}</span></label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            value={(*port).clone()}
                            oninput={on_port}
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{text.save_settings}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
