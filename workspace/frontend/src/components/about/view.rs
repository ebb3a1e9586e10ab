use yew::prelude::*;

use crate::context::use_app_context;

#[function_component(About)]
pub fn about() -> Html {
    let ctx = use_app_context();
    let text = ctx.text();

    html! {
        <div class="max-w-3xl">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{text.about_title}</h2>
                    <p class="mt-2 leading-relaxed">{text.about_scheme}</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <p class="leading-relaxed">{text.about_data}</p>
                </div>
            </div>
        </div>
    }
}
