use yew::prelude::*;

use crate::context::use_app_context;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let ctx = use_app_context();

    let on_toggle_language = {
        let ctx = ctx.clone();
        Callback::from(move |_| ctx.toggle_language())
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="my-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <button
                    class="btn btn-ghost btn-sm"
                    title={ctx.text().language_label}
                    onclick={on_toggle_language}
                >
                    <i class="fas fa-language text-xl"></i>
                    <span class="font-semibold">{ctx.language.toggled().tag()}</span>
                </button>
            </div>
        </div>
    }
}
