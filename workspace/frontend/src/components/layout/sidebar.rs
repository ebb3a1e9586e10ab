use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_app_context;
use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let ctx = use_app_context();
    let text = ctx.text();

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="my-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-tractor"></i>
                        </div>
                        <div class="flex flex-col">
                            <span class="text-2xl font-bold tracking-tight">{text.app_name}</span>
                            <span class="text-xs text-gray-500">{text.tagline}</span>
                        </div>
                    </div>
                </li>

                <li><Link<Route> to={Route::Dashboard} classes="nav-link"><i class="fas fa-home w-5"></i> {text.nav_dashboard}</Link<Route>></li>
                <li><Link<Route> to={Route::Compare} classes="nav-link"><i class="fas fa-scale-balanced w-5"></i> {text.nav_compare}</Link<Route>></li>
                <li><Link<Route> to={Route::Trends} classes="nav-link"><i class="fas fa-chart-line w-5"></i> {text.nav_trends}</Link<Route>></li>

                <div class="divider"></div>

                <li><Link<Route> to={Route::About} classes="nav-link"><i class="fas fa-circle-info w-5"></i> {text.nav_about}</Link<Route>></li>
                <li><Link<Route> to={Route::Settings} classes="nav-link"><i class="fas fa-cog w-5"></i> {text.nav_settings}</Link<Route>></li>
            </ul>
        </div>
    }
}
