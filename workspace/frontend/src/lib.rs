use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod context;
pub mod geo;
pub mod hooks;
pub mod settings;

use crate::common::toast::ToastProvider;
use components::about::About;
use components::compare::Compare;
use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use components::settings::Settings;
use components::trends::Trends;
use context::{use_app_context, AppProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/compare")]
    Compare,
    #[at("/trends")]
    Trends,
    #[at("/about")]
    About,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::Compare => {
            log::trace!("Rendering Compare page");
            html! { <ComparePage /> }
        }
        Route::Trends => {
            log::trace!("Rendering Trends page");
            html! { <TrendsPage /> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <SettingsPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}

// Page wrappers resolve the localized title before handing off to Layout.

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    let ctx = use_app_context();
    html! { <Layout title={ctx.text().nav_dashboard}><Dashboard /></Layout> }
}

#[function_component(ComparePage)]
fn compare_page() -> Html {
    let ctx = use_app_context();
    html! { <Layout title={ctx.text().nav_compare}><Compare /></Layout> }
}

#[function_component(TrendsPage)]
fn trends_page() -> Html {
    let ctx = use_app_context();
    html! { <Layout title={ctx.text().nav_trends}><Trends /></Layout> }
}

#[function_component(AboutPage)]
fn about_page() -> Html {
    let ctx = use_app_context();
    html! { <Layout title={ctx.text().nav_about}><About /></Layout> }
}

#[function_component(SettingsPage)]
fn settings_page() -> Html {
    let ctx = use_app_context();
    html! { <Layout title={ctx.text().nav_settings}><Settings /></Layout> }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let ctx = use_app_context();
    html! {
        <Layout title={ctx.text().not_found}>
            <h1 class="text-2xl font-bold">{"404"}</h1>
            <p class="mt-2">{ctx.text().not_found}</p>
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </AppProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== NREGA Darpan Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Data service base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
