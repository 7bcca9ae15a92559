use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod pages;
mod routes;
mod services;

use routes::{switch, Route};
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let config = AppConfig::load();
    Logger::init(&config);
    Logger::info_with_component("app", &format!("Trip planner using API at {}", ApiClient::new().base_url()));

    yew::Renderer::<App>::new().render();
}
