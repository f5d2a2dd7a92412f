use crate::app::App;
use crate::config::AppConfig;

mod api;
mod app;
mod components;
mod config;
mod pages;

fn main() {
    config::init(AppConfig::from_env());
    yew::Renderer::<App>::new().render();
}
