mod widgets;
mod constants;
mod models;
mod ordered_map;
mod catalog_client;
mod image_loader;
mod controllers;
mod ui;
mod application;
mod prelude;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    application::Application::new().activate()
}
