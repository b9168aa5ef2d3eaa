mod components;
mod config;
mod error;
mod input;
mod model;
mod resolver;
mod wheel;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}
