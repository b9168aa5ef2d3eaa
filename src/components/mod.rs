pub mod app;
pub mod config_panel;
pub mod controls_panel;
pub mod prize_wheel;
pub mod result_banner;
pub mod wheel_view;

pub use app::App;
