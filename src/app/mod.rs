pub mod actions;
mod app;
pub mod background;
pub mod events;

pub use app::App;
