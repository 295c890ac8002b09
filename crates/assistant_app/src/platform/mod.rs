mod app;
mod config;
mod effects;
mod keys;
mod logging;
mod persistence;
mod terminal;
mod ui;

pub use app::run_app;
