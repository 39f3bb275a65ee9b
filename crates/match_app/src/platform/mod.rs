mod app;
pub mod config;
mod effects;
mod logging;
mod report;
mod ui;

pub use app::{run_app, Outcome};
