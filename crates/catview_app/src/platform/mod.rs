mod app;
mod config;
mod effects;
mod error;
mod logging;
mod preview;
mod ui;

pub use app::run_app;
pub use error::AppError;
