//! Process configuration read from the environment (and `.env` when present).

mod app;
pub use app::AppConfig;
