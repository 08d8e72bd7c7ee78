pub mod app;
pub mod calendar;
pub mod config;
pub mod date_window;
pub mod editor;
pub mod errors;
pub mod handlers;
pub mod indicators;
pub mod models;
pub mod remote;
pub mod session;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
