use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/month/prev", post(handlers::month_prev))
        .route("/month/next", post(handlers::month_next))
        .route("/day/:date/open", post(handlers::open_day))
        .route("/editor/save", post(handlers::editor_save))
        .route("/editor/cancel", post(handlers::editor_cancel))
        .route("/api/habits", get(handlers::get_habits).post(handlers::save_habit))
        .with_state(state)
}
