use crate::date_window::parse_date_key;
use crate::errors::AppError;
use crate::models::{DayRecord, EditorForm, SaveHabitRequest, SaveHabitResponse, MAX_ALCOHOL_LEVEL};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_page;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use tracing::info;

pub async fn get_habits(State(state): State<AppState>) -> Json<BTreeMap<String, DayRecord>> {
    let data = state.data.lock().await;
    Json(data.days.clone())
}

pub async fn save_habit(
    State(state): State<AppState>,
    Json(payload): Json<SaveHabitRequest>,
) -> Result<Json<SaveHabitResponse>, AppError> {
    let date = payload
        .date
        .as_deref()
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .ok_or_else(|| AppError::bad_request("Date is required"))?;

    if parse_date_key(date).is_none() {
        return Err(AppError::bad_request("Invalid date format. Use YYYY-MM-DD"));
    }
    if payload.record.alcohol > MAX_ALCOHOL_LEVEL {
        return Err(AppError::bad_request(format!(
            "alcohol must be between 0 and {MAX_ALCOHOL_LEVEL}"
        )));
    }

    // The in-memory map only changes once the file write has gone through.
    let mut data = state.data.lock().await;
    let mut updated = data.clone();
    updated.days.insert(date.to_string(), payload.record.clone());
    persist_data(&state.data_path, &updated).await?;
    *data = updated;
    info!("stored habits for {date}");

    Ok(Json(SaveHabitResponse {
        success: true,
        data: payload.record,
    }))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.view.lock().await;
    let page = view.page(today());
    Html(render_page(&page, &view.editor, view.notice.as_deref()))
}

pub async fn month_prev(State(state): State<AppState>) -> Redirect {
    state.view.lock().await.prev_month();
    Redirect::to("/")
}

pub async fn month_next(State(state): State<AppState>) -> Redirect {
    state.view.lock().await.next_month(today());
    Redirect::to("/")
}

pub async fn open_day(State(state): State<AppState>, Path(date): Path<String>) -> Redirect {
    state.view.lock().await.open_day(&date, today());
    Redirect::to("/")
}

pub async fn editor_save(State(state): State<AppState>, Form(form): Form<EditorForm>) -> Redirect {
    // Failures are kept on the session as a notice and shown on the next render.
    let _ = state.view.lock().await.submit(&form).await;
    Redirect::to("/")
}

pub async fn editor_cancel(State(state): State<AppState>) -> Redirect {
    state.view.lock().await.cancel_edit();
    Redirect::to("/")
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
