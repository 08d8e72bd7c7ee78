use crate::calendar::{build_calendar, CalendarPage};
use crate::date_window::{can_go_next, can_go_prev, date_key, is_editable, parse_date_key, MonthCursor};
use crate::editor::DayEditor;
use crate::errors::ClientError;
use crate::models::EditorForm;
use crate::remote::HabitsRemote;
use crate::store::DayRecordStore;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Everything the calendar view knows between requests: which month is
/// shown, the cached records, the editor, and the last message for the user.
#[derive(Debug)]
pub struct ViewSession<R> {
    pub cursor: MonthCursor,
    pub app_start: NaiveDate,
    pub store: DayRecordStore<R>,
    pub editor: DayEditor,
    pub notice: Option<String>,
}

impl<R: HabitsRemote> ViewSession<R> {
    pub fn new(remote: R, app_start: NaiveDate, today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::of(today),
            app_start,
            store: DayRecordStore::new(remote),
            editor: DayEditor::new(),
            notice: None,
        }
    }

    /// Pulls the remote snapshot. A failure is logged by the store and the
    /// view carries on with whatever it already had.
    pub async fn load(&mut self) {
        let _ = self.store.load_all().await;
    }

    pub fn prev_month(&mut self) -> bool {
        if !can_go_prev(self.cursor, self.app_start) {
            return false;
        }
        self.cursor = self.cursor.prev();
        true
    }

    pub fn next_month(&mut self, today: NaiveDate) -> bool {
        if !can_go_next(self.cursor, today) {
            return false;
        }
        self.cursor = self.cursor.next();
        true
    }

    pub fn open_day(&mut self, date_str: &str, today: NaiveDate) -> bool {
        let Some(date) = parse_date_key(date_str) else {
            warn!("ignoring open for malformed date {date_str:?}");
            return false;
        };
        if !is_editable(date, today, self.app_start) {
            warn!("ignoring open for {date} outside {}..={today}", self.app_start);
            return false;
        }

        let key = date_key(date);
        let existing = self.store.get(&key);
        self.editor.open(key.clone(), existing);
        self.notice = None;
        true
    }

    pub async fn submit(&mut self, form: &EditorForm) -> Result<String, ClientError> {
        let result = self.bind_and_save(form).await;
        match &result {
            Ok(date) => {
                info!("saved habits for {date}");
                self.notice = None;
            }
            Err(err) => {
                warn!("editor stays open: {err}");
                self.notice = Some(err.to_string());
            }
        }
        result
    }

    async fn bind_and_save(&mut self, form: &EditorForm) -> Result<String, ClientError> {
        let draft = self.editor.draft_mut().ok_or_else(|| {
            ClientError::ValidationFailure("no day is being edited".to_string())
        })?;
        draft.bind(form)?;
        self.editor.save(&mut self.store).await
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
        self.notice = None;
    }

    pub fn page(&self, today: NaiveDate) -> CalendarPage {
        build_calendar(self.cursor, today, self.app_start, self.store.records())
    }
}
