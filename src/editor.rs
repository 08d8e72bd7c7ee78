use crate::errors::ClientError;
use crate::models::{DatedRecord, DayRecord, EditorForm, MAX_ALCOHOL_LEVEL};
use crate::remote::HabitsRemote;
use crate::store::DayRecordStore;

/// The unsaved copy of a record being edited. `alcohol` keeps whatever the
/// selector sent so an out-of-range value can be rejected on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub alcohol: i64,
    pub exercise: bool,
    pub drugs: bool,
    pub notes: String,
}

impl From<&DayRecord> for Draft {
    fn from(record: &DayRecord) -> Self {
        Self {
            alcohol: i64::from(record.alcohol),
            exercise: record.exercise,
            drugs: record.drugs,
            notes: record.notes.clone(),
        }
    }
}

impl Draft {
    /// Copies the form controls into the draft. The toggles and notes are
    /// always taken; the alcohol level only replaces the current one when it
    /// is on the scale, so the selector keeps showing a valid choice.
    pub fn bind(&mut self, form: &EditorForm) -> Result<(), ClientError> {
        self.exercise = form.exercise;
        self.drugs = form.drugs;
        self.notes = form.notes.clone();

        let alcohol = form.alcohol.trim().parse::<i64>().map_err(|_| {
            ClientError::ValidationFailure(format!("alcohol level {:?} is not a number", form.alcohol))
        })?;
        checked_alcohol(alcohol)?;
        self.alcohol = alcohol;
        Ok(())
    }

    pub fn to_record(&self, date: &str) -> Result<DatedRecord, ClientError> {
        let alcohol = checked_alcohol(self.alcohol)?;

        Ok(DatedRecord {
            date: date.to_string(),
            record: DayRecord {
                alcohol,
                exercise: self.exercise,
                drugs: self.drugs,
                notes: self.notes.trim().to_string(),
            },
        })
    }
}

fn checked_alcohol(level: i64) -> Result<u8, ClientError> {
    u8::try_from(level)
        .ok()
        .filter(|level| *level <= MAX_ALCOHOL_LEVEL)
        .ok_or_else(|| {
            ClientError::ValidationFailure(format!(
                "alcohol level must be between 0 and {MAX_ALCOHOL_LEVEL}, got {level}"
            ))
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Open { date: String, draft: Draft },
}

/// The single day editor. Closing always discards the draft.
#[derive(Debug, Default)]
pub struct DayEditor {
    state: EditorState,
}

impl DayEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    pub fn selected_date(&self) -> Option<&str> {
        match &self.state {
            EditorState::Open { date, .. } => Some(date),
            EditorState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            EditorState::Open { draft, .. } => Some(draft),
            EditorState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.state {
            EditorState::Open { draft, .. } => Some(draft),
            EditorState::Closed => None,
        }
    }

    pub fn open(&mut self, date: impl Into<String>, existing: Option<&DayRecord>) {
        self.state = EditorState::Open {
            date: date.into(),
            draft: existing.map(Draft::from).unwrap_or_default(),
        };
    }

    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Validates the draft and sends it through the store. The editor only
    /// closes once the remote has accepted the record.
    pub async fn save<R: HabitsRemote>(
        &mut self,
        store: &mut DayRecordStore<R>,
    ) -> Result<String, ClientError> {
        let EditorState::Open { date, draft } = &self.state else {
            return Err(ClientError::ValidationFailure("no day is being edited".to_string()));
        };

        let record = draft.to_record(date)?;
        let date = record.date.clone();
        store.save(record).await?;
        self.state = EditorState::Closed;
        Ok(date)
    }
}
