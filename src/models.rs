use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Labels for the ordinal alcohol scale, indexed by level.
pub const ALCOHOL_LABELS: [&str; 6] = [
    "No drinks",
    "Few drinks",
    "Tipsy",
    "Drunk",
    "Hammered",
    "Black out",
];

pub const MAX_ALCOHOL_LEVEL: u8 = 5;

pub fn alcohol_label(level: u8) -> &'static str {
    ALCOHOL_LABELS
        .get(usize::from(level))
        .copied()
        .unwrap_or("Unknown")
}

/// Tracked attributes for one calendar date. The date itself is the key
/// of whatever map holds the record. Missing or `null` fields decode to
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alcohol: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercise: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drugs: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes every entry of a `date -> record` map on its own so one bad
/// record cannot take the rest down. Entries that fail come back with
/// their date.
pub fn decode_day_records(
    raw: BTreeMap<String, serde_json::Value>,
) -> (BTreeMap<String, DayRecord>, Vec<(String, serde_json::Error)>) {
    let mut records = BTreeMap::new();
    let mut rejected = Vec::new();
    for (date, value) in raw {
        match serde_json::from_value::<DayRecord>(value) {
            Ok(record) => {
                records.insert(date, record);
            }
            Err(err) => rejected.push((date, err)),
        }
    }
    (records, rejected)
}

/// A record together with its date, as sent by `POST /api/habits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedRecord {
    pub date: String,
    #[serde(flatten)]
    pub record: DayRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HabitData {
    pub days: BTreeMap<String, DayRecord>,
}

/// Body of `POST /api/habits`. Everything but the date falls back to the
/// defaults when missing.
#[derive(Debug, Deserialize)]
pub struct SaveHabitRequest {
    pub date: Option<String>,
    #[serde(flatten)]
    pub record: DayRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveHabitResponse {
    pub success: bool,
    pub data: DayRecord,
}

/// Values posted by the day editor form.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EditorForm {
    #[serde(default)]
    pub alcohol: String,
    #[serde(default)]
    pub exercise: bool,
    #[serde(default)]
    pub drugs: bool,
    #[serde(default)]
    pub notes: String,
}
