use crate::errors::{AppError, StorageError};
use crate::models::{decode_day_records, HabitData};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// Reads the habits file. A missing or blank file is an empty map; anything
/// else that cannot be decoded is an error so the file is never replaced by
/// an empty one.
pub async fn load_data(path: &Path) -> Result<HabitData, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(HabitData::default()),
        Err(err) => return Err(StorageError::Read(err)),
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(HabitData::default());
    }

    let raw: BTreeMap<String, Value> = serde_json::from_slice(&bytes)?;
    let (days, rejected) = decode_day_records(raw);
    if let Some((date, source)) = rejected.into_iter().next() {
        return Err(StorageError::InvalidRecord { date, source });
    }
    Ok(HabitData { days })
}

pub async fn persist_data(path: &Path, data: &HabitData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("habit_calendar_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_and_empty_files_load_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path).await;
        assert!(load_data(&path).await.unwrap().days.is_empty());

        let path = temp_path("empty");
        fs::write(&path, b"").await.unwrap();
        assert!(load_data(&path).await.unwrap().days.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_data_loads_back() {
        let path = temp_path("roundtrip");
        let mut data = HabitData::default();
        data.days.insert(
            "2025-11-10".to_string(),
            DayRecord {
                alcohol: 1,
                exercise: true,
                drugs: false,
                notes: "run".to_string(),
            },
        );
        persist_data(&path, &data).await.unwrap();

        let loaded = load_data(&path).await.unwrap();
        assert_eq!(loaded.days, data.days);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn null_notes_from_older_files_still_load() {
        let path = temp_path("null_notes");
        fs::write(
            &path,
            br#"{
  "2025-11-10": {"alcohol": 2, "exercise": true, "drugs": false, "notes": "gym"},
  "2025-11-11": {"alcohol": 0, "exercise": false, "drugs": false, "notes": null}
}"#,
        )
        .await
        .unwrap();

        let mut data = load_data(&path).await.unwrap();
        assert_eq!(data.days.len(), 2);
        assert_eq!(data.days["2025-11-11"].notes, "");

        data.days.insert("2025-11-12".to_string(), DayRecord::default());
        persist_data(&path, &data).await.unwrap();
        let reloaded = load_data(&path).await.unwrap();
        assert_eq!(reloaded.days.len(), 3);
        assert_eq!(reloaded.days["2025-11-10"].notes, "gym");
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn undecodable_files_are_errors_and_left_alone() {
        let path = temp_path("bad_record");
        let contents = br#"{"2025-11-10": {"alcohol": 2}, "2025-11-11": {"alcohol": -4}}"#;
        fs::write(&path, contents).await.unwrap();
        let err = load_data(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord { ref date, .. } if date == "2025-11-11"));
        assert_eq!(fs::read(&path).await.unwrap(), contents.to_vec());

        fs::write(&path, b"[1, 2, 3]").await.unwrap();
        assert!(matches!(load_data(&path).await, Err(StorageError::Parse(_))));
        let _ = fs::remove_file(&path).await;
    }
}
