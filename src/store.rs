use crate::errors::ClientError;
use crate::models::{DatedRecord, DayRecord};
use crate::remote::HabitsRemote;
use std::collections::BTreeMap;
use tracing::{error, info};

/// Local cache of the remote records, keyed by `YYYY-MM-DD`.
///
/// The map only changes once the remote has answered: `load_all` replaces
/// it with a fresh snapshot and `save` inserts a record the remote accepted.
#[derive(Debug)]
pub struct DayRecordStore<R> {
    remote: R,
    records: BTreeMap<String, DayRecord>,
}

impl<R: HabitsRemote> DayRecordStore<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            records: BTreeMap::new(),
        }
    }

    pub async fn load_all(&mut self) -> Result<&BTreeMap<String, DayRecord>, ClientError> {
        match self.remote.fetch_all().await {
            Ok(records) => {
                info!("loaded {} day records", records.len());
                self.records = records;
                Ok(&self.records)
            }
            Err(err) => {
                error!("keeping {} cached day records: {err}", self.records.len());
                Err(err)
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<&DayRecord> {
        self.records.get(date)
    }

    pub fn records(&self) -> &BTreeMap<String, DayRecord> {
        &self.records
    }

    pub async fn save(&mut self, record: DatedRecord) -> Result<(), ClientError> {
        if let Err(err) = self.remote.push(&record).await {
            error!("failed to save {}: {err}", record.date);
            return Err(err);
        }

        self.records.insert(record.date, record.record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::FakeRemote;

    fn dated(date: &str, alcohol: u8) -> DatedRecord {
        DatedRecord {
            date: date.to_string(),
            record: DayRecord {
                alcohol,
                exercise: true,
                drugs: false,
                notes: "walk".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn load_all_replaces_cache_with_snapshot() {
        let remote = FakeRemote::with_records([(
            "2025-11-10".to_string(),
            DayRecord {
                alcohol: 2,
                ..DayRecord::default()
            },
        )]);
        let mut store = DayRecordStore::new(remote);

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(store.get("2025-11-10").map(|r| r.alcohol), Some(2));
        assert!(store.get("2025-11-11").is_none());
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_state() {
        let remote = FakeRemote::default();
        let mut store = DayRecordStore::new(remote.clone());
        store.save(dated("2025-11-12", 1)).await.unwrap();

        remote.set_fail_loads(true);
        let err = store.load_all().await.unwrap_err();
        assert!(matches!(err, ClientError::LoadFailure(_)));
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn saved_record_reads_back_unchanged() {
        let mut store = DayRecordStore::new(FakeRemote::default());
        let record = dated("2025-11-13", 4);
        store.save(record.clone()).await.unwrap();
        assert_eq!(store.get("2025-11-13"), Some(&record.record));
    }

    #[tokio::test]
    async fn failed_save_leaves_cache_untouched() {
        let remote = FakeRemote::default();
        let mut store = DayRecordStore::new(remote.clone());
        store.save(dated("2025-11-14", 0)).await.unwrap();

        remote.set_fail_saves(true);
        let err = store.save(dated("2025-11-14", 5)).await.unwrap_err();
        assert!(matches!(err, ClientError::SaveFailure(_)));
        assert_eq!(store.get("2025-11-14").map(|r| r.alcohol), Some(0));
        assert_eq!(remote.push_count(), 2);
    }
}
