use chrono::{DateTime, Local};

use super::models::{UploadRecord, UploadStatus, FALLBACK_FILE_NAME};
use super::picker::PickOutcome;
use crate::utils::format_timestamp;

/// Ordered uploads (newest first) plus the busy flag guarding the pick flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadList {
    records: Vec<UploadRecord>,
    busy: bool,
    last_id: i64,
}

impl UploadList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two sample rows the home screen starts with.
    pub fn seeded(now: DateTime<Local>) -> Self {
        let uploaded_at = format_timestamp(&now);
        Self::from_records(vec![
            UploadRecord {
                id: "1".to_string(),
                file_name: "Sample.pdf".to_string(),
                uploaded_at: uploaded_at.clone(),
                status: UploadStatus::Uploaded,
            },
            UploadRecord {
                id: "2".to_string(),
                file_name: "Chapter-1.pdf".to_string(),
                uploaded_at,
                status: UploadStatus::Ready,
            },
        ])
    }

    pub fn from_records(records: Vec<UploadRecord>) -> Self {
        let last_id = records
            .iter()
            .filter_map(|record| record.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            records,
            busy: false,
            last_id,
        }
    }

    pub fn records(&self) -> &[UploadRecord] {
        &self.records
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn add_upload(&mut self, file_name: Option<String>) -> &UploadRecord {
        self.add_upload_at(file_name, Local::now())
    }

    /// Prepends a `Ready` record. Ids follow the millisecond clock but never
    /// repeat or go backwards. A blank name counts as missing.
    pub fn add_upload_at(&mut self, file_name: Option<String>, now: DateTime<Local>) -> &UploadRecord {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        let file_name = file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        self.records.insert(
            0,
            UploadRecord {
                id: id.to_string(),
                file_name,
                uploaded_at: format_timestamp(&now),
                status: UploadStatus::Ready,
            },
        );
        &self.records[0]
    }

    /// Enters the pick flow. Returns `false` when a pick is already running.
    pub fn begin_pick(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Leaves the pick flow, adding a record unless the pick was cancelled.
    pub fn finish_pick(&mut self, outcome: PickOutcome) -> Option<UploadRecord> {
        self.busy = false;
        match outcome {
            PickOutcome::Cancelled => None,
            PickOutcome::Picked(document) => Some(self.add_upload(document.name).clone()),
        }
    }
}
