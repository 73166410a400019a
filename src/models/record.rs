use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use super::enums::{RecordType, UploadedBy};

/// An uploaded medical record, payload included.
#[derive(Debug, Clone)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub patient_id: String,
    pub record_type: RecordType,
    pub title: String,
    pub file_name: String,
    pub file_mime_type: String,
    pub file_size: Option<i64>,
    pub file_data: Vec<u8>,
    pub uploaded_by: UploadedBy,
    pub uploaded_at: NaiveDateTime,
}

/// Latest-record view. Never carries the file payload: queries producing
/// it must not select the BLOB column.
#[derive(Debug, Clone, Serialize)]
pub struct RecordMeta {
    pub title: String,
    pub record_type: RecordType,
}
