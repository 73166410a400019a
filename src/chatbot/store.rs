//! Scoped patient-data reads for the response composer.
//!
//! Each method reads exactly the fields its intent needs; the
//! data-minimization contract lives in this seam, not in the composer.

use rusqlite::Connection;

use crate::db::{repository, DatabaseError};
use crate::models::{AllergyFields, ProfileSummary, RecordMeta};

/// Read interface the composer consumes. All reads are scoped by
/// `patient_id`; no implementation may return another patient's data.
pub trait PatientReader {
    fn blood_type(&self, patient_id: &str) -> Result<Option<String>, DatabaseError>;
    fn allergies(&self, patient_id: &str) -> Result<Option<AllergyFields>, DatabaseError>;
    fn medications(&self, patient_id: &str) -> Result<Option<String>, DatabaseError>;
    fn profile_summary(&self, patient_id: &str) -> Result<Option<ProfileSummary>, DatabaseError>;
    fn latest_record_meta(&self, patient_id: &str) -> Result<Option<RecordMeta>, DatabaseError>;
    fn record_count(&self, patient_id: &str) -> Result<i64, DatabaseError>;
}

/// SQLite-backed reader delegating to the repository's field-scoped
/// queries.
pub struct SqlitePatientReader<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePatientReader<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl PatientReader for SqlitePatientReader<'_> {
    fn blood_type(&self, patient_id: &str) -> Result<Option<String>, DatabaseError> {
        repository::patient_blood_type(self.conn, patient_id)
    }

    fn allergies(&self, patient_id: &str) -> Result<Option<AllergyFields>, DatabaseError> {
        repository::patient_allergies(self.conn, patient_id)
    }

    fn medications(&self, patient_id: &str) -> Result<Option<String>, DatabaseError> {
        repository::patient_medications(self.conn, patient_id)
    }

    fn profile_summary(&self, patient_id: &str) -> Result<Option<ProfileSummary>, DatabaseError> {
        repository::patient_profile_summary(self.conn, patient_id)
    }

    fn latest_record_meta(&self, patient_id: &str) -> Result<Option<RecordMeta>, DatabaseError> {
        repository::latest_record_meta(self.conn, patient_id)
    }

    fn record_count(&self, patient_id: &str) -> Result<i64, DatabaseError> {
        repository::count_records(self.conn, patient_id)
    }
}
