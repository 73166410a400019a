//! Patient + record persistence.
//!
//! Read functions are field-scoped on purpose: each SQL statement names
//! exactly the columns its caller needs, so the chat core can never see
//! more of a profile than the resolved intent requires. Latest-record
//! lookups exclude the BLOB payload column entirely.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use super::DatabaseError;
use crate::models::enums::RecordType;
use crate::models::{AllergyFields, MedicalRecord, Patient, ProfileSummary, RecordMeta};

// ═══════════════════════════════════════════
// Patient repository
// ═══════════════════════════════════════════

/// Insert a patient, or update every profile field if the id exists.
pub fn upsert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patients (patient_id, name, date_of_birth, gender, blood_type,
         emergency_contacts, current_medications, drug_allergies, other_allergies,
         recent_surgeries, medical_devices, dnr_status, organ_donor, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
         ON CONFLICT(patient_id) DO UPDATE SET
           name = excluded.name,
           date_of_birth = excluded.date_of_birth,
           gender = excluded.gender,
           blood_type = excluded.blood_type,
           emergency_contacts = excluded.emergency_contacts,
           current_medications = excluded.current_medications,
           drug_allergies = excluded.drug_allergies,
           other_allergies = excluded.other_allergies,
           recent_surgeries = excluded.recent_surgeries,
           medical_devices = excluded.medical_devices,
           dnr_status = excluded.dnr_status,
           organ_donor = excluded.organ_donor,
           updated_at = excluded.updated_at",
        params![
            patient.patient_id,
            patient.name,
            patient.date_of_birth,
            patient.gender,
            patient.blood_type,
            patient.emergency_contacts,
            patient.current_medications,
            patient.drug_allergies,
            patient.other_allergies,
            patient.recent_surgeries,
            patient.medical_devices,
            patient.dnr_status as i32,
            patient.organ_donor as i32,
            patient.created_at.to_string(),
            patient.updated_at.to_string(),
        ],
    )?;
    Ok(())
}

struct PatientRow {
    patient_id: String,
    name: Option<String>,
    date_of_birth: Option<String>,
    gender: Option<String>,
    blood_type: Option<String>,
    emergency_contacts: Option<String>,
    current_medications: Option<String>,
    drug_allergies: Option<String>,
    other_allergies: Option<String>,
    recent_surgeries: Option<String>,
    medical_devices: Option<String>,
    dnr_status: i32,
    organ_donor: i32,
    created_at: String,
    updated_at: String,
}

fn patient_from_row(row: PatientRow) -> Result<Patient, DatabaseError> {
    Ok(Patient {
        patient_id: row.patient_id,
        name: row.name,
        date_of_birth: row.date_of_birth,
        gender: row.gender,
        blood_type: row.blood_type,
        emergency_contacts: row.emergency_contacts,
        current_medications: row.current_medications,
        drug_allergies: row.drug_allergies,
        other_allergies: row.other_allergies,
        recent_surgeries: row.recent_surgeries,
        medical_devices: row.medical_devices,
        dnr_status: row.dnr_status != 0,
        organ_donor: row.organ_donor != 0,
        created_at: parse_timestamp(&row.created_at)?,
        updated_at: parse_timestamp(&row.updated_at)?,
    })
}

pub fn get_patient(conn: &Connection, patient_id: &str) -> Result<Option<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT patient_id, name, date_of_birth, gender, blood_type, emergency_contacts,
         current_medications, drug_allergies, other_allergies, recent_surgeries,
         medical_devices, dnr_status, organ_donor, created_at, updated_at
         FROM patients WHERE patient_id = ?1",
    )?;

    let result = stmt
        .query_row(params![patient_id], |row| {
            Ok(PatientRow {
                patient_id: row.get(0)?,
                name: row.get(1)?,
                date_of_birth: row.get(2)?,
                gender: row.get(3)?,
                blood_type: row.get(4)?,
                emergency_contacts: row.get(5)?,
                current_medications: row.get(6)?,
                drug_allergies: row.get(7)?,
                other_allergies: row.get(8)?,
                recent_surgeries: row.get(9)?,
                medical_devices: row.get(10)?,
                dnr_status: row.get(11)?,
                organ_donor: row.get(12)?,
                created_at: row.get(13)?,
                updated_at: row.get(14)?,
            })
        })
        .optional()?;

    match result {
        Some(row) => Ok(Some(patient_from_row(row)?)),
        None => Ok(None),
    }
}

/// Blood type only. `None` covers both a missing patient and an unset field;
/// the composer renders the same fallback text for either.
pub fn patient_blood_type(
    conn: &Connection,
    patient_id: &str,
) -> Result<Option<String>, DatabaseError> {
    let field = conn
        .query_row(
            "SELECT blood_type FROM patients WHERE patient_id = ?1",
            params![patient_id],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?;
    Ok(field.flatten())
}

/// Allergy fields only. `None` means the patient row is absent.
pub fn patient_allergies(
    conn: &Connection,
    patient_id: &str,
) -> Result<Option<AllergyFields>, DatabaseError> {
    let fields = conn
        .query_row(
            "SELECT drug_allergies, other_allergies FROM patients WHERE patient_id = ?1",
            params![patient_id],
            |row| {
                Ok(AllergyFields {
                    drug_allergies: row.get(0)?,
                    other_allergies: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(fields)
}

/// Current medications only.
pub fn patient_medications(
    conn: &Connection,
    patient_id: &str,
) -> Result<Option<String>, DatabaseError> {
    let field = conn
        .query_row(
            "SELECT current_medications FROM patients WHERE patient_id = ?1",
            params![patient_id],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?;
    Ok(field.flatten())
}

/// Summary fields only. `None` means the patient row is absent.
pub fn patient_profile_summary(
    conn: &Connection,
    patient_id: &str,
) -> Result<Option<ProfileSummary>, DatabaseError> {
    let summary = conn
        .query_row(
            "SELECT blood_type, current_medications, drug_allergies, other_allergies
             FROM patients WHERE patient_id = ?1",
            params![patient_id],
            |row| {
                Ok(ProfileSummary {
                    blood_type: row.get(0)?,
                    current_medications: row.get(1)?,
                    drug_allergies: row.get(2)?,
                    other_allergies: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(summary)
}

// ═══════════════════════════════════════════
// Medical record repository
// ═══════════════════════════════════════════

pub fn insert_record(conn: &Connection, record: &MedicalRecord) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO medical_records (id, patient_id, record_type, title, file_name,
         file_mime_type, file_size, file_data, uploaded_by, uploaded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            record.id.to_string(),
            record.patient_id,
            record.record_type.as_str(),
            record.title,
            record.file_name,
            record.file_mime_type,
            record.file_size,
            record.file_data,
            record.uploaded_by.as_str(),
            record.uploaded_at.to_string(),
        ],
    )?;
    Ok(())
}

/// Title + type of this patient's most recently uploaded record.
/// The BLOB column is never selected here.
pub fn latest_record_meta(
    conn: &Connection,
    patient_id: &str,
) -> Result<Option<RecordMeta>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT title, record_type FROM medical_records
             WHERE patient_id = ?1
             ORDER BY uploaded_at DESC, rowid DESC
             LIMIT 1",
            params![patient_id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;

    match row {
        Some((title, raw_type)) => Ok(Some(RecordMeta {
            title,
            record_type: RecordType::from_str(&raw_type)?,
        })),
        None => Ok(None),
    }
}

/// Number of records this patient has uploaded.
pub fn count_records(conn: &Connection, patient_id: &str) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM medical_records WHERE patient_id = ?1",
        params![patient_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, DatabaseError> {
    NaiveDateTime::from_str(raw).map_err(|e| DatabaseError::InvalidValue {
        field: "timestamp".into(),
        value: format!("{raw}: {e}"),
    })
}
