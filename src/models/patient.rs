use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A patient's emergency medical profile.
///
/// `patient_id` is the externally issued identifier patients log in with;
/// all reads elsewhere in the crate are scoped by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub emergency_contacts: Option<String>,
    pub current_medications: Option<String>,
    pub drug_allergies: Option<String>,
    pub other_allergies: Option<String>,
    pub recent_surgeries: Option<String>,
    pub medical_devices: Option<String>,
    pub dnr_status: bool,
    pub organ_donor: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Allergy fields only: the scoped view behind the allergy question.
#[derive(Debug, Clone, Default)]
pub struct AllergyFields {
    pub drug_allergies: Option<String>,
    pub other_allergies: Option<String>,
}

/// Summary fields only: the scoped view behind the profile question.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub blood_type: Option<String>,
    pub current_medications: Option<String>,
    pub drug_allergies: Option<String>,
    pub other_allergies: Option<String>,
}
