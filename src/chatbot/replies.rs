//! Fixed reply text. Every user-facing string the chat core can produce
//! lives here; templates interpolate profile fields and nothing else.

use crate::models::ProfileSummary;

/// Refusal for diagnostic/treatment requests. Terminal; rendered before
/// any data access.
pub const REFUSAL: &str =
    "I can't provide medical diagnosis or treatment advice. Please consult a qualified doctor.";

/// Help text for messages matching no supported topic.
pub const UNKNOWN_HELP: &str =
    "I can help you with blood group, allergies, medications, and medical reports. Try asking about them.";

/// Input-validation failure: empty message or missing patient context.
pub const MISSING_CONTEXT: &str = "Message or patient context missing.";

/// Turn-level failure when the data store is unreachable.
pub const SERVICE_ERROR: &str = "Chatbot service error. Please try again later.";

pub const BLOOD_GROUP_MISSING: &str = "Blood group information is not available in your profile.";
pub const NO_MEDICATIONS: &str = "No current medications are listed.";
pub const PROFILE_NOT_FOUND: &str = "Your medical profile is not found.";
pub const NO_REPORTS: &str = "No medical reports found.";
pub const NO_RECORDS_UPLOADED: &str = "You have not uploaded any medical records.";

const NONE_LISTED: &str = "None listed";
const NOT_AVAILABLE: &str = "N/A";

pub fn blood_group(blood_type: &str) -> String {
    format!("Your blood group is {blood_type}.")
}

pub fn allergies(drug: Option<&str>, other: Option<&str>) -> String {
    format!(
        "Drug allergies: {}.\nOther allergies: {}.",
        present_or(drug, NONE_LISTED),
        present_or(other, NONE_LISTED),
    )
}

pub fn medications(current: &str) -> String {
    format!("Your current medications are: {current}.")
}

pub fn profile_summary(profile: &ProfileSummary) -> String {
    format!(
        "Profile Summary:\nBlood Group: {}\nMedications: {}\nDrug Allergies: {}\nOther Allergies: {}",
        present_or(profile.blood_type.as_deref(), NOT_AVAILABLE),
        present_or(profile.current_medications.as_deref(), NOT_AVAILABLE),
        present_or(profile.drug_allergies.as_deref(), NOT_AVAILABLE),
        present_or(profile.other_allergies.as_deref(), NOT_AVAILABLE),
    )
}

pub fn latest_report(title: &str, record_type: &str) -> String {
    format!("Your latest report is \"{title}\" ({record_type}).")
}

pub fn record_count(count: i64) -> String {
    format!("You have {count} medical records uploaded.")
}

fn present_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_group_template() {
        assert_eq!(blood_group("O+"), "Your blood group is O+.");
    }

    #[test]
    fn allergies_defaults_each_field_independently() {
        assert_eq!(
            allergies(Some("Penicillin"), None),
            "Drug allergies: Penicillin.\nOther allergies: None listed."
        );
        assert_eq!(
            allergies(Some(""), Some("Peanuts")),
            "Drug allergies: None listed.\nOther allergies: Peanuts."
        );
    }

    #[test]
    fn profile_summary_fills_missing_fields_with_na() {
        let summary = ProfileSummary {
            blood_type: Some("B-".into()),
            current_medications: None,
            drug_allergies: Some("Sulfa".into()),
            other_allergies: None,
        };
        let text = profile_summary(&summary);
        assert!(text.starts_with("Profile Summary:"));
        assert!(text.contains("Blood Group: B-"));
        assert!(text.contains("Medications: N/A"));
        assert!(text.contains("Other Allergies: N/A"));
    }

    #[test]
    fn latest_report_quotes_title() {
        assert_eq!(
            latest_report("CBC Panel", "Lab Report"),
            "Your latest report is \"CBC Panel\" (Lab Report)."
        );
    }

    #[test]
    fn record_count_template() {
        assert_eq!(record_count(3), "You have 3 medical records uploaded.");
    }
}
