//! Chat turn orchestration.
//!
//! Coordinates: validate → resolve intent → safety gate → scoped read +
//! fixed template. The safety gate runs strictly before any data access;
//! a refused turn never touches the reader.

use super::predictor::IntentPredictor;
use super::replies;
use super::resolver::IntentResolver;
use super::rules::RuleSet;
use super::store::PatientReader;
use super::types::{ChatReply, Intent};
use super::ChatError;

pub struct ChatEngine<P: IntentPredictor, R: PatientReader> {
    resolver: IntentResolver<P>,
    reader: R,
}

impl<P: IntentPredictor, R: PatientReader> ChatEngine<P, R> {
    pub fn new(predictor: P, reader: R) -> Self {
        Self {
            resolver: IntentResolver::new(predictor),
            reader,
        }
    }

    pub fn with_rules(predictor: P, rules: RuleSet, reader: R) -> Self {
        Self {
            resolver: IntentResolver::with_rules(predictor, rules),
            reader,
        }
    }

    /// Handle one chat turn. Always returns a reply; every failure path
    /// degrades to user-visible text.
    pub fn handle_turn(&self, message: &str, patient_id: &str) -> ChatReply {
        // Step 1: validate inputs; failures never reach a classifier
        if message.trim().is_empty() || patient_id.trim().is_empty() {
            return ChatReply::failure(replies::MISSING_CONTEXT);
        }

        // Step 2: resolve exactly one intent
        let resolved = self.resolver.resolve(message);
        tracing::info!(
            intent = resolved.intent.as_str(),
            source = resolved.source.as_str(),
            "Chat turn classified"
        );

        // Step 3: safety gate, terminal, before any data access
        if resolved.intent == Intent::UnsafeMedicalRequest {
            tracing::info!("Diagnostic or treatment request refused");
            return ChatReply::ok(replies::REFUSAL);
        }

        // Step 4: one scoped read + fixed template
        match self.compose(resolved.intent, patient_id) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Patient data read failed");
                ChatReply::failure(replies::SERVICE_ERROR)
            }
        }
    }

    fn compose(&self, intent: Intent, patient_id: &str) -> Result<ChatReply, ChatError> {
        let reply = match intent {
            Intent::GetBloodGroup => match self.reader.blood_type(patient_id)? {
                Some(blood_type) if !blood_type.trim().is_empty() => {
                    replies::blood_group(&blood_type)
                }
                _ => replies::BLOOD_GROUP_MISSING.to_string(),
            },

            Intent::GetAllergies => {
                let fields = self.reader.allergies(patient_id)?.unwrap_or_default();
                replies::allergies(
                    fields.drug_allergies.as_deref(),
                    fields.other_allergies.as_deref(),
                )
            }

            Intent::GetMedications => match self.reader.medications(patient_id)? {
                Some(current) if !current.trim().is_empty() => replies::medications(&current),
                _ => replies::NO_MEDICATIONS.to_string(),
            },

            Intent::GetProfileSummary => match self.reader.profile_summary(patient_id)? {
                Some(profile) => replies::profile_summary(&profile),
                None => replies::PROFILE_NOT_FOUND.to_string(),
            },

            Intent::GetLatestReport => match self.reader.latest_record_meta(patient_id)? {
                Some(meta) => replies::latest_report(&meta.title, meta.record_type.label()),
                None => replies::NO_REPORTS.to_string(),
            },

            Intent::GetReportList => {
                let count = self.reader.record_count(patient_id)?;
                if count > 0 {
                    replies::record_count(count)
                } else {
                    replies::NO_RECORDS_UPLOADED.to_string()
                }
            }

            Intent::Unknown => replies::UNKNOWN_HELP.to_string(),

            // The gate in handle_turn refuses before composition ever
            // runs; refuse again here rather than read anything.
            Intent::UnsafeMedicalRequest => replies::REFUSAL.to_string(),
        };

        Ok(ChatReply::ok(reply))
    }
}
