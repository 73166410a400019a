//! Deterministic keyword-to-intent classifier: the guaranteed-available
//! fallback behind the prediction service, and the safety net for
//! diagnostic-sounding messages.

use super::types::Intent;

/// One keyword-membership rule: matches when any trigger occurs as a
/// substring of the normalized message.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    pub triggers: Vec<String>,
}

impl IntentRule {
    pub fn new(intent: Intent, triggers: &[&str]) -> Self {
        Self {
            intent,
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }
}

/// Ordered rule list, evaluated first-match-wins. The keyword lists are
/// data, not code: callers may supply their own rules.
///
/// Construction moves unsafe-request rules ahead of every data-returning
/// rule, whatever order the caller wrote them in. A message matching both
/// ("do I have a report of my diagnosis") must refuse, never read.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<IntentRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        let (mut ordered, data_rules): (Vec<_>, Vec<_>) = rules
            .into_iter()
            .partition(|r| r.intent == Intent::UnsafeMedicalRequest);
        ordered.extend(data_rules);
        Self { rules: ordered }
    }

    /// Classify a normalized message. Never fails, never touches stored
    /// data; no rule matching yields `Intent::Unknown`.
    pub fn classify(&self, normalized: &str) -> Intent {
        self.rules
            .iter()
            .find(|r| r.matches(normalized))
            .map(|r| r.intent)
            .unwrap_or(Intent::Unknown)
    }
}

impl Default for RuleSet {
    /// The stock rule list. Order matters within the data rules:
    /// "latest report" is tested before the generic "report" group so the
    /// more specific phrase wins.
    fn default() -> Self {
        Self::new(vec![
            IntentRule::new(
                Intent::UnsafeMedicalRequest,
                &[
                    "diagnose",
                    "diagnosis",
                    "treat",
                    "treatment",
                    "am i",
                    "do i have",
                    "diabetic",
                    "diabetes",
                ],
            ),
            IntentRule::new(Intent::GetBloodGroup, &["blood", "blood group", "blood type"]),
            IntentRule::new(Intent::GetAllergies, &["allergy", "allergies"]),
            IntentRule::new(
                Intent::GetMedications,
                &["medicine", "medication", "medicines"],
            ),
            IntentRule::new(Intent::GetProfileSummary, &["summary", "profile"]),
            IntentRule::new(
                Intent::GetLatestReport,
                &["latest report", "recent report"],
            ),
            IntentRule::new(Intent::GetReportList, &["report", "records"]),
        ])
    }
}
