use serde::{Deserialize, Serialize};

/// The classified purpose of a message. Closed enumeration: nothing
/// outside this set ever reaches the response composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    GetBloodGroup,
    GetAllergies,
    GetMedications,
    GetProfileSummary,
    GetLatestReport,
    GetReportList,
    UnsafeMedicalRequest,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetBloodGroup => "GET_BLOOD_GROUP",
            Self::GetAllergies => "GET_ALLERGIES",
            Self::GetMedications => "GET_MEDICATIONS",
            Self::GetProfileSummary => "GET_PROFILE_SUMMARY",
            Self::GetLatestReport => "GET_LATEST_REPORT",
            Self::GetReportList => "GET_REPORT_LIST",
            Self::UnsafeMedicalRequest => "UNSAFE_MEDICAL_REQUEST",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Coerce a raw tag from the prediction service into the closed set.
    /// Anything unrecognized (or empty) is `None`; raw strings are never
    /// carried past this boundary.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim() {
            "GET_BLOOD_GROUP" => Some(Self::GetBloodGroup),
            "GET_ALLERGIES" => Some(Self::GetAllergies),
            "GET_MEDICATIONS" => Some(Self::GetMedications),
            "GET_PROFILE_SUMMARY" => Some(Self::GetProfileSummary),
            "GET_LATEST_REPORT" => Some(Self::GetLatestReport),
            "GET_REPORT_LIST" => Some(Self::GetReportList),
            "UNSAFE_MEDICAL_REQUEST" => Some(Self::UnsafeMedicalRequest),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Which classifier produced the final intent. Observability only;
/// nothing branches on this after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierSource {
    Primary,
    Fallback,
}

impl ClassifierSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

/// One resolved turn: exactly one intent, tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub source: ClassifierSource,
}

/// The turn's outcome. Always produced: absent data renders fallback
/// text rather than failing the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub reply: String,
}

impl ChatReply {
    pub fn ok(reply: impl Into<String>) -> Self {
        Self {
            success: true,
            reply: reply.into(),
        }
    }

    pub fn failure(reply: impl Into<String>) -> Self {
        Self {
            success: false,
            reply: reply.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wire_accepts_every_canonical_tag() {
        for (tag, intent) in [
            ("GET_BLOOD_GROUP", Intent::GetBloodGroup),
            ("GET_ALLERGIES", Intent::GetAllergies),
            ("GET_MEDICATIONS", Intent::GetMedications),
            ("GET_PROFILE_SUMMARY", Intent::GetProfileSummary),
            ("GET_LATEST_REPORT", Intent::GetLatestReport),
            ("GET_REPORT_LIST", Intent::GetReportList),
            ("UNSAFE_MEDICAL_REQUEST", Intent::UnsafeMedicalRequest),
            ("UNKNOWN", Intent::Unknown),
        ] {
            assert_eq!(Intent::from_wire(tag), Some(intent));
            assert_eq!(intent.as_str(), tag);
        }
    }

    #[test]
    fn from_wire_rejects_unrecognized_tags() {
        assert_eq!(Intent::from_wire(""), None);
        assert_eq!(Intent::from_wire("GET_EVERYTHING"), None);
        assert_eq!(Intent::from_wire("get_blood_group"), None);
    }

    #[test]
    fn from_wire_trims_whitespace() {
        assert_eq!(
            Intent::from_wire(" GET_ALLERGIES\n"),
            Some(Intent::GetAllergies)
        );
    }

    #[test]
    fn intent_serializes_as_wire_tag() {
        let json = serde_json::to_string(&Intent::UnsafeMedicalRequest).unwrap();
        assert_eq!(json, "\"UNSAFE_MEDICAL_REQUEST\"");
    }

    #[test]
    fn chat_reply_constructors() {
        let ok = ChatReply::ok("hi");
        assert!(ok.success);
        let failure = ChatReply::failure("missing");
        assert!(!failure.success);
        assert_eq!(failure.reply, "missing");
    }
}
