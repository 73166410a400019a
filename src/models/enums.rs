use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(RecordType {
    LabReport => "lab_report",
    Prescription => "prescription",
    MedicalReport => "medical_report",
    Scan => "scan",
    Other => "other",
});

impl RecordType {
    /// Human-readable label used in chat replies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LabReport => "Lab Report",
            Self::Prescription => "Prescription",
            Self::MedicalReport => "Medical Report",
            Self::Scan => "Scan",
            Self::Other => "Other",
        }
    }
}

str_enum!(UploadedBy {
    User => "user",
    Admin => "admin",
});
