use serde::{Deserialize, Serialize};

/// Who the quotation is for. Drives the contextual acceptance adjustments.
///
/// Parsing is case-insensitive; unrecognised labels become `Other`, which
/// receives no client-specific adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ClientType {
    Student,
    #[default]
    Startup,
    Sme,
    Enterprise,
    Other,
}

impl ClientType {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "student" => Self::Student,
            "startup" => Self::Startup,
            "sme" => Self::Sme,
            "enterprise" => Self::Enterprise,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Startup => "startup",
            Self::Sme => "sme",
            Self::Enterprise => "enterprise",
            Self::Other => "other",
        }
    }
}

impl From<String> for ClientType {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for ClientType {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
