use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resume as delivered by the upstream resume parser.
///
/// `parsed_data` is absent when the parser could not extract anything; the
/// scoring flow still counts the resume and falls back to placeholder identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub parsed_data: Option<ResumeData>,
}

/// Structured fields extracted from a resume. Unknown fields are carried through
/// untouched so they reach the scorer and Q&A collaborators as they arrived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub experience_years: Option<f64>,
    pub certifications: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParsedResume {
    /// Display name, or `None` when the parser found none (or an empty one).
    pub fn name(&self) -> Option<&str> {
        self.parsed_data
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.parsed_data
            .as_ref()
            .and_then(|d| d.email.as_deref())
            .filter(|e| !e.trim().is_empty())
    }
}
