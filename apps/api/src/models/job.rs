//! Structured job description as returned by the JD parser.
//!
//! The conversation treats this as opaque and only hands it on to the scorer.
//! Fields the local keyword scorer understands are typed; everything else a
//! remote parser returns is kept in `extra` so it round-trips unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedJD {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preferred_skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience_years: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
