use serde::{Deserialize, Serialize};

/// A resume submitted as structured fields. Every field is optional on the
/// wire; missing fields deserialize to their defaults and simply score lower.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
}

/// Output of both scorers.
///
/// Invariants: `score` is always within 0–100, and `feedback` is never empty
/// (a single positive fallback message stands in when every check passed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub feedback: Vec<String>,
}
