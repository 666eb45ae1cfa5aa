//! Text Scorer: keyword and length heuristics over extracted plain text.
//!
//! Runs on whatever the document extractor produced, so there is no field
//! structure to lean on; every signal is a substring, length, or line check.

use crate::models::ScoreResult;
use crate::scoring::{evaluate, Rule};

const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work history", "employment"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "degree", "university", "college"];

/// Accepted bullet markers. Best-effort: extraction can mangle glyphs
/// depending on the source encoding, so a missed marker only costs points,
/// it never fails the request.
const BULLET_MARKERS: &[char] = &['-', '•'];

const FALLBACK: &str = "Resume looks solid. Customize it for the target role and keywords.";

const RULES: &[Rule<str>] = &[
    Rule {
        points: 10,
        check: |t| t.chars().count() >= 800,
        feedback: |_| "Add more detail (aim for 350-500 words).".to_string(),
    },
    Rule {
        points: 8,
        check: |t| t.to_lowercase().contains("skills"),
        feedback: |_| "Include a dedicated skills section.".to_string(),
    },
    Rule {
        points: 12,
        check: |t| contains_any(t, EXPERIENCE_KEYWORDS),
        feedback: |_| "Add an experience section with impact-focused bullets.".to_string(),
    },
    Rule {
        points: 6,
        check: |t| contains_any(t, EDUCATION_KEYWORDS),
        feedback: |_| "Add education details.".to_string(),
    },
    Rule {
        points: 10,
        check: |t| bullet_line_count(t) >= 5,
        feedback: |_| "Use more bullet points to highlight achievements.".to_string(),
    },
    Rule {
        points: 5,
        check: |t| t.contains('@'),
        feedback: |_| "Add an email address for contact info.".to_string(),
    },
];

/// Scores extracted resume text. Pure and total: empty text fails every check
/// and lands on the base score with all six feedback messages.
pub fn score_from_text(text: &str) -> ScoreResult {
    evaluate(text, RULES, FALLBACK)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

fn bullet_line_count(text: &str) -> usize {
    text.lines()
        .filter(|line| line.trim().starts_with(BULLET_MARKERS))
        .count()
}
