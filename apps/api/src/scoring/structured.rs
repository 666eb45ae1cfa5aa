//! Structured Scorer: heuristic checks over an explicit [`ResumeRecord`].

use crate::models::{ResumeRecord, ScoreResult};
use crate::scoring::{evaluate, Rule};

const IMPACT_VERBS: &[&str] = &[
    "increased",
    "reduced",
    "improved",
    "delivered",
    "launched",
    "owned",
];

const FALLBACK: &str = "Strong resume. Consider tailoring keywords to each job description.";

/// The check order here is also the feedback order in the response.
const RULES: &[Rule<ResumeRecord>] = &[
    Rule {
        points: 5,
        check: |r| missing_contact_fields(r).is_empty(),
        feedback: |r| {
            format!(
                "Add missing contact details: {}.",
                missing_contact_fields(r).join(", ")
            )
        },
    },
    Rule {
        points: 10,
        check: |r| r.summary.trim().chars().count() >= 80,
        feedback: |_| "Expand your summary to 2-3 concise sentences.".to_string(),
    },
    Rule {
        points: 10,
        check: |r| r.skills.len() >= 6,
        feedback: |_| "Add at least 6 relevant skills.".to_string(),
    },
    Rule {
        points: 15,
        check: |r| r.experience.len() >= 4,
        feedback: |_| "Add more experience bullet points with impact metrics.".to_string(),
    },
    Rule {
        points: 5,
        check: has_impact_language,
        feedback: |_| {
            "Add impact verbs (e.g., increased, improved, delivered) in experience.".to_string()
        },
    },
    Rule {
        points: 5,
        check: |r| !r.education.is_empty(),
        feedback: |_| "Include education details.".to_string(),
    },
    Rule {
        points: 5,
        check: |r| !r.projects.is_empty(),
        feedback: |_| "List 1-2 projects to showcase applied skills.".to_string(),
    },
];

/// Scores a structured resume. Pure and total: an all-empty record is a valid
/// input that simply fails every check.
pub fn score(record: &ResumeRecord) -> ScoreResult {
    evaluate(record, RULES, FALLBACK)
}

/// Labels of the contact fields that are blank after trimming, in display
/// order (email, phone, location).
fn missing_contact_fields(record: &ResumeRecord) -> Vec<&'static str> {
    [
        ("email", &record.email),
        ("phone", &record.phone),
        ("location", &record.location),
    ]
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| *label)
    .collect()
}

/// Case-insensitive substring scan for impact verbs across all experience
/// entries.
fn has_impact_language(record: &ResumeRecord) -> bool {
    let joined = record.experience.join(" ").to_lowercase();
    IMPACT_VERBS.iter().any(|verb| joined.contains(verb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::BASE_SCORE;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn full_record() -> ResumeRecord {
        ResumeRecord {
            name: "Ada Lovelace".to_string(),
            title: "Software Engineer".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "London".to_string(),
            summary: "Systems engineer with eight years of experience building data platforms \
                      and leading small teams through ambiguous greenfield projects."
                .to_string(),
            skills: strings(&["Rust", "Go", "SQL", "Kafka", "Terraform", "Kubernetes"]),
            experience: strings(&[
                "Increased revenue by 20% by rebuilding the pricing pipeline",
                "Led a team of four engineers",
                "Migrated billing to event sourcing",
                "Maintained a 99.9% uptime SLO",
            ]),
            education: strings(&["BSc Mathematics, University of London"]),
            projects: strings(&["Open-source CSV toolkit"]),
        }
    }

    #[test]
    fn test_empty_record_scores_base_with_all_feedback() {
        let result = score(&ResumeRecord::default());
        assert_eq!(result.score, BASE_SCORE);
        assert_eq!(result.feedback.len(), 7);
        assert_eq!(
            result.feedback[0],
            "Add missing contact details: email, phone, location."
        );
    }

    #[test]
    fn test_weak_record_fails_every_check() {
        // Fields present but below every threshold.
        let record = ResumeRecord {
            summary: "Engineer.".to_string(),
            skills: strings(&["Rust", "Go"]),
            experience: strings(&["Wrote code"]),
            ..ResumeRecord::default()
        };
        let result = score(&record);
        assert_eq!(result.score, 50);
        assert_eq!(result.feedback.len(), 7);
    }

    #[test]
    fn test_full_record_scores_100_with_fallback_only() {
        let result = score(&full_record());
        assert_eq!(result.score, 100);
        assert_eq!(
            result.feedback,
            vec!["Strong resume. Consider tailoring keywords to each job description.".to_string()]
        );
    }

    #[test]
    fn test_contact_feedback_names_only_blank_fields() {
        let record = ResumeRecord {
            email: "ada@example.com".to_string(),
            phone: "   ".to_string(),
            ..ResumeRecord::default()
        };
        let result = score(&record);
        assert_eq!(
            result.feedback[0],
            "Add missing contact details: phone, location."
        );
    }

    #[test]
    fn test_impact_verbs_matched_case_insensitively() {
        let with_verb = ResumeRecord {
            experience: strings(&["Delivered the v2 launch"]),
            ..ResumeRecord::default()
        };
        let without_verb = ResumeRecord {
            experience: strings(&["Worked on the v2 launch"]),
            ..ResumeRecord::default()
        };
        assert_eq!(score(&with_verb).score, score(&without_verb).score + 5);
    }

    #[test]
    fn test_adding_a_sixth_skill_never_decreases_score() {
        let mut record = full_record();
        record.skills.truncate(5);
        let five = score(&record);
        record.skills.push("Python".to_string());
        let six = score(&record);
        assert!(six.score >= five.score);
        assert_eq!(six.score, five.score + 10);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let record = full_record();
        assert_eq!(score(&record), score(&record));
    }
}
