//! Heuristic resume scoring.
//!
//! Both scorers share one shape: a base score of 50, an ordered table of
//! independent rules, and a 100-point cap. Each rule either adds its points
//! (check passed) or appends a feedback message (check failed); the rules
//! never exclude each other, so scoring is a single fold over the table.

pub mod structured;
pub mod text;

use crate::models::ScoreResult;

pub const BASE_SCORE: u32 = 50;
pub const MAX_SCORE: u32 = 100;

/// One entry in a scorer's rule table.
///
/// `feedback` is a function rather than a fixed string because some rules
/// (contact completeness) name the specific fields that failed.
pub struct Rule<T: ?Sized> {
    pub points: u32,
    pub check: fn(&T) -> bool,
    pub feedback: fn(&T) -> String,
}

/// Folds the rule table over `input`: base score plus the points of every
/// passing rule, capped at [`MAX_SCORE`]; feedback collected in table order,
/// with `fallback` substituted when nothing failed. Total over all inputs.
pub fn evaluate<T: ?Sized>(input: &T, rules: &[Rule<T>], fallback: &str) -> ScoreResult {
    let (score, feedback) =
        rules
            .iter()
            .fold((BASE_SCORE, Vec::new()), |(score, mut feedback), rule| {
                if (rule.check)(input) {
                    (score + rule.points, feedback)
                } else {
                    feedback.push((rule.feedback)(input));
                    (score, feedback)
                }
            });

    let feedback = if feedback.is_empty() {
        vec![fallback.to_string()]
    } else {
        feedback
    };

    ScoreResult {
        score: score.min(MAX_SCORE),
        feedback,
    }
}
