use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Fixed interview rubric: every topic must carry a 1-5 score before feedback
/// can be submitted. 7 competency + 8 core-value topics, 75 points maximum.
pub const COMPETENCY_TOPICS: [&str; 7] = [
    "technical_expertise",
    "problem_solving",
    "communication",
    "teamwork",
    "leadership_potential",
    "adaptability",
    "domain_knowledge",
];

pub const CORE_VALUE_TOPICS: [&str; 8] = [
    "integrity",
    "customer_focus",
    "accountability",
    "collaboration",
    "innovation",
    "excellence",
    "respect",
    "continuous_learning",
];

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE_PER_TOPIC: i32 = 5;

pub fn max_total_score() -> i32 {
    (COMPETENCY_TOPICS.len() + CORE_VALUE_TOPICS.len()) as i32 * MAX_SCORE_PER_TOPIC
}

#[derive(Debug, Clone, PartialEq)]
pub struct RubricResult {
    pub total_score: i32,
    pub max_score: i32,
    pub percentage: i32,
}

/// Validates both score maps against the fixed topic lists and computes the
/// totals. Partial submissions are rejected: a missing topic, an unknown
/// topic, or an out-of-range score all fail.
pub fn score_rubric(
    competency: &BTreeMap<String, i32>,
    core_values: &BTreeMap<String, i32>,
) -> Result<RubricResult> {
    validate_section("competency", competency, &COMPETENCY_TOPICS)?;
    validate_section("core value", core_values, &CORE_VALUE_TOPICS)?;

    let total_score: i32 = competency.values().sum::<i32>() + core_values.values().sum::<i32>();
    let max_score = max_total_score();
    let percentage = ((total_score as f64 / max_score as f64) * 100.0).round() as i32;

    Ok(RubricResult {
        total_score,
        max_score,
        percentage,
    })
}

fn validate_section(
    section: &str,
    scores: &BTreeMap<String, i32>,
    topics: &[&str],
) -> Result<()> {
    for topic in topics {
        match scores.get(*topic) {
            None => {
                return Err(Error::BadRequest(format!(
                    "Missing {} score for '{}'",
                    section, topic
                )))
            }
            Some(score) if *score < MIN_SCORE || *score > MAX_SCORE_PER_TOPIC => {
                return Err(Error::BadRequest(format!(
                    "Score for '{}' must be between {} and {}",
                    topic, MIN_SCORE, MAX_SCORE_PER_TOPIC
                )))
            }
            Some(_) => {}
        }
    }
    if scores.len() != topics.len() {
        let unknown: Vec<&str> = scores
            .keys()
            .filter(|k| !topics.contains(&k.as_str()))
            .map(|k| k.as_str())
            .collect();
        return Err(Error::BadRequest(format!(
            "Unknown {} topics: {}",
            section,
            unknown.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_scored(topics: &[&str], score: i32) -> BTreeMap<String, i32> {
        topics.iter().map(|t| (t.to_string(), score)).collect()
    }

    #[test]
    fn all_threes_scores_sixty_percent() {
        let result = score_rubric(
            &all_scored(&COMPETENCY_TOPICS, 3),
            &all_scored(&CORE_VALUE_TOPICS, 3),
        )
        .unwrap();
        assert_eq!(result.total_score, 45);
        assert_eq!(result.max_score, 75);
        assert_eq!(result.percentage, 60);
    }

    #[test]
    fn perfect_score_is_hundred_percent() {
        let result = score_rubric(
            &all_scored(&COMPETENCY_TOPICS, 5),
            &all_scored(&CORE_VALUE_TOPICS, 5),
        )
        .unwrap();
        assert_eq!(result.total_score, 75);
        assert_eq!(result.percentage, 100);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        // 7x1 + 8x5 = 47 -> 62.67% -> 63
        let result = score_rubric(
            &all_scored(&COMPETENCY_TOPICS, 1),
            &all_scored(&CORE_VALUE_TOPICS, 5),
        )
        .unwrap();
        assert_eq!(result.total_score, 47);
        assert_eq!(result.percentage, 63);
    }

    #[test]
    fn missing_topic_is_rejected() {
        let mut competency = all_scored(&COMPETENCY_TOPICS, 4);
        competency.remove("teamwork");
        let err = score_rubric(&competency, &all_scored(&CORE_VALUE_TOPICS, 4));
        assert!(err.is_err());
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut competency = all_scored(&COMPETENCY_TOPICS, 4);
        competency.insert("teamwork".into(), 6);
        assert!(score_rubric(&competency, &all_scored(&CORE_VALUE_TOPICS, 4)).is_err());

        let mut core = all_scored(&CORE_VALUE_TOPICS, 2);
        core.insert("respect".into(), 0);
        assert!(score_rubric(&all_scored(&COMPETENCY_TOPICS, 2), &core).is_err());
    }

    #[test]
    fn unknown_topic_is_rejected() {
        let mut competency = all_scored(&COMPETENCY_TOPICS, 3);
        competency.insert("vibes".into(), 3);
        assert!(score_rubric(&competency, &all_scored(&CORE_VALUE_TOPICS, 3)).is_err());
    }
}
