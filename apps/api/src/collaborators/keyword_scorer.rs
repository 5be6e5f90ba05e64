//! Keyword scorer — pure-Rust, deterministic candidate scoring for local mode.
//!
//! Algorithm, per candidate:
//! 1. Each of the four dimensions gets a fit in [0, 1]:
//!    - skills: required skills weigh 1.0, preferred 0.5. A skill listed on the
//!      resume is strength 1.0, a mention anywhere else on the resume 0.6.
//!    - education / certifications: share of JD keywords found on the resume.
//!    - experience: resume years / JD minimum, capped at 1.0.
//!    A dimension the JD says nothing about is a full fit.
//! 2. score = Σ(weight% × fit), rounded to one decimal → 0 – 100.

use async_trait::async_trait;

use crate::chat::weights::WeightConfig;
use crate::collaborators::{CandidateScorer, CollaboratorError};
use crate::models::candidate::{ParsedResume, ResumeData};
use crate::models::job::ParsedJD;

const REQUIRED_SKILL_WEIGHT: f64 = 1.0;
const PREFERRED_SKILL_WEIGHT: f64 = 0.5;
const LISTED_STRENGTH: f64 = 1.0;
const MENTIONED_STRENGTH: f64 = 0.6;

pub struct KeywordCandidateScorer;

#[async_trait]
impl CandidateScorer for KeywordCandidateScorer {
    async fn score(
        &self,
        candidates: &[ParsedResume],
        parsed_jd: &ParsedJD,
        weights: &WeightConfig,
    ) -> Result<Vec<f64>, CollaboratorError> {
        Ok(candidates
            .iter()
            .map(|c| score_candidate(c, parsed_jd, weights))
            .collect())
    }
}

/// Per-dimension fit, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
struct DimensionFit {
    skills: f64,
    education: f64,
    experience: f64,
    certifications: f64,
}

fn score_candidate(candidate: &ParsedResume, jd: &ParsedJD, weights: &WeightConfig) -> f64 {
    let empty = ResumeData::default();
    let resume = candidate.parsed_data.as_ref().unwrap_or(&empty);
    let fit = compute_fit(resume, jd);

    let raw = weights.skills * fit.skills
        + weights.education * fit.education
        + weights.experience * fit.experience
        + weights.certifications * fit.certifications;
    (raw * 10.0).round() / 10.0
}

fn compute_fit(resume: &ResumeData, jd: &ParsedJD) -> DimensionFit {
    let listed: Vec<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();
    let full_text = resume_text(resume);

    let skill_criteria = jd
        .required_skills
        .iter()
        .map(|s| (s, REQUIRED_SKILL_WEIGHT))
        .chain(jd.preferred_skills.iter().map(|s| (s, PREFERRED_SKILL_WEIGHT)));

    let mut total_weight = 0.0;
    let mut matched = 0.0;
    for (skill, weight) in skill_criteria {
        let skill = skill.to_lowercase();
        total_weight += weight;
        let strength = if listed.iter().any(|s| *s == skill) {
            LISTED_STRENGTH
        } else if full_text.contains(&skill) {
            MENTIONED_STRENGTH
        } else {
            0.0
        };
        matched += strength * weight;
    }
    let skills = if total_weight > 0.0 {
        matched / total_weight
    } else {
        1.0
    };

    DimensionFit {
        skills,
        education: keyword_coverage(&jd.education, &resume.education),
        experience: experience_fit(jd.min_experience_years, resume.experience_years),
        certifications: keyword_coverage(&jd.certifications, &resume.certifications),
    }
}

/// Share of `keywords` that appear (case-insensitively) in any of `entries`.
fn keyword_coverage(keywords: &[String], entries: &[String]) -> f64 {
    if keywords.is_empty() {
        return 1.0;
    }
    let entries: Vec<String> = entries.iter().map(|e| e.to_lowercase()).collect();
    let hits = keywords
        .iter()
        .filter(|k| {
            let k = k.to_lowercase();
            entries.iter().any(|e| e.contains(&k))
        })
        .count();
    hits as f64 / keywords.len() as f64
}

fn experience_fit(required: Option<f64>, actual: Option<f64>) -> f64 {
    match required {
        Some(min) if min > 0.0 => (actual.unwrap_or(0.0).max(0.0) / min).min(1.0),
        _ => 1.0,
    }
}

fn resume_text(resume: &ResumeData) -> String {
    resume
        .skills
        .iter()
        .chain(&resume.experience)
        .chain(&resume.education)
        .chain(&resume.certifications)
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_resume(skills: &[&str], experience: &[&str], years: Option<f64>) -> ParsedResume {
        ParsedResume {
            filename: None,
            parsed_data: Some(ResumeData {
                name: Some("Test Candidate".to_string()),
                email: Some("test@example.com".to_string()),
                skills: strings(skills),
                education: strings(&["BSc Computer Science"]),
                experience: strings(experience),
                experience_years: years,
                certifications: strings(&["AWS Solutions Architect Associate"]),
                ..Default::default()
            }),
        }
    }

    fn make_jd() -> ParsedJD {
        ParsedJD {
            required_skills: strings(&["Rust", "PostgreSQL"]),
            preferred_skills: strings(&["Kubernetes"]),
            education: strings(&["Computer Science"]),
            min_experience_years: Some(4.0),
            certifications: strings(&["AWS Solutions Architect"]),
            ..Default::default()
        }
    }

    #[test]
    fn test_perfect_candidate_scores_100() {
        let resume = make_resume(&["rust", "postgresql", "kubernetes"], &[], Some(6.0));
        let score = score_candidate(&resume, &make_jd(), &WeightConfig::default());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_mentioned_skill_scores_partial() {
        let resume = make_resume(&[], &["Ran Kubernetes clusters"], Some(4.0));
        let fit = compute_fit(resume.parsed_data.as_ref().unwrap(), &make_jd());
        // kubernetes mentioned: 0.6 * 0.5 / 2.5
        assert!((fit.skills - 0.12).abs() < 1e-9, "skills fit was {}", fit.skills);
        assert_eq!(fit.experience, 1.0);
    }

    #[test]
    fn test_experience_is_proportional_and_capped() {
        assert_eq!(experience_fit(Some(4.0), Some(2.0)), 0.5);
        assert_eq!(experience_fit(Some(4.0), Some(10.0)), 1.0);
        assert_eq!(experience_fit(Some(4.0), None), 0.0);
        assert_eq!(experience_fit(None, None), 1.0);
    }

    #[test]
    fn test_unstated_dimension_is_full_fit() {
        assert_eq!(keyword_coverage(&[], &strings(&["anything"])), 1.0);
        assert_eq!(
            keyword_coverage(&strings(&["physics", "math"]), &strings(&["MSc Mathematics"])),
            0.5
        );
    }

    #[test]
    fn test_weights_shift_the_score() {
        // Skills match fully, experience not at all.
        let resume = make_resume(&["rust", "postgresql", "kubernetes"], &[], Some(0.0));
        let jd = make_jd();
        let skills_heavy = WeightConfig {
            skills: 70.0,
            education: 10.0,
            experience: 10.0,
            certifications: 10.0,
        };
        let experience_heavy = WeightConfig {
            skills: 10.0,
            education: 10.0,
            experience: 70.0,
            certifications: 10.0,
        };
        assert_eq!(score_candidate(&resume, &jd, &skills_heavy), 90.0);
        assert_eq!(score_candidate(&resume, &jd, &experience_heavy), 30.0);
    }

    #[test]
    fn test_unparsed_resume_only_gets_unstated_dimensions() {
        let jd = ParsedJD {
            required_skills: strings(&["Rust"]),
            ..Default::default()
        };
        let score = score_candidate(&ParsedResume::default(), &jd, &WeightConfig::default());
        // skills 0, the rest unstated.
        assert_eq!(score, 50.0);
    }

    #[tokio::test]
    async fn test_scores_follow_candidate_order() {
        let candidates = vec![
            make_resume(&[], &[], None),
            make_resume(&["rust", "postgresql", "kubernetes"], &[], Some(5.0)),
        ];
        let scores = KeywordCandidateScorer
            .score(&candidates, &make_jd(), &WeightConfig::default())
            .await
            .unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores[0] < scores[1]);
        assert_eq!(scores[1], 100.0);
    }
}
