//! Scoring round: candidates + parsed JD out to the scorer, named scores back.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chat::messages;
use crate::chat::transcript::ChatTranscript;
use crate::chat::weights::WeightConfig;
use crate::collaborators::{CandidateScorer, CollaboratorError};
use crate::models::candidate::ParsedResume;
use crate::models::job::ParsedJD;

/// A candidate's identity paired with the score from one scoring round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub name: String,
    pub email: String,
    pub score: f64,
}

/// Sends a scoring request and turns the raw score list into `CandidateScore`s.
///
/// Weights are assumed already validated by the caller; the coordinator only
/// forwards them.
pub struct ScoringCoordinator<'a> {
    scorer: &'a dyn CandidateScorer,
}

impl<'a> ScoringCoordinator<'a> {
    pub fn new(scorer: &'a dyn CandidateScorer) -> Self {
        Self { scorer }
    }

    /// Scores every candidate, then writes one `name: score` line each and the
    /// cutoff prompt. Nothing is written if the scorer fails.
    pub async fn score(
        &self,
        candidates: &[ParsedResume],
        parsed_jd: &ParsedJD,
        weights: &WeightConfig,
        transcript: &mut ChatTranscript,
    ) -> Result<Vec<CandidateScore>, CollaboratorError> {
        debug!(candidates = candidates.len(), "Requesting candidate scores");
        let raw = self.scorer.score(candidates, parsed_jd, weights).await?;
        let scored = pair_scores(candidates, &raw)?;

        for item in &scored {
            transcript.push_bot(messages::score_line(&item.name, item.score));
        }
        transcript.push_bot(messages::CUTOFF_PROMPT);

        info!(candidates = scored.len(), "Scoring round complete");
        Ok(scored)
    }
}

/// Pairs the i-th score with the i-th candidate.
///
/// The scorer contract is one score per candidate in input order; a length
/// mismatch means that contract broke, so the round is rejected outright.
pub fn pair_scores(
    candidates: &[ParsedResume],
    scores: &[f64],
) -> Result<Vec<CandidateScore>, CollaboratorError> {
    if candidates.len() != scores.len() {
        return Err(CollaboratorError::ScoreCountMismatch {
            expected: candidates.len(),
            actual: scores.len(),
        });
    }

    Ok(candidates
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(i, (candidate, &score))| CandidateScore {
            name: candidate
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| messages::placeholder_name(i)),
            email: candidate
                .email()
                .unwrap_or(messages::PLACEHOLDER_EMAIL)
                .to_string(),
            score,
        })
        .collect())
}
