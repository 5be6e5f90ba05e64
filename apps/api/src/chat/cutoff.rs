//! Cutoff round: split the last score set at a user-chosen score.

use tracing::info;

use crate::chat::invitation::InvitationSession;
use crate::chat::messages;
use crate::chat::scoring::CandidateScore;
use crate::chat::transcript::ChatTranscript;

/// Parses a cutoff typed by the user from its longest leading decimal number,
/// so `"70 points"` and `"70%"` both mean 70. Text with no leading digits is
/// not a cutoff. Words such as `inf` or `NaN` are not numbers here, but an
/// exponent too large for `f64` yields infinity, which nobody passes.
pub fn parse_cutoff(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

pub struct CutoffFilter;

impl CutoffFilter {
    /// Every score `>= cutoff`, in the order given.
    pub fn apply(scores: &[CandidateScore], cutoff: f64) -> Vec<CandidateScore> {
        scores
            .iter()
            .filter(|s| s.score >= cutoff)
            .cloned()
            .collect()
    }

    /// Filters `scores`, reports the outcome in the transcript and hands the
    /// passed set to the invitation step. Returns how many passed.
    ///
    /// With nobody passing, a single notice is written and the invitation step
    /// stays closed.
    pub fn run(
        scores: &[CandidateScore],
        cutoff: f64,
        invitation: &mut InvitationSession,
        transcript: &mut ChatTranscript,
    ) -> usize {
        let passed = Self::apply(scores, cutoff);
        info!(cutoff, passed = passed.len(), of = scores.len(), "Cutoff applied");

        if passed.is_empty() {
            transcript.push_bot(messages::none_passed(cutoff));
            invitation.open(passed);
            return 0;
        }

        for item in &passed {
            transcript.push_bot(messages::passed_line(&item.name, &item.email));
        }
        transcript.push_bot(messages::SELECT_AND_WRITE);

        let count = passed.len();
        invitation.open(passed);
        count
    }
}
