// Single-message triage — quick rule-based scoring of one message text.
//
// This is the lightweight path used by the timeline and the `triage`
// subcommand: a short keyword sweep mapped onto the four-tier message
// scheme. It is deliberately separate from the full case analysis, which
// uses the richer detector catalog and the three-tier case scheme.

use serde::{Deserialize, Serialize};

use crate::report::{MessageRiskLevel, MAX_SCORE};

/// Keywords swept case-insensitively during triage.
pub const TRIAGE_KEYWORDS: [&str; 4] = ["click", "urgent", "verify", "bit.ly"];

/// Points per matched triage keyword.
pub const TRIAGE_KEYWORD_WEIGHT: u32 = 25;

/// Outcome of triaging a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTriage {
    pub risk_score: u32,
    pub risk_level: MessageRiskLevel,
}

/// Score one message text: 25 points per matched keyword, clamped to 100,
/// mapped with the four-tier message scheme.
pub fn score_message(content: &str) -> MessageTriage {
    let lowered = content.to_lowercase();
    let raw: u32 = TRIAGE_KEYWORDS
        .iter()
        .filter(|kw| lowered.contains(*kw))
        .map(|_| TRIAGE_KEYWORD_WEIGHT)
        .sum();
    let risk_score = raw.min(MAX_SCORE);
    MessageTriage {
        risk_score,
        risk_level: MessageRiskLevel::from_score(risk_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benign_message_scores_zero() {
        let triage = score_message("Meeting at 3 PM");
        assert_eq!(triage.risk_score, 0);
        assert_eq!(triage.risk_level, MessageRiskLevel::Low);
    }

    #[test]
    fn one_keyword_stays_low() {
        let triage = score_message("This is urgent");
        assert_eq!(triage.risk_score, 25);
        assert_eq!(triage.risk_level, MessageRiskLevel::Low);
    }

    #[test]
    fn two_keywords_reach_high() {
        let triage = score_message("URGENT: verify your account");
        assert_eq!(triage.risk_score, 50);
        assert_eq!(triage.risk_level, MessageRiskLevel::High);
    }

    #[test]
    fn full_phish_reaches_critical() {
        let triage = score_message("URGENT! Click to verify at http://bit.ly/fake");
        assert_eq!(triage.risk_score, 100);
        assert_eq!(triage.risk_level, MessageRiskLevel::Critical);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score_message("VERIFY").risk_score, 25);
        assert_eq!(score_message("Bit.LY/x").risk_score, 25);
    }
}
