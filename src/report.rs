// Report types — findings, risk tiers, and the immutable analysis output.
//
// These are the values that flow out of the engine. They're plain serde
// types so a presentation layer (CLI, HTTP, file) can serialize them
// however it wishes without the core caring.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::records::RecordStore;

/// Which detection group a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    SuspiciousBehavior,
    MalwareIndicator,
    Integrity,
}

/// One detector's emitted evidence item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    /// Human-readable description of what matched.
    pub message: String,
    /// Points contributed to the aggregate score.
    pub weight: u32,
}

impl Finding {
    pub fn new(category: FindingCategory, message: impl Into<String>, weight: u32) -> Self {
        Self {
            category,
            message: message.into(),
            weight,
        }
    }
}

/// Risk tier for a whole case report (three-tier scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map a clamped case score (0-100) to its tier.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=29 => RiskLevel::Low,
            30..=69 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk tier for a single scored message (four-tier scheme).
///
/// Deliberately a distinct type from [`RiskLevel`]: the case scheme and the
/// single-message scheme use different thresholds and must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageRiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl MessageRiskLevel {
    /// Map a clamped message score (0-100) to its tier.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=29 => MessageRiskLevel::Low,
            30..=49 => MessageRiskLevel::Medium,
            50..=79 => MessageRiskLevel::High,
            _ => MessageRiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRiskLevel::Low => "LOW",
            MessageRiskLevel::Medium => "MEDIUM",
            MessageRiskLevel::High => "HIGH",
            MessageRiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for MessageRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maximum case score; raw weight sums above this are clamped.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_risk_score: u32,
    pub risk_level: RiskLevel,
}

/// Findings grouped by detection category, in detector emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detections {
    pub suspicious_behavior: Vec<Finding>,
    pub malware_indicators: Vec<Finding>,
    pub integrity_anomalies: Vec<Finding>,
}

/// The immutable output of one analysis run.
///
/// Constructed once per run; the summary score is always the clamped sum
/// of all finding weights, established here and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    pub summary: Summary,
    pub detections: Detections,
}

impl RiskReport {
    /// Build a report from grouped findings, computing the clamped score
    /// and its tier.
    pub fn from_detections(detections: Detections) -> Self {
        let raw: u32 = detections
            .suspicious_behavior
            .iter()
            .chain(&detections.malware_indicators)
            .chain(&detections.integrity_anomalies)
            .map(|f| f.weight)
            .sum();
        let score = raw.min(MAX_SCORE);
        Self {
            summary: Summary {
                total_risk_score: score,
                risk_level: RiskLevel::from_score(score),
            },
            detections,
        }
    }

    pub fn score(&self) -> u32 {
        self.summary.total_risk_score
    }

    pub fn level(&self) -> RiskLevel {
        self.summary.risk_level
    }

    pub fn findings_for(&self, category: FindingCategory) -> &[Finding] {
        match category {
            FindingCategory::SuspiciousBehavior => &self.detections.suspicious_behavior,
            FindingCategory::MalwareIndicator => &self.detections.malware_indicators,
            FindingCategory::Integrity => &self.detections.integrity_anomalies,
        }
    }

    pub fn finding_count(&self) -> usize {
        self.detections.suspicious_behavior.len()
            + self.detections.malware_indicators.len()
            + self.detections.integrity_anomalies.len()
    }
}

/// SHA-256 over the canonical JSON serialization of the record set.
///
/// Lets an investigator prove the analyzed data was not altered between
/// runs: same records, same hash.
pub fn record_data_hash(store: &RecordStore) -> Result<String> {
    #[derive(Serialize)]
    struct RawData<'a> {
        calls: &'a [crate::records::CallRecord],
        messages: &'a [crate::records::MessageRecord],
    }
    let encoded = serde_json::to_vec(&RawData {
        calls: store.calls(),
        messages: store.messages(),
    })
    .context("serializing record set for hashing")?;
    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(hex::encode(hasher.finalize()))
}

/// Case-file metadata wrapped around a risk report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case_id: String,
    pub generated_at: String,
    /// SHA-256 of the analyzed record set, for tamper detection.
    pub data_integrity_hash: String,
    pub total_calls: usize,
    pub total_messages: usize,
    pub report: RiskReport,
}

impl CaseReport {
    pub fn build(store: &RecordStore, report: RiskReport, now: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            case_id: format!("CASE-{}", now.format("%Y%m%d-%H%M")),
            generated_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            data_integrity_hash: record_data_hash(store)?,
            total_calls: store.calls().len(),
            total_messages: store.messages().len(),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_tier_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn message_tier_boundaries() {
        assert_eq!(MessageRiskLevel::from_score(29), MessageRiskLevel::Low);
        assert_eq!(MessageRiskLevel::from_score(30), MessageRiskLevel::Medium);
        assert_eq!(MessageRiskLevel::from_score(49), MessageRiskLevel::Medium);
        assert_eq!(MessageRiskLevel::from_score(50), MessageRiskLevel::High);
        assert_eq!(MessageRiskLevel::from_score(79), MessageRiskLevel::High);
        assert_eq!(MessageRiskLevel::from_score(80), MessageRiskLevel::Critical);
        assert_eq!(MessageRiskLevel::from_score(100), MessageRiskLevel::Critical);
    }

    #[test]
    fn report_clamps_raw_sum() {
        let detections = Detections {
            malware_indicators: vec![
                Finding::new(FindingCategory::MalwareIndicator, "a", 60),
                Finding::new(FindingCategory::MalwareIndicator, "b", 60),
            ],
            ..Default::default()
        };
        let report = RiskReport::from_detections(detections);
        assert_eq!(report.score(), 100);
        assert_eq!(report.level(), RiskLevel::High);
    }

    #[test]
    fn findings_for_returns_the_matching_category() {
        let detections = Detections {
            suspicious_behavior: vec![Finding::new(
                FindingCategory::SuspiciousBehavior,
                "odd hours",
                5,
            )],
            malware_indicators: vec![Finding::new(FindingCategory::MalwareIndicator, "link", 25)],
            integrity_anomalies: vec![Finding::new(FindingCategory::Integrity, "duplicates", 10)],
        };
        let report = RiskReport::from_detections(detections);
        assert_eq!(
            report.findings_for(FindingCategory::SuspiciousBehavior)[0].message,
            "odd hours"
        );
        assert_eq!(
            report.findings_for(FindingCategory::MalwareIndicator)[0].weight,
            25
        );
        assert_eq!(report.findings_for(FindingCategory::Integrity).len(), 1);
    }

    #[test]
    fn empty_detections_score_zero_low() {
        let report = RiskReport::from_detections(Detections::default());
        assert_eq!(report.score(), 0);
        assert_eq!(report.level(), RiskLevel::Low);
        assert_eq!(report.finding_count(), 0);
    }

    #[test]
    fn level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
        assert_eq!(
            serde_json::to_string(&MessageRiskLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
    }
}
