// Optional learned-classifier integration.
//
// The classifier is a construction-time collaborator, not a process-wide
// singleton: if the catalog is built without one, the rule detectors are
// the floor of correctness and nothing else changes. A classifier failure
// on one message is logged and skipped — it never aborts the run.

use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::warn;

use crate::detectors::Detector;
use crate::output::truncate_chars;
use crate::records::RecordStore;
use crate::report::{Finding, FindingCategory};

pub const CLASSIFIER_HIGH_WEIGHT: u32 = 40;
pub const CLASSIFIER_MEDIUM_WEIGHT: u32 = 20;

/// Verdict band from an external text classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierVerdict {
    Low,
    Medium,
    High,
}

/// One classification outcome.
#[derive(Debug, Clone)]
pub struct Classification {
    pub verdict: ClassifierVerdict,
    /// Model confidence, 0-100. Implementations should stay in range;
    /// anything above 100 is clamped before it reaches a finding.
    pub confidence: u8,
}

/// Capability interface for a pluggable text classifier.
///
/// Implementations wrap whatever model the deployment has available;
/// the engine only needs the verdict band.
pub trait MessageClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification>;
}

/// Adapts a [`MessageClassifier`] into one more malware-indicator detector.
pub struct ClassifierDetector {
    classifier: Box<dyn MessageClassifier>,
}

impl ClassifierDetector {
    pub fn new(classifier: Box<dyn MessageClassifier>) -> Self {
        Self { classifier }
    }
}

impl Detector for ClassifierDetector {
    fn name(&self) -> &'static str {
        "message_classifier"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::MalwareIndicator
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let mut findings = Vec::new();
        for message in store.messages() {
            let classification = match self.classifier.classify(&message.content) {
                Ok(classification) => classification,
                Err(error) => {
                    warn!(
                        detector = self.name(),
                        sender = %message.sender,
                        %error,
                        "classifier failed; skipping message"
                    );
                    continue;
                }
            };
            let weight = match classification.verdict {
                ClassifierVerdict::High => CLASSIFIER_HIGH_WEIGHT,
                ClassifierVerdict::Medium => CLASSIFIER_MEDIUM_WEIGHT,
                ClassifierVerdict::Low => continue,
            };
            findings.push(Finding::new(
                self.category(),
                format!(
                    "Classifier flagged message from {} ({}% confidence): '{}'",
                    message.sender,
                    classification.confidence.min(100),
                    truncate_chars(&message.content, 30)
                ),
                weight,
            ));
        }
        findings
    }
}
