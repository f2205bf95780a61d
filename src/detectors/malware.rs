// Malware/phishing indicator detectors: keyword sweeps, unsafe links,
// payload-extension references, and the Wangiri missed-call pattern.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDateTime;
use regex_lite::Regex;

use crate::detectors::Detector;
use crate::output::truncate_chars;
use crate::records::{CallType, RecordStore};
use crate::report::{Finding, FindingCategory};

pub const KEYWORD_WEIGHT: u32 = 20;
pub const UNSAFE_LINK_WEIGHT: u32 = 25;
pub const FILE_REFERENCE_WEIGHT: u32 = 40;
pub const WANGIRI_WEIGHT: u32 = 20;

/// Phishing/spam keywords swept case-insensitively over message content.
pub const PHISHING_KEYWORDS: [&str; 9] = [
    "click here",
    "urgent",
    "verify",
    "free",
    "reward",
    "lottery",
    "winner",
    "bank",
    "alert",
];

/// Payload extensions flagged by default.
pub const FILE_EXTENSIONS: [&str; 4] = ["apk", "exe", "zip", "rar"];

/// Additional extensions seen in script-dropper campaigns; opt-in via
/// [`MaliciousFileRef::with_extensions`].
pub const EXTENDED_FILE_EXTENSIONS: [&str; 9] =
    ["apk", "exe", "zip", "rar", "bat", "sh", "php", "js", "scr"];

/// Sweeps message content for phishing keywords, one finding per
/// (keyword, message) match.
#[derive(Default)]
pub struct PhishingKeyword;

impl Detector for PhishingKeyword {
    fn name(&self) -> &'static str {
        "phishing_keyword"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::MalwareIndicator
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let mut findings = Vec::new();
        for keyword in PHISHING_KEYWORDS {
            for message in store.messages() {
                if message.content.to_lowercase().contains(keyword) {
                    findings.push(Finding::new(
                        self.category(),
                        format!(
                            "Suspicious keyword '{keyword}' found in message from {}: '{}'",
                            message.sender,
                            truncate_chars(&message.content, 30)
                        ),
                        KEYWORD_WEIGHT,
                    ));
                }
            }
        }
        findings
    }
}

/// Flags cleartext HTTP links and known URL shorteners.
pub struct UnsafeLink {
    pattern: Regex,
}

impl UnsafeLink {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"(?i)(http://|bit\.ly|tinyurl\.com|goo\.gl)")?,
        })
    }
}

impl Detector for UnsafeLink {
    fn name(&self) -> &'static str {
        "unsafe_link"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::MalwareIndicator
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        store
            .messages()
            .iter()
            .filter(|m| self.pattern.is_match(&m.content))
            .map(|m| {
                Finding::new(
                    self.category(),
                    format!("Unsafe or short link detected in message from {}", m.sender),
                    UNSAFE_LINK_WEIGHT,
                )
            })
            .collect()
    }
}

/// Flags references to executable payload files in message content.
pub struct MaliciousFileRef {
    pattern: Regex,
}

impl MaliciousFileRef {
    /// Default detector covering the classic payload extensions.
    pub fn new() -> Result<Self> {
        Self::with_extensions(&FILE_EXTENSIONS)
    }

    /// Detector for a caller-chosen extension set, e.g.
    /// [`EXTENDED_FILE_EXTENSIONS`].
    pub fn with_extensions(extensions: &[&str]) -> Result<Self> {
        let pattern = format!(r"(?i)\.({})", extensions.join("|"));
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }
}

impl Detector for MaliciousFileRef {
    fn name(&self) -> &'static str {
        "malicious_file_ref"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::MalwareIndicator
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        store
            .messages()
            .iter()
            .filter(|m| self.pattern.is_match(&m.content))
            .map(|m| {
                Finding::new(
                    self.category(),
                    format!(
                        "Potential malware file reference detected in message from {}",
                        m.sender
                    ),
                    FILE_REFERENCE_WEIGHT,
                )
            })
            .collect()
    }
}

/// Flags callers generating repeated missed calls (Wangiri fraud: bait the
/// victim into a costly callback).
pub struct WangiriPattern {
    /// Missed calls from one caller above which the caller is flagged.
    pub missed_calls: usize,
}

impl Default for WangiriPattern {
    fn default() -> Self {
        Self { missed_calls: 2 }
    }
}

impl Detector for WangiriPattern {
    fn name(&self) -> &'static str {
        "wangiri_pattern"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::MalwareIndicator
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let mut missed: BTreeMap<&str, usize> = BTreeMap::new();
        for call in store.calls() {
            if call.call_type == CallType::Missed {
                *missed.entry(call.caller.as_str()).or_insert(0) += 1;
            }
        }
        missed
            .into_iter()
            .filter(|&(_, count)| count > self.missed_calls)
            .map(|(number, count)| {
                Finding::new(
                    self.category(),
                    format!("Potential fraud (Wangiri): {count} missed calls from {number}"),
                    WANGIRI_WEIGHT,
                )
            })
            .collect()
    }
}
