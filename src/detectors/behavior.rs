// Suspicious-behavior detectors: call bursts, odd-hours activity, and
// contact repetition.
//
// Thresholds are construction-time tunables; the weights are fixed per
// detector and must stay exactly as given so scores stay comparable
// across runs.

use chrono::NaiveDateTime;

use crate::detectors::{Detector, ODD_HOURS};
use crate::records::RecordStore;
use crate::report::{Finding, FindingCategory};

pub const BURST_WEIGHT: u32 = 10;
pub const ODD_HOURS_CALL_WEIGHT: u32 = 5;
pub const ODD_HOURS_MESSAGE_WEIGHT: u32 = 5;
pub const REPETITION_WEIGHT: u32 = 15;

/// Flags hour buckets with an abnormal call volume.
pub struct BurstVolume {
    /// Calls per hour bucket above which the bucket is a burst.
    pub calls_per_hour: usize,
}

impl Default for BurstVolume {
    fn default() -> Self {
        Self { calls_per_hour: 10 }
    }
}

impl Detector for BurstVolume {
    fn name(&self) -> &'static str {
        "burst_volume"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::SuspiciousBehavior
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        store
            .calls_per_hour()
            .into_iter()
            .filter(|&(_, count)| count > self.calls_per_hour)
            .map(|(bucket, count)| {
                Finding::new(
                    self.category(),
                    format!("High frequency call volume detected: {count} calls at {bucket}"),
                    BURST_WEIGHT,
                )
            })
            .collect()
    }
}

/// Flags calls placed or received between 12 AM and 5 AM.
///
/// Emits one aggregate finding weighted per matching call, mirroring how
/// investigators read the report: one line, total exposure.
#[derive(Default)]
pub struct OddHoursCalls;

impl Detector for OddHoursCalls {
    fn name(&self) -> &'static str {
        "odd_hours_calls"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::SuspiciousBehavior
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let matching = store.calls_in_hours(&ODD_HOURS).len();
        if matching == 0 {
            return Vec::new();
        }
        vec![Finding::new(
            self.category(),
            format!(
                "Suspicious activity during odd hours: {matching} calls detected between 12 AM - 5 AM"
            ),
            ODD_HOURS_CALL_WEIGHT * matching as u32,
        )]
    }
}

/// Flags messages sent or received between 12 AM and 5 AM.
#[derive(Default)]
pub struct OddHoursMessages;

impl Detector for OddHoursMessages {
    fn name(&self) -> &'static str {
        "odd_hours_messages"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::SuspiciousBehavior
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let matching = store.messages_in_hours(&ODD_HOURS).len();
        if matching == 0 {
            return Vec::new();
        }
        vec![Finding::new(
            self.category(),
            format!(
                "Suspicious activity during odd hours: {matching} messages detected between 12 AM - 5 AM"
            ),
            ODD_HOURS_MESSAGE_WEIGHT * matching as u32,
        )]
    }
}

/// Flags receivers called an abnormal number of times
/// (stalking/harassment or bot behavior).
pub struct ContactRepetition {
    /// Calls to one receiver above which the contact is flagged.
    pub calls_per_contact: usize,
}

impl Default for ContactRepetition {
    fn default() -> Self {
        Self {
            calls_per_contact: 15,
        }
    }
}

impl Detector for ContactRepetition {
    fn name(&self) -> &'static str {
        "contact_repetition"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::SuspiciousBehavior
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        store
            .call_counts_by(|c| &c.receiver)
            .into_iter()
            .filter(|&(_, count)| count > self.calls_per_contact)
            .map(|(number, count)| {
                Finding::new(
                    self.category(),
                    format!("High repetition detected: {count} calls to {number}"),
                    REPETITION_WEIGHT,
                )
            })
            .collect()
    }
}
