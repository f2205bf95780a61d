// Data-integrity detectors: future timestamps, exact duplicates, and
// missing required fields.
//
// Each of these emits a single flat-weight finding when its condition
// holds, regardless of how many records are affected — the count goes in
// the message, not the score.

use chrono::NaiveDateTime;

use crate::detectors::Detector;
use crate::records::RecordStore;
use crate::report::{Finding, FindingCategory};

pub const FUTURE_TIMESTAMP_WEIGHT: u32 = 30;
pub const DUPLICATE_WEIGHT: u32 = 10;
pub const MISSING_FIELD_WEIGHT: u32 = 5;

/// Flags records timestamped after the moment of analysis.
#[derive(Default)]
pub struct FutureTimestamp;

impl Detector for FutureTimestamp {
    fn name(&self) -> &'static str {
        "future_timestamp"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::Integrity
    }

    fn evaluate(&self, store: &RecordStore, now: NaiveDateTime) -> Vec<Finding> {
        let future = store
            .calls()
            .iter()
            .filter_map(|c| c.timestamp.as_valid())
            .chain(store.messages().iter().filter_map(|m| m.timestamp.as_valid()))
            .filter(|&ts| ts > now)
            .count();
        if future == 0 {
            return Vec::new();
        }
        vec![Finding::new(
            self.category(),
            format!("Integrity breach: {future} records have future timestamps"),
            FUTURE_TIMESTAMP_WEIGHT,
        )]
    }
}

/// Flags exact-duplicate call records.
#[derive(Default)]
pub struct DuplicateRecords;

impl Detector for DuplicateRecords {
    fn name(&self) -> &'static str {
        "duplicate_records"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::Integrity
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let duplicates = store.duplicate_call_count();
        if duplicates == 0 {
            return Vec::new();
        }
        vec![Finding::new(
            self.category(),
            format!("Data integrity: {duplicates} duplicate call records found"),
            DUPLICATE_WEIGHT,
        )]
    }
}

/// Flags empty or unparseable required fields across both record kinds.
#[derive(Default)]
pub struct MissingFields;

impl Detector for MissingFields {
    fn name(&self) -> &'static str {
        "missing_fields"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::Integrity
    }

    fn evaluate(&self, store: &RecordStore, _now: NaiveDateTime) -> Vec<Finding> {
        let missing = store.missing_field_count();
        if missing == 0 {
            return Vec::new();
        }
        vec![Finding::new(
            self.category(),
            format!("Data integrity: {missing} missing fields detected in record logs"),
            MISSING_FIELD_WEIGHT,
        )]
    }
}
