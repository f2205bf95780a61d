// Record store — the immutable snapshot every detector reads.
//
// All accessors are pure functions of the stored data. Query results use
// BTreeMap so iteration order (and therefore finding emission order) is
// deterministic across runs.

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDateTime, Timelike};

use crate::records::{CallRecord, MessageRecord};

/// Typed, read-only view over one case's call and message records.
///
/// Built once by the caller at the start of an analysis run; detectors
/// share it by reference and cannot mutate it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    calls: Vec<CallRecord>,
    messages: Vec<MessageRecord>,
}

impl RecordStore {
    pub fn new(calls: Vec<CallRecord>, messages: Vec<MessageRecord>) -> Self {
        Self { calls, messages }
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.messages.is_empty()
    }

    /// Call counts grouped into hour-aligned buckets.
    ///
    /// Calls with invalid timestamps are excluded — they are the integrity
    /// detectors' business, not the burst detector's.
    pub fn calls_per_hour(&self) -> BTreeMap<NaiveDateTime, usize> {
        let mut buckets = BTreeMap::new();
        for call in &self.calls {
            if let Some(ts) = call.timestamp.as_valid() {
                let bucket = ts.date().and_hms_opt(ts.hour(), 0, 0).unwrap_or(ts);
                *buckets.entry(bucket).or_insert(0) += 1;
            }
        }
        buckets
    }

    /// Occurrence counts of a chosen call field (e.g. receiver, caller).
    pub fn call_counts_by<F>(&self, field: F) -> BTreeMap<String, usize>
    where
        F: Fn(&CallRecord) -> &str,
    {
        let mut counts = BTreeMap::new();
        for call in &self.calls {
            *counts.entry(field(call).to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Calls whose valid timestamp falls in one of the given hours of day.
    pub fn calls_in_hours(&self, hours: &[u32]) -> Vec<&CallRecord> {
        self.calls
            .iter()
            .filter(|c| c.timestamp.hour().is_some_and(|h| hours.contains(&h)))
            .collect()
    }

    /// Messages whose valid timestamp falls in one of the given hours of day.
    pub fn messages_in_hours(&self, hours: &[u32]) -> Vec<&MessageRecord> {
        self.messages
            .iter()
            .filter(|m| m.timestamp.hour().is_some_and(|h| hours.contains(&h)))
            .collect()
    }

    /// Number of calls that exactly duplicate an earlier call
    /// (full field equality).
    pub fn duplicate_call_count(&self) -> usize {
        let mut seen = HashSet::new();
        self.calls.iter().filter(|c| !seen.insert(*c)).count()
    }

    /// Number of empty or unparseable required fields across all records.
    ///
    /// Required fields are the party identifiers and the timestamp; message
    /// content may legitimately be empty and is not counted.
    pub fn missing_field_count(&self) -> usize {
        let mut missing = 0;
        for call in &self.calls {
            missing += usize::from(call.caller.trim().is_empty());
            missing += usize::from(call.receiver.trim().is_empty());
            missing += usize::from(!call.timestamp.is_valid());
        }
        for message in &self.messages {
            missing += usize::from(message.sender.trim().is_empty());
            missing += usize::from(message.receiver.trim().is_empty());
            missing += usize::from(!message.timestamp.is_valid());
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CallType, RecordTimestamp};

    fn call(caller: &str, receiver: &str, ts: &str, call_type: CallType) -> CallRecord {
        CallRecord {
            caller: caller.to_string(),
            receiver: receiver.to_string(),
            timestamp: RecordTimestamp::parse(ts),
            duration: 60,
            call_type,
        }
    }

    #[test]
    fn empty_store_yields_empty_buckets() {
        let store = RecordStore::default();
        assert!(store.calls_per_hour().is_empty());
        assert_eq!(store.duplicate_call_count(), 0);
        assert_eq!(store.missing_field_count(), 0);
    }

    #[test]
    fn calls_bucket_by_hour() {
        let store = RecordStore::new(
            vec![
                call("+15550001", "Self", "2023-10-24 10:05:00", CallType::Incoming),
                call("+15550002", "Self", "2023-10-24 10:55:00", CallType::Incoming),
                call("+15550003", "Self", "2023-10-24 11:00:00", CallType::Incoming),
            ],
            vec![],
        );
        let buckets = store.calls_per_hour();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.values().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn invalid_timestamps_excluded_from_buckets() {
        let store = RecordStore::new(
            vec![call("+15550001", "Self", "garbage", CallType::Incoming)],
            vec![],
        );
        assert!(store.calls_per_hour().is_empty());
        assert!(store.calls_in_hours(&[0, 1, 2, 3, 4, 5]).is_empty());
        // but they do count as a missing field
        assert_eq!(store.missing_field_count(), 1);
    }

    #[test]
    fn duplicate_calls_counted_once_per_extra_copy() {
        let a = call("+15550001", "Self", "2023-10-24 10:00:00", CallType::Incoming);
        let store = RecordStore::new(vec![a.clone(), a.clone(), a], vec![]);
        assert_eq!(store.duplicate_call_count(), 2);
    }

    #[test]
    fn near_duplicate_is_not_a_duplicate() {
        let a = call("+15550001", "Self", "2023-10-24 10:00:00", CallType::Incoming);
        let mut b = a.clone();
        b.duration = 61;
        let store = RecordStore::new(vec![a, b], vec![]);
        assert_eq!(store.duplicate_call_count(), 0);
    }

    #[test]
    fn counts_by_receiver() {
        let store = RecordStore::new(
            vec![
                call("+15550001", "+15559999", "2023-10-24 10:00:00", CallType::Outgoing),
                call("+15550001", "+15559999", "2023-10-24 11:00:00", CallType::Outgoing),
                call("+15550001", "+15558888", "2023-10-24 12:00:00", CallType::Outgoing),
            ],
            vec![],
        );
        let counts = store.call_counts_by(|c| &c.receiver);
        assert_eq!(counts.get("+15559999"), Some(&2));
        assert_eq!(counts.get("+15558888"), Some(&1));
    }

    #[test]
    fn odd_hour_filter_matches_hour_set() {
        let store = RecordStore::new(
            vec![
                call("+15550001", "Self", "2023-10-24 03:00:00", CallType::Incoming),
                call("+15550002", "Self", "2023-10-24 14:00:00", CallType::Incoming),
            ],
            vec![],
        );
        let odd = store.calls_in_hours(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(odd.len(), 1);
        assert_eq!(odd[0].caller, "+15550001");
    }
}
