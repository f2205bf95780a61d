// Record types — the typed, immutable shapes the engine consumes.
//
// These are separate from the ingestion glue so the detectors can work
// against typed records without caring where they came from (JSON case
// file, device extraction, test fixture).

pub mod store;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub use store::RecordStore;

/// Direction/outcome of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallType {
    Incoming,
    Outgoing,
    Missed,
}

/// A record timestamp that survived or failed parsing.
///
/// Extractions routinely contain garbage timestamps. Those are kept as an
/// explicit `Invalid` marker with the raw text preserved — never silently
/// dropped — so the integrity detectors can count them while the temporal
/// detectors skip them.
///
/// Valid timestamps are local wall-clock (`NaiveDateTime`), matching how
/// device logs record them. No timezone normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordTimestamp {
    Valid(NaiveDateTime),
    Invalid(String),
}

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

impl RecordTimestamp {
    /// Parse a raw timestamp string leniently.
    ///
    /// Tries the common log layouts, then RFC 3339. Anything that fails
    /// all of them becomes `Invalid` carrying the original text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        for format in TIMESTAMP_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
                return RecordTimestamp::Valid(ts);
            }
        }
        if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(trimmed) {
            return RecordTimestamp::Valid(ts.naive_local());
        }
        RecordTimestamp::Invalid(raw.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, RecordTimestamp::Valid(_))
    }

    /// The parsed point in time, if any.
    pub fn as_valid(&self) -> Option<NaiveDateTime> {
        match self {
            RecordTimestamp::Valid(ts) => Some(*ts),
            RecordTimestamp::Invalid(_) => None,
        }
    }

    /// Hour of day (0-23) for valid timestamps.
    pub fn hour(&self) -> Option<u32> {
        self.as_valid().map(|ts| ts.hour())
    }
}

impl From<String> for RecordTimestamp {
    fn from(raw: String) -> Self {
        RecordTimestamp::parse(&raw)
    }
}

impl From<RecordTimestamp> for String {
    fn from(ts: RecordTimestamp) -> Self {
        match ts {
            RecordTimestamp::Valid(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            RecordTimestamp::Invalid(raw) => raw,
        }
    }
}

impl std::fmt::Display for RecordTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordTimestamp::Valid(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            RecordTimestamp::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

/// One call-detail record. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallRecord {
    /// Caller identifier; extractions may report "Unknown".
    #[serde(alias = "caller_number")]
    pub caller: String,
    #[serde(alias = "receiver_number")]
    pub receiver: String,
    pub timestamp: RecordTimestamp,
    /// Call duration in whole seconds.
    #[serde(alias = "duration_secs")]
    pub duration: u32,
    #[serde(rename = "type", alias = "call_type")]
    pub call_type: CallType,
}

/// One message-content record. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRecord {
    pub sender: String,
    pub receiver: String,
    pub timestamp: RecordTimestamp,
    /// Message body; legitimately empty for some record types.
    #[serde(alias = "message_content")]
    pub content: String,
    /// Pre-computed link flag from the extraction tool, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_link: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_layout() {
        let ts = RecordTimestamp::parse("2023-10-24 10:00:00");
        assert!(ts.is_valid());
        assert_eq!(ts.hour(), Some(10));
    }

    #[test]
    fn parses_iso_t_layout() {
        let ts = RecordTimestamp::parse("2023-10-24T02:15:00");
        assert_eq!(ts.hour(), Some(2));
    }

    #[test]
    fn parses_minute_precision_layout() {
        let ts = RecordTimestamp::parse("2023-10-24 23:05");
        assert_eq!(ts.hour(), Some(23));
    }

    #[test]
    fn parses_rfc3339() {
        let ts = RecordTimestamp::parse("2023-10-24T10:00:00+02:00");
        assert!(ts.is_valid());
    }

    #[test]
    fn garbage_becomes_invalid_marker() {
        let ts = RecordTimestamp::parse("not a time");
        assert!(!ts.is_valid());
        assert_eq!(ts.hour(), None);
        assert_eq!(String::from(ts), "not a time");
    }

    #[test]
    fn display_round_trips_valid_timestamp() {
        let raw = "2023-10-24 10:00:00";
        let ts = RecordTimestamp::parse(raw);
        assert_eq!(ts.to_string(), raw);
    }

    #[test]
    fn serde_preserves_invalid_raw_text() {
        let json = "\"99/99/9999\"";
        let ts: RecordTimestamp = serde_json::from_str(json).unwrap();
        assert!(!ts.is_valid());
        assert_eq!(serde_json::to_string(&ts).unwrap(), json);
    }
}
