// Timeline reconstruction — normalize calls and messages into one
// chronological event stream.
//
// Each event carries a coarse risk tag so a reviewer can scan the stream
// for the interesting entries: missed calls rank Medium (callback bait),
// other calls Low, messages carry their triage level.

use serde::{Deserialize, Serialize};

use crate::records::{CallType, RecordStore, RecordTimestamp};
use crate::report::MessageRiskLevel;
use crate::triage::score_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Call,
    Message,
}

/// One normalized timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: RecordTimestamp,
    pub source: EventSource,
    pub title: String,
    pub description: String,
    pub risk: MessageRiskLevel,
}

/// Build the unified chronological timeline for a record store.
///
/// Events sort by timestamp, earliest first; records with unparseable
/// timestamps sort to the end so they stay visible instead of vanishing.
pub fn build_timeline(store: &RecordStore) -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(store.calls().len() + store.messages().len());

    for call in store.calls() {
        let title = match call.call_type {
            CallType::Incoming => "Incoming Call",
            CallType::Outgoing => "Outgoing Call",
            CallType::Missed => "Missed Call",
        };
        let risk = if call.call_type == CallType::Missed {
            MessageRiskLevel::Medium
        } else {
            MessageRiskLevel::Low
        };
        events.push(TimelineEvent {
            timestamp: call.timestamp.clone(),
            source: EventSource::Call,
            title: title.to_string(),
            description: format!("From {} ({}s)", call.caller, call.duration),
            risk,
        });
    }

    for message in store.messages() {
        let triage = score_message(&message.content);
        events.push(TimelineEvent {
            timestamp: message.timestamp.clone(),
            source: EventSource::Message,
            title: "Message".to_string(),
            description: format!("{}: {}", message.sender, message.content),
            risk: triage.risk_level,
        });
    }

    events.sort_by_key(|e| match &e.timestamp {
        RecordTimestamp::Valid(ts) => (0, Some(*ts)),
        RecordTimestamp::Invalid(_) => (1, None),
    });
    events
}
