// Case-file ingestion glue.
//
// The engine only consumes a typed RecordStore; this module is the thin
// loader that builds one from a JSON case file. Field aliases cover the
// shapes different extraction tools emit (caller vs caller_number,
// content vs message_content, type vs call_type).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::records::{CallRecord, MessageRecord, RecordStore};

#[derive(Debug, Deserialize)]
struct CaseFile {
    #[serde(default)]
    calls: Vec<CallRecord>,
    #[serde(default, alias = "sms")]
    messages: Vec<MessageRecord>,
}

/// Parse a JSON case document into a record store.
///
/// Missing `calls` or `messages` arrays are valid — an empty store is
/// legitimate input, not an error.
pub fn parse_case(json: &str) -> Result<RecordStore> {
    let case: CaseFile = serde_json::from_str(json).context("parsing case file JSON")?;
    Ok(RecordStore::new(case.calls, case.messages))
}

/// Load a case file from disk.
pub fn load_case(path: &Path) -> Result<RecordStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading case file {}", path.display()))?;
    let store = parse_case(&json)?;
    info!(
        path = %path.display(),
        calls = store.calls().len(),
        messages = store.messages().len(),
        "case file loaded"
    );
    Ok(store)
}
