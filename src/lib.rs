// Dialscope: forensic risk triage for call and message records.
//
// This is the library root. The core is the detection-and-scoring engine
// (records -> detectors -> analyzer -> report); ingest, timeline, and
// output are the thin glue around it.

pub mod analyzer;
pub mod catalog;
pub mod detectors;
pub mod ingest;
pub mod output;
pub mod records;
pub mod report;
pub mod timeline;
pub mod triage;
