// Aggregator — runs the catalog and folds findings into a risk report.
//
// Aggregation is a fold over each detector's immutable finding sequence,
// not an in-place counter: detectors contribute independently, so the
// final score is the same for any evaluation order of the same catalog.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::catalog::DetectorCatalog;
use crate::records::RecordStore;
use crate::report::{Detections, FindingCategory, RiskReport};

/// Analyze a record store with the given catalog, using the current local
/// wall clock as the moment of analysis.
pub fn analyze(store: &RecordStore, catalog: &DetectorCatalog) -> RiskReport {
    analyze_at(store, catalog, Local::now().naive_local())
}

/// Analyze with an explicit "now" — the deterministic entry point that
/// tests and report generation use.
///
/// Never errors: empty record sequences yield a score-0 LOW report with
/// empty finding lists.
pub fn analyze_at(
    store: &RecordStore,
    catalog: &DetectorCatalog,
    now: NaiveDateTime,
) -> RiskReport {
    info!(
        calls = store.calls().len(),
        messages = store.messages().len(),
        detectors = catalog.len(),
        "starting forensic analysis"
    );

    let mut detections = Detections::default();
    for detector in catalog.iter() {
        let findings = detector.evaluate(store, now);
        debug!(
            detector = detector.name(),
            findings = findings.len(),
            "detector complete"
        );
        let bucket = match detector.category() {
            FindingCategory::SuspiciousBehavior => &mut detections.suspicious_behavior,
            FindingCategory::MalwareIndicator => &mut detections.malware_indicators,
            FindingCategory::Integrity => &mut detections.integrity_anomalies,
        };
        bucket.extend(findings);
    }

    let report = RiskReport::from_detections(detections);
    info!(
        score = report.score(),
        level = %report.level(),
        findings = report.finding_count(),
        "analysis complete"
    );
    report
}
