// Detector trait — the polymorphic rule unit.
//
// Each detector inspects the record store for one class of anomaly and
// emits zero or more weighted findings. Detectors are pure and read-only:
// running them in any order (or in parallel) against the same snapshot
// yields the same multiset of findings. Finding nothing is an empty vec,
// never an error.

pub mod behavior;
pub mod classifier;
pub mod integrity;
pub mod malware;

use chrono::NaiveDateTime;

use crate::records::RecordStore;
use crate::report::{Finding, FindingCategory};

/// One independent rule unit.
///
/// `now` is the moment of analysis, passed in rather than read from the
/// clock so a run is deterministic and testable.
pub trait Detector: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Which report category this detector's findings land in.
    fn category(&self) -> FindingCategory;

    fn evaluate(&self, store: &RecordStore, now: NaiveDateTime) -> Vec<Finding>;
}

/// The odd-hours window: 12 AM through 5 AM local time.
pub const ODD_HOURS: [u32; 6] = [0, 1, 2, 3, 4, 5];
