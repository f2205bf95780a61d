// Detector catalog — the fixed, ordered registry of rule units.
//
// Registration order is the only ordering the engine depends on: the
// aggregator concatenates findings per category in this order, so a given
// catalog always produces a byte-identical report for the same input.

use anyhow::Result;

use crate::detectors::behavior::{BurstVolume, ContactRepetition, OddHoursCalls, OddHoursMessages};
use crate::detectors::classifier::{ClassifierDetector, MessageClassifier};
use crate::detectors::integrity::{DuplicateRecords, FutureTimestamp, MissingFields};
use crate::detectors::malware::{MaliciousFileRef, PhishingKeyword, UnsafeLink, WangiriPattern};
use crate::detectors::Detector;

/// Ordered list of detectors for one analysis run.
pub struct DetectorCatalog {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorCatalog {
    /// An empty catalog; useful for tests and custom builds.
    pub fn empty() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// The standard eleven rule detectors in a fixed order:
    /// integrity checks, then malware indicators, then behavior.
    ///
    /// Errors only if a link/extension pattern fails to compile.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::empty();
        catalog.register(Box::new(FutureTimestamp));
        catalog.register(Box::new(DuplicateRecords));
        catalog.register(Box::new(MissingFields));
        catalog.register(Box::new(PhishingKeyword));
        catalog.register(Box::new(UnsafeLink::new()?));
        catalog.register(Box::new(MaliciousFileRef::new()?));
        catalog.register(Box::new(WangiriPattern::default()));
        catalog.register(Box::new(BurstVolume::default()));
        catalog.register(Box::new(OddHoursCalls));
        catalog.register(Box::new(OddHoursMessages));
        catalog.register(Box::new(ContactRepetition::default()));
        Ok(catalog)
    }

    /// Append a detector. Existing detectors are never affected.
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    /// Append an optional learned classifier as one more
    /// malware-indicator detector.
    pub fn with_classifier(mut self, classifier: Box<dyn MessageClassifier>) -> Self {
        self.register(Box::new(ClassifierDetector::new(classifier)));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Detector> {
        self.detectors.iter().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
