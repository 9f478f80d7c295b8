use serde::Serialize;

use crate::constants::{ANNOTATOR_ID_COLUMN, CONFIDENCE_COLUMN, LABEL_COLUMN, TEXT_COLUMN};
use crate::domain::{AcceptedAnnotation, RawRecord};

/// Quality Check 1 (Confidence): per-record accept/drop decision.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// Record passes QC1 and proceeds to grouping.
    Accept(AcceptedAnnotation),
    /// Record fails QC1 and is silently discarded.
    Drop(DropReason),
}

/// Why a record was discarded during QC1. Dropped records are counted by
/// reason but never individually logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DropReason {
    /// No `confidence_score` column value on this row.
    MissingConfidence,
    /// `confidence_score` does not parse as a number.
    InvalidConfidence,
    /// Score parses but falls below the threshold.
    BelowThreshold,
    /// Confidence passed but the row has no `text` value.
    MissingText,
    /// Confidence passed but the row has no `label` value.
    MissingLabel,
}

/// Trait for implementing the QC1 accept/drop policy.
pub trait ConfidenceGate {
    fn assess(&self, record: &RawRecord) -> GateDecision;
}

/// Default confidence gate: inclusive numeric threshold on the
/// `confidence_score` column.
pub struct ThresholdGate {
    threshold: f64,
}

impl ThresholdGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ThresholdGate {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_CONFIDENCE_THRESHOLD)
    }
}

impl ConfidenceGate for ThresholdGate {
    fn assess(&self, record: &RawRecord) -> GateDecision {
        let raw_confidence = match record.get(CONFIDENCE_COLUMN) {
            Some(value) => value,
            None => return GateDecision::Drop(DropReason::MissingConfidence),
        };

        let confidence: f64 = match raw_confidence.trim().parse() {
            Ok(value) => value,
            Err(_) => return GateDecision::Drop(DropReason::InvalidConfidence),
        };

        // Inclusive boundary: a score exactly at the threshold passes.
        if confidence < self.threshold {
            return GateDecision::Drop(DropReason::BelowThreshold);
        }

        let text = match record.get(TEXT_COLUMN) {
            Some(value) => value,
            None => return GateDecision::Drop(DropReason::MissingText),
        };
        let label = match record.get(LABEL_COLUMN) {
            Some(value) => value,
            None => return GateDecision::Drop(DropReason::MissingLabel),
        };

        GateDecision::Accept(AcceptedAnnotation {
            text: text.to_string(),
            annotator_id: record.get(ANNOTATOR_ID_COLUMN).map(str::to_string),
            label: label.to_string(),
            confidence_score: confidence,
        })
    }
}

/// Dropped-record tally, one counter per reason. Together with the
/// accepted list this partitions the raw input exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DropCounts {
    pub missing_confidence: usize,
    pub invalid_confidence: usize,
    pub below_threshold: usize,
    pub missing_text: usize,
    pub missing_label: usize,
}

impl DropCounts {
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingConfidence => self.missing_confidence += 1,
            DropReason::InvalidConfidence => self.invalid_confidence += 1,
            DropReason::BelowThreshold => self.below_threshold += 1,
            DropReason::MissingText => self.missing_text += 1,
            DropReason::MissingLabel => self.missing_label += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_confidence
            + self.invalid_confidence
            + self.below_threshold
            + self.missing_text
            + self.missing_label
    }
}

/// Result of running QC1 over the whole raw batch.
#[derive(Debug, Clone, PartialEq)]
pub struct QcOutcome {
    pub accepted: Vec<AcceptedAnnotation>,
    pub dropped: DropCounts,
}

/// Apply the confidence gate to every raw record, preserving input order
/// among the accepted annotations.
pub fn filter_by_confidence(records: &[RawRecord], gate: &dyn ConfidenceGate) -> QcOutcome {
    let mut accepted = Vec::new();
    let mut dropped = DropCounts::default();

    for record in records {
        match gate.assess(record) {
            GateDecision::Accept(annotation) => accepted.push(annotation),
            GateDecision::Drop(reason) => dropped.record(reason),
        }
    }

    QcOutcome { accepted, dropped }
}
