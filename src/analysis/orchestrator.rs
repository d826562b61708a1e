//! Analysis Orchestrator: Fixed Measure Batteries
//!
//! Runs every measure against one input and files each outcome in an
//! [`AnalysisRecord`]. A measure that fails (too few samples, a degenerate
//! configuration for this input) is recorded as invalid and the remaining
//! measures still run.

use std::collections::BTreeMap;

use ndarray::{Array2, ArrayView2};
use tracing::{debug, warn};

use super::config::AnalysisConfig;
use super::record::{names, AnalysisRecord, MeasureResult, MeasureValue, RecordMetadata, Unit};
use crate::emergence::{complexity_measure, integration};
use crate::error::{InfoError, Result};
use crate::information::Alphabet;
use crate::spatial::{block_entropy_curve, shannon_entropy, spatial_mutual_information};
use crate::temporal::{
    active_information_storage,
    mutual_information_series,
    time_series_entropy,
    transfer_entropy,
};

/// Runs the measure batteries under one configuration
#[derive(Debug, Clone, Default)]
pub struct AnalysisOrchestrator {
    config: AnalysisConfig,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator, rejecting invalid configurations up front
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Spatial and emergence battery on one field
    pub fn analyse_field(&self, field: ArrayView2<'_, f64>, name: &str) -> AnalysisRecord {
        let (rows, cols) = field.dim();
        debug!(name, rows, cols, "analysing field");

        let mut record = self.new_record(name, vec![rows, cols]);
        self.note_field_alphabet(&mut record, field);
        self.field_battery(&mut record, field);
        record
    }

    /// Field battery plus temporal entropy and AIS of an accompanying series
    ///
    /// Series shorter than `min_series_len` get invalid temporal entries.
    pub fn analyse_field_with_series(
        &self,
        field: ArrayView2<'_, f64>,
        series: &[f64],
        name: &str,
    ) -> AnalysisRecord {
        let mut record = self.analyse_field(field, name);
        self.note_alphabet(&mut record, "series", series);
        self.series_battery(&mut record, series);
        record
    }

    /// Field battery on the final frame, temporal measures on the per-frame mean
    pub fn analyse_sequence(&self, frames: &[Array2<f64>], name: &str) -> AnalysisRecord {
        let (rows, cols) = frames.last().map(|f| f.dim()).unwrap_or((0, 0));
        debug!(name, frames = frames.len(), rows, cols, "analysing field sequence");

        let mut record = self.new_record(name, vec![frames.len(), rows, cols]);

        let Some(last) = frames.last() else {
            for measure in names::FIELD_MEASURES {
                let unit = field_unit(measure);
                self.file(&mut record, measure, Err(InfoError::invalid("sequence has no frames")), unit);
            }
            let empty: Result<MeasureValue> = Err(InfoError::invalid("sequence has no frames"));
            self.file(&mut record, names::TEMPORAL_ENTROPY, empty.clone(), Unit::Bits);
            self.file(&mut record, names::ACTIVE_INFORMATION_STORAGE, empty, Unit::Bits);
            return record;
        };

        self.note_field_alphabet(&mut record, last.view());
        self.field_battery(&mut record, last.view());

        // Empty frames have no mean; NaN is rejected by the discretizer
        let means: Vec<f64> = frames.iter().map(|f| f.mean().unwrap_or(f64::NAN)).collect();
        self.note_alphabet(&mut record, "series", &means);
        self.series_battery(&mut record, &means);
        record
    }

    /// Directed information flow between two aligned series
    pub fn analyse_pair(&self, source: &[f64], target: &[f64], name: &str) -> AnalysisRecord {
        debug!(name, source_len = source.len(), target_len = target.len(), "analysing pair");

        let mut record = self.new_record(name, vec![source.len(), target.len()]);
        self.note_alphabet(&mut record, "source", source);
        self.note_alphabet(&mut record, "target", target);

        let binning = self.config.binning;
        let h = self.config.history_length;

        self.file(&mut record, names::SOURCE_ENTROPY, scalar(time_series_entropy(source, binning)), Unit::Bits);
        self.file(&mut record, names::TARGET_ENTROPY, scalar(time_series_entropy(target, binning)), Unit::Bits);
        self.file(
            &mut record,
            names::TRANSFER_ENTROPY,
            scalar(transfer_entropy(source, target, h, binning)),
            Unit::Bits,
        );
        self.file(
            &mut record,
            names::REVERSE_TRANSFER_ENTROPY,
            scalar(transfer_entropy(target, source, h, binning)),
            Unit::Bits,
        );
        self.file(
            &mut record,
            names::MUTUAL_INFORMATION,
            scalar(mutual_information_series(source, target, binning)),
            Unit::Bits,
        );
        self.file(
            &mut record,
            names::SOURCE_ACTIVE_INFORMATION_STORAGE,
            scalar(active_information_storage(source, h, binning)),
            Unit::Bits,
        );
        self.file(
            &mut record,
            names::TARGET_ACTIVE_INFORMATION_STORAGE,
            scalar(active_information_storage(target, h, binning)),
            Unit::Bits,
        );
        record
    }

    fn field_battery(&self, record: &mut AnalysisRecord, field: ArrayView2<'_, f64>) {
        let c = &self.config;

        self.file(record, names::SHANNON_ENTROPY, scalar(shannon_entropy(field, c.binning)), Unit::Bits);
        self.file(
            record,
            names::SPATIAL_MUTUAL_INFORMATION,
            scalar(spatial_mutual_information(field, c.offset, c.binning)),
            Unit::Bits,
        );
        self.file(
            record,
            names::BLOCK_ENTROPY,
            block_entropy_curve(field, &c.block_scales, c.binning).map(MeasureValue::Curve),
            Unit::Bits,
        );
        self.file(
            record,
            names::INTEGRATION,
            scalar(integration(field, c.integration_partition, c.binning)),
            Unit::Bits,
        );
        self.file(
            record,
            names::COMPLEXITY,
            scalar(complexity_measure(field, &c.block_scales, c.binning)),
            Unit::BitsPerCell,
        );
    }

    fn series_battery(&self, record: &mut AnalysisRecord, series: &[f64]) {
        let c = &self.config;

        if series.len() < c.min_series_len {
            let short = InfoError::insufficient("temporal measures", c.min_series_len, series.len());
            self.file(record, names::TEMPORAL_ENTROPY, Err(short.clone()), Unit::Bits);
            self.file(record, names::ACTIVE_INFORMATION_STORAGE, Err(short), Unit::Bits);
            return;
        }

        self.file(record, names::TEMPORAL_ENTROPY, scalar(time_series_entropy(series, c.binning)), Unit::Bits);
        self.file(
            record,
            names::ACTIVE_INFORMATION_STORAGE,
            scalar(active_information_storage(series, c.history_length, c.binning)),
            Unit::Bits,
        );
    }

    fn new_record(&self, name: &str, shape: Vec<usize>) -> AnalysisRecord {
        AnalysisRecord::new(
            name,
            RecordMetadata {
                shape,
                alphabets: BTreeMap::new(),
                config: self.config.clone(),
            },
        )
    }

    fn note_field_alphabet(&self, record: &mut AnalysisRecord, field: ArrayView2<'_, f64>) {
        if let Ok(discrete) = self.config.binning.discretize_field(field) {
            insert_alphabet(record, "field", discrete.alphabet);
        }
    }

    fn note_alphabet(&self, record: &mut AnalysisRecord, input: &str, values: &[f64]) {
        if let Ok(discrete) = self.config.binning.discretize(values) {
            insert_alphabet(record, input, discrete.alphabet);
        }
    }

    fn file(&self, record: &mut AnalysisRecord, measure: &str, outcome: Result<MeasureValue>, unit: Unit) {
        if let Err(err) = &outcome {
            warn!(record = %record.name, measure, error = %err, "measure recorded as invalid");
        }
        record.insert(measure, MeasureResult::from_outcome(outcome, unit));
    }
}

/// Run the field battery with the default configuration
pub fn analyse_field(field: ArrayView2<'_, f64>, name: &str) -> AnalysisRecord {
    AnalysisOrchestrator::default().analyse_field(field, name)
}

/// Run the pair battery with the default configuration
pub fn analyse_pair(source: &[f64], target: &[f64], name: &str) -> AnalysisRecord {
    AnalysisOrchestrator::default().analyse_pair(source, target, name)
}

fn scalar(outcome: Result<f64>) -> Result<MeasureValue> {
    outcome.map(MeasureValue::Scalar)
}

fn field_unit(measure: &str) -> Unit {
    if measure == names::COMPLEXITY {
        Unit::BitsPerCell
    } else {
        Unit::Bits
    }
}

fn insert_alphabet(record: &mut AnalysisRecord, input: &str, alphabet: Alphabet) {
    record.metadata.alphabets.insert(input.to_string(), alphabet);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StructureClass;
    use crate::information::Binning;
    use ndarray::Array2;

    fn checkerboard(n: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, n), |(i, j)| if (i + j) % 2 == 0 { 1.0 } else { 0.0 })
    }

    #[test]
    fn test_checkerboard_record() {
        let field = checkerboard(4);
        let record = analyse_field(field.view(), "checkerboard");

        let h = record.scalar(names::SHANNON_ENTROPY).unwrap();
        let mi = record.scalar(names::SPATIAL_MUTUAL_INFORMATION).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
        assert!((mi - 1.0).abs() < 1e-12);

        // 8×8 blocks do not fit a 4×4 field
        let curve = record.get(names::BLOCK_ENTROPY).unwrap().as_curve().unwrap();
        assert_eq!(curve.iter().map(|&(k, _)| k).collect::<Vec<_>>(), vec![1, 2, 4]);

        assert_eq!(record.metadata.shape, vec![4, 4]);
        assert_eq!(record.alphabet_size("field"), Some(2));
        assert_eq!(record.interpretation(), StructureClass::Structured);
    }

    #[test]
    fn test_zero_field_all_zero() {
        let field = Array2::from_elem((8, 8), 0.0);
        let record = analyse_field(field.view(), "zeros");
        for measure in [
            names::SHANNON_ENTROPY,
            names::SPATIAL_MUTUAL_INFORMATION,
            names::INTEGRATION,
            names::COMPLEXITY,
        ] {
            assert_eq!(record.scalar(measure), Some(0.0), "{} not zero", measure);
        }
        let curve = record.get(names::BLOCK_ENTROPY).unwrap().as_curve().unwrap();
        assert!(curve.iter().all(|&(_, h)| h == 0.0));
    }

    #[test]
    fn test_failing_measure_does_not_abort_batch() {
        // 1×1 field: no neighbour pairs, no halves, one block scale
        let field = Array2::from_elem((1, 1), 0.3);
        let record = analyse_field(field.view(), "tiny");

        assert_eq!(record.scalar(names::SHANNON_ENTROPY), Some(0.0));
        assert!(!record.is_valid(names::SPATIAL_MUTUAL_INFORMATION));
        assert!(!record.is_valid(names::INTEGRATION));
        assert!(!record.is_valid(names::COMPLEXITY));
        assert!(record.is_valid(names::BLOCK_ENTROPY));
        assert_eq!(record.measures.len(), names::FIELD_MEASURES.len());
    }

    #[test]
    fn test_empty_field_invalid_entries() {
        let field = Array2::<f64>::zeros((0, 0));
        let record = analyse_field(field.view(), "empty");
        assert_eq!(record.invalid_measures().len(), names::FIELD_MEASURES.len());
        assert_eq!(record.alphabet_size("field"), None);
    }

    #[test]
    fn test_pair_record() {
        let source: Vec<f64> = (0..400).map(|i| ((i * 7919) % 13 % 2) as f64).collect();
        let mut target = vec![0.0; source.len()];
        target[1..].copy_from_slice(&source[..source.len() - 1]);

        let record = analyse_pair(&source, &target, "lagged copy");
        let te = record.scalar(names::TRANSFER_ENTROPY).unwrap();
        let reverse = record.scalar(names::REVERSE_TRANSFER_ENTROPY).unwrap();
        assert!(te > reverse, "TE {} should exceed reverse {}", te, reverse);
        assert_eq!(record.alphabet_size("source"), Some(2));
        assert_eq!(record.measures.len(), 7);
        assert_eq!(record.metadata.shape, vec![400, 400]);
    }

    #[test]
    fn test_pair_shape_keeps_both_lengths() {
        let source = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        let target = [1.0, 0.0, 1.0, 0.0];
        let record = analyse_pair(&source, &target, "mismatched");
        assert_eq!(record.metadata.shape, vec![6, 4]);
        assert!(!record.is_valid(names::TRANSFER_ENTROPY));
        assert!(record.is_valid(names::SOURCE_ENTROPY));
    }

    #[test]
    fn test_negative_integration_reads_as_unstructured() {
        // Two alternating columns plus a zero column outside both halves
        let field = Array2::from_shape_fn((8, 3), |(i, j)| match j {
            0 => (i % 2) as f64,
            1 => ((i + 1) % 2) as f64,
            _ => 0.0,
        });
        let record = analyse_field(field.view(), "odd width");
        let phi = record.scalar(names::INTEGRATION).unwrap();
        assert!(phi < 0.0, "Expected Φ<0, got {}", phi);
        assert!(record.scalar(names::SPATIAL_MUTUAL_INFORMATION).unwrap() < 0.5);
        assert_eq!(record.interpretation(), StructureClass::Unstructured);
    }

    #[test]
    fn test_pair_mismatched_lengths() {
        let record = analyse_pair(&[0.0, 1.0, 0.0], &[1.0, 0.0], "mismatch");
        assert!(!record.is_valid(names::TRANSFER_ENTROPY));
        assert!(!record.is_valid(names::MUTUAL_INFORMATION));
        // Per-series measures are unaffected
        assert!(record.is_valid(names::SOURCE_ENTROPY));
        assert!(record.is_valid(names::TARGET_ENTROPY));
    }

    #[test]
    fn test_field_with_short_series() {
        let field = checkerboard(4);
        let record = AnalysisOrchestrator::default()
            .analyse_field_with_series(field.view(), &[0.1, 0.2], "short");
        assert!(!record.is_valid(names::TEMPORAL_ENTROPY));
        assert!(record.is_valid(names::SHANNON_ENTROPY));
    }

    #[test]
    fn test_sequence() {
        let frames: Vec<Array2<f64>> = (0..20)
            .map(|t| Array2::from_elem((4, 4), (t % 2) as f64))
            .collect();
        let record = AnalysisOrchestrator::default().analyse_sequence(&frames, "blink");
        assert_eq!(record.metadata.shape, vec![20, 4, 4]);
        // Mean alternates 0, 1, 0, 1, ...
        let ais = record.scalar(names::ACTIVE_INFORMATION_STORAGE).unwrap();
        assert!((ais - 1.0).abs() < 0.01, "got {}", ais);
        assert_eq!(record.scalar(names::SHANNON_ENTROPY), Some(0.0));
    }

    #[test]
    fn test_empty_sequence() {
        let record = AnalysisOrchestrator::default().analyse_sequence(&[], "none");
        assert!(record.measures.values().all(|m| !m.is_valid()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig { binning: Binning::Fixed(0), ..AnalysisConfig::default() };
        assert!(AnalysisOrchestrator::new(config).is_err());
    }

    #[test]
    fn test_deterministic() {
        let field = Array2::from_shape_fn((12, 12), |(i, j)| ((i * 31 + j * 17) % 7) as f64 / 7.0);
        let a = analyse_field(field.view(), "det");
        let b = analyse_field(field.view(), "det");
        assert_eq!(a, b);
    }
}
