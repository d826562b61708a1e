//! Measure results and the analysis record

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::AnalysisConfig;
use crate::error::Result;
use crate::information::Alphabet;

/// Names under which the orchestrator files each measure
pub mod names {
    pub const SHANNON_ENTROPY: &str = "shannon_entropy";
    pub const SPATIAL_MUTUAL_INFORMATION: &str = "spatial_mutual_information";
    pub const BLOCK_ENTROPY: &str = "block_entropy";
    pub const INTEGRATION: &str = "integration";
    pub const COMPLEXITY: &str = "complexity";

    pub const TEMPORAL_ENTROPY: &str = "temporal_entropy";
    pub const ACTIVE_INFORMATION_STORAGE: &str = "active_information_storage";

    pub const SOURCE_ENTROPY: &str = "source_entropy";
    pub const TARGET_ENTROPY: &str = "target_entropy";
    pub const TRANSFER_ENTROPY: &str = "transfer_entropy";
    pub const REVERSE_TRANSFER_ENTROPY: &str = "reverse_transfer_entropy";
    pub const MUTUAL_INFORMATION: &str = "mutual_information";
    pub const SOURCE_ACTIVE_INFORMATION_STORAGE: &str = "source_active_information_storage";
    pub const TARGET_ACTIVE_INFORMATION_STORAGE: &str = "target_active_information_storage";

    /// Battery run on every field
    pub const FIELD_MEASURES: [&str; 5] = [
        SHANNON_ENTROPY,
        SPATIAL_MUTUAL_INFORMATION,
        BLOCK_ENTROPY,
        INTEGRATION,
        COMPLEXITY,
    ];
}

/// Mutual information above which a field counts as strongly structured (bits)
pub const STRONG_STRUCTURE_MI: f64 = 0.5;

/// Integration strictly above which a field counts as emergent (bits)
pub const EMERGENCE_MIN_INTEGRATION: f64 = 0.0;

/// Unit of a measure value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Bits,
    /// Entropy density (block entropy divided by block area)
    BitsPerCell,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Bits => write!(f, "bits"),
            Unit::BitsPerCell => write!(f, "bits/cell"),
        }
    }
}

/// A scalar, or an ordered `(scale, value)` curve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasureValue {
    Scalar(f64),
    Curve(Vec<(usize, f64)>),
}

/// Whether a value was actually computed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Validity {
    Valid,
    /// Undefined for this input; the value is NaN
    Invalid { reason: String },
}

/// One named entry of an [`AnalysisRecord`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasureResult {
    pub value: MeasureValue,
    pub unit: Unit,
    pub validity: Validity,
}

impl MeasureResult {
    pub fn scalar(value: f64, unit: Unit) -> Self {
        Self {
            value: MeasureValue::Scalar(value),
            unit,
            validity: Validity::Valid,
        }
    }

    pub fn curve(points: Vec<(usize, f64)>, unit: Unit) -> Self {
        Self {
            value: MeasureValue::Curve(points),
            unit,
            validity: Validity::Valid,
        }
    }

    /// NaN-valued entry carrying the reason it is undefined
    pub fn invalid(reason: impl Into<String>, unit: Unit) -> Self {
        Self {
            value: MeasureValue::Scalar(f64::NAN),
            unit,
            validity: Validity::Invalid { reason: reason.into() },
        }
    }

    /// Valid entry on success, invalid entry carrying the error text otherwise
    pub fn from_outcome(outcome: Result<MeasureValue>, unit: Unit) -> Self {
        match outcome {
            Ok(value) => Self { value, unit, validity: Validity::Valid },
            Err(err) => Self::invalid(err.to_string(), unit),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.validity, Validity::Valid)
    }

    /// Scalar value, if valid and scalar
    pub fn as_scalar(&self) -> Option<f64> {
        match (&self.validity, &self.value) {
            (Validity::Valid, MeasureValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Curve points, if valid and a curve
    pub fn as_curve(&self) -> Option<&[(usize, f64)]> {
        match (&self.validity, &self.value) {
            (Validity::Valid, MeasureValue::Curve(points)) => Some(points.as_slice()),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match &self.validity {
            Validity::Valid => None,
            Validity::Invalid { reason } => Some(reason),
        }
    }
}

impl fmt::Display for MeasureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Validity::Invalid { reason } = &self.validity {
            return write!(f, "undefined ({})", reason);
        }
        match &self.value {
            MeasureValue::Scalar(v) => write!(f, "{:.3} {}", v, self.unit),
            MeasureValue::Curve(points) => {
                let parts: Vec<String> = points
                    .iter()
                    .map(|(k, v)| format!("k={}: {:.3}", k, v))
                    .collect();
                write!(f, "[{}] {}", parts.join(", "), self.unit)
            }
        }
    }
}

/// Coarse reading of a field's structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StructureClass {
    /// Strong neighbour coupling and positive integration
    StructuredEmergent,
    /// Strong neighbour coupling, little integration
    Structured,
    /// Weak coupling, but the whole field carries more than its parts
    WeaklyStructuredEmergent,
    /// Neither
    Unstructured,
}

impl StructureClass {
    pub fn describe(&self) -> &'static str {
        match self {
            StructureClass::StructuredEmergent => "strong spatial structure + emergence",
            StructureClass::Structured => "strong spatial structure, weak emergence",
            StructureClass::WeaklyStructuredEmergent => "weak structure but whole > sum of parts",
            StructureClass::Unstructured => "low structure, spatially independent",
        }
    }
}

/// Input shape, alphabets and configuration behind a record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordMetadata {
    /// Input shape: `[rows, cols]`, `[source_len, target_len]`, or `[frames, rows, cols]`
    pub shape: Vec<usize>,
    /// Alphabet per discretized input (e.g. "field", "source", "target")
    pub alphabets: BTreeMap<String, Alphabet>,
    pub config: AnalysisConfig,
}

/// Output of one orchestrator call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisRecord {
    pub name: String,
    pub measures: BTreeMap<String, MeasureResult>,
    pub metadata: RecordMetadata,
}

impl AnalysisRecord {
    pub fn new(name: impl Into<String>, metadata: RecordMetadata) -> Self {
        Self {
            name: name.into(),
            measures: BTreeMap::new(),
            metadata,
        }
    }

    pub fn insert(&mut self, measure: &str, result: MeasureResult) {
        self.measures.insert(measure.to_string(), result);
    }

    pub fn get(&self, measure: &str) -> Option<&MeasureResult> {
        self.measures.get(measure)
    }

    /// Scalar value of a valid measure
    pub fn scalar(&self, measure: &str) -> Option<f64> {
        self.get(measure).and_then(MeasureResult::as_scalar)
    }

    pub fn is_valid(&self, measure: &str) -> bool {
        self.get(measure).is_some_and(MeasureResult::is_valid)
    }

    /// Alphabet size of a named input, if it could be discretized
    pub fn alphabet_size(&self, input: &str) -> Option<usize> {
        self.metadata.alphabets.get(input).map(|a| a.size)
    }

    /// `(measure, reason)` for every invalid entry
    pub fn invalid_measures(&self) -> Vec<(&str, &str)> {
        self.measures
            .iter()
            .filter_map(|(name, result)| result.reason().map(|r| (name.as_str(), r)))
            .collect()
    }

    /// Classify from spatial MI and integration; undefined values count as 0
    pub fn interpretation(&self) -> StructureClass {
        let mi = self.scalar(names::SPATIAL_MUTUAL_INFORMATION).unwrap_or(0.0);
        let phi = self.scalar(names::INTEGRATION).unwrap_or(0.0);
        let strong = mi > STRONG_STRUCTURE_MI;
        let emergent = phi > EMERGENCE_MIN_INTEGRATION;

        match (strong, emergent) {
            (true, true) => StructureClass::StructuredEmergent,
            (true, false) => StructureClass::Structured,
            (false, true) => StructureClass::WeaklyStructuredEmergent,
            (false, false) => StructureClass::Unstructured,
        }
    }

    /// Multi-line human-readable report
    pub fn summary(&self) -> String {
        let mut out = format!("Information-theoretic analysis: {}\n", self.name);
        out.push_str(&format!("  shape = {:?}\n", self.metadata.shape));
        for (input, alphabet) in &self.metadata.alphabets {
            out.push_str(&format!("  alphabet[{}] = {} symbols\n", input, alphabet.size));
        }
        for (name, result) in &self.measures {
            out.push_str(&format!("  {:<34} = {}\n", name, result));
        }
        if self.measures.contains_key(names::SPATIAL_MUTUAL_INFORMATION) {
            out.push_str(&format!("  → {}\n", self.interpretation().describe()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InfoError;

    fn empty_record() -> AnalysisRecord {
        AnalysisRecord::new(
            "test",
            RecordMetadata {
                shape: vec![4, 4],
                alphabets: BTreeMap::new(),
                config: AnalysisConfig::default(),
            },
        )
    }

    #[test]
    fn test_invalid_result_is_nan() {
        let r = MeasureResult::from_outcome(
            Err(InfoError::insufficient("transfer_entropy", 3, 2)),
            Unit::Bits,
        );
        assert!(!r.is_valid());
        assert!(matches!(r.value, MeasureValue::Scalar(v) if v.is_nan()));
        assert_eq!(r.as_scalar(), None);
        assert!(r.reason().unwrap().contains("transfer_entropy"));
    }

    #[test]
    fn test_curve_access() {
        let r = MeasureResult::curve(vec![(1, 1.0), (2, 1.5)], Unit::Bits);
        assert_eq!(r.as_scalar(), None);
        assert_eq!(r.as_curve().unwrap().len(), 2);
        assert_eq!(r.to_string(), "[k=1: 1.000, k=2: 1.500] bits");
    }

    #[test]
    fn test_interpretation() {
        let mut record = empty_record();
        assert_eq!(record.interpretation(), StructureClass::Unstructured);

        record.insert(names::SPATIAL_MUTUAL_INFORMATION, MeasureResult::scalar(0.9, Unit::Bits));
        assert_eq!(record.interpretation(), StructureClass::Structured);

        record.insert(names::INTEGRATION, MeasureResult::scalar(0.4, Unit::Bits));
        assert_eq!(record.interpretation(), StructureClass::StructuredEmergent);

        record.insert(names::SPATIAL_MUTUAL_INFORMATION, MeasureResult::invalid("n/a", Unit::Bits));
        assert_eq!(record.interpretation(), StructureClass::WeaklyStructuredEmergent);

        record.insert(names::INTEGRATION, MeasureResult::scalar(-0.08, Unit::Bits));
        assert_eq!(record.interpretation(), StructureClass::Unstructured);
        record.insert(names::INTEGRATION, MeasureResult::scalar(0.0, Unit::Bits));
        assert_eq!(record.interpretation(), StructureClass::Unstructured);
    }

    #[test]
    fn test_summary_lists_measures() {
        let mut record = empty_record();
        record.insert(names::SHANNON_ENTROPY, MeasureResult::scalar(1.0, Unit::Bits));
        record.insert(names::COMPLEXITY, MeasureResult::invalid("too small", Unit::BitsPerCell));
        let text = record.summary();
        assert!(text.contains("shannon_entropy"));
        assert!(text.contains("1.000 bits"));
        assert!(text.contains("undefined (too small)"));
        assert_eq!(record.invalid_measures(), vec![(names::COMPLEXITY, "too small")]);
    }
}
