//! Analysis Module: Orchestrated Measure Batteries
//!
//! Public entry point for simulation and dashboard code:
//!
//! - [`analyse_field`]: entropy, spatial MI, block-entropy curve,
//!   integration and complexity of one 2D field
//! - [`analyse_pair`]: entropies, transfer entropy in both directions,
//!   mutual information and AIS of two aligned series
//! - [`AnalysisOrchestrator`]: the same batteries under a custom
//!   [`AnalysisConfig`], plus field+series and field-sequence variants
//!
//! Each call returns an [`AnalysisRecord`] mapping measure names to
//! [`MeasureResult`]s (value, unit, validity) plus the metadata needed to
//! reproduce it. Calls share no state and can run concurrently.

mod config;
mod orchestrator;
mod record;

pub use config::AnalysisConfig;
pub use orchestrator::{analyse_field, analyse_pair, AnalysisOrchestrator};
pub use record::{
    names,
    AnalysisRecord,
    MeasureResult,
    MeasureValue,
    RecordMetadata,
    StructureClass,
    Unit,
    Validity,
    EMERGENCE_MIN_INTEGRATION,
    STRONG_STRUCTURE_MI,
};
