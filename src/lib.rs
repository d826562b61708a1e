//! # emergence-info
//!
//! Information-theoretic measures of emergence for fields and time series
//! produced by dynamical simulations (cellular automata, reaction-diffusion,
//! swarms, oscillator networks).
//!
//! ## Pipeline
//!
//! ```text
//! raw field / series
//!     → Discretizer        (finite alphabet, bits)
//!     → Entropy engine     (empirical distributions, H, H(A|B), I(X;Y))
//!     → Spatial / temporal (field entropy, spatial MI, block entropy,
//!                           series entropy, transfer entropy, AIS)
//!     → Emergence          (integration Φ_approx, multi-scale complexity)
//!     → Orchestrator       (AnalysisRecord per field or series pair)
//! ```
//!
//! ## Estimators
//!
//! Everything is a plug-in (maximum-likelihood) histogram estimator over a
//! finite alphabet. These are biased low for small samples relative to the
//! alphabet size; integration and complexity are reproducible proxies, not
//! the full integrated-information or TSE-complexity constructions.
//!
//! Every measure is a pure function of its input: no caching, no global
//! state, safe to call from many threads at once.
//!
//! ## Example
//!
//! ```
//! use emergence_info::{analyse_field, fields, names};
//!
//! let board = fields::checkerboard(4);
//! let record = analyse_field(board.view(), "checkerboard");
//!
//! let h = record.scalar(names::SHANNON_ENTROPY).unwrap();
//! let mi = record.scalar(names::SPATIAL_MUTUAL_INFORMATION).unwrap();
//! assert!((h - 1.0).abs() < 1e-9);
//! assert!((mi - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod information;
pub mod spatial;
pub mod temporal;
pub mod emergence;
pub mod analysis;
pub mod fields;

pub use error::{InfoError, Result};

// Re-exports from information
pub use information::{
    discretize,
    discretize_field,
    entropy,
    joint_entropy,
    joint_entropy_pairs,
    conditional_entropy,
    mutual_information,
    Alphabet,
    Binning,
    DiscreteField,
    Discretized,
    EmpiricalDistribution,
    Quantization,
};

// Re-exports from spatial
pub use spatial::{
    shannon_entropy,
    spatial_mutual_information,
    block_entropy,
    block_entropy_curve,
};

// Re-exports from temporal
pub use temporal::{
    time_series_entropy,
    transfer_entropy,
    active_information_storage,
    mutual_information_series,
};

// Re-exports from emergence
pub use emergence::{
    integration,
    complexity_measure,
    entropy_density,
    Partition,
};

// Re-exports from analysis
pub use analysis::{
    analyse_field,
    analyse_pair,
    names,
    AnalysisConfig,
    AnalysisOrchestrator,
    AnalysisRecord,
    MeasureResult,
    MeasureValue,
    RecordMetadata,
    StructureClass,
    Unit,
    Validity,
};
