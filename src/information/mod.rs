//! Information Module: Discretization and Shannon Estimation
//!
//! The two primitives every measure in this crate is built from:
//!
//! - **Discretizer**: maps continuous samples onto a finite alphabet so
//!   probabilities can be estimated by counting.
//! - **Entropy engine**: empirical distributions over symbols or symbol
//!   tuples, and the Shannon quantities derived from them.
//!
//! ### Units
//!
//! Every quantity is reported in bits (log base 2). An alphabet is fixed
//! once per input and reused for all joint computations on that input,
//! so entropies of the same data are always comparable.

mod discretize;
mod entropy;

pub use discretize::{
    discretize,
    discretize_field,
    Alphabet,
    Binning,
    DiscreteField,
    Discretized,
    Quantization,
    DEFAULT_BINS,
    DEFAULT_EXACT_THRESHOLD,
};
pub use entropy::{
    conditional_entropy,
    entropy,
    joint_entropy,
    joint_entropy_pairs,
    mutual_information,
    EmpiricalDistribution,
};
