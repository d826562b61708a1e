//! Spatial Module: Information Content of a Single Field
//!
//! Measures computed on one 2D snapshot of a simulation:
//!
//! - **Shannon entropy** H: disorder of the value distribution
//! - **Spatial mutual information** I(X; Y): how much a cell's value tells
//!   about its neighbour at a fixed offset (local structure)
//! - **Block entropy** H_k: entropy of `k×k` patterns, probing structure
//!   across scales
//!
//! A noise field has high H and near-zero I; a crystal-like pattern has
//! low block entropy at every scale; structured fields sit in between.

mod block;
mod measures;

pub use block::{block_entropy, block_entropy_curve, DEFAULT_BLOCK_SCALES};
pub use measures::{shannon_entropy, spatial_mutual_information, DEFAULT_OFFSET};
