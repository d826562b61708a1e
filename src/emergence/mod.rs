//! Emergence Module: Whole-versus-Parts and Multi-scale Proxies
//!
//! Two deliberately simple summaries built on the spatial estimators:
//!
//! - **Integration** Φ_approx: how much more information the whole field
//!   carries than its halves (or quadrants) do on average
//! - **Complexity** C: how strongly per-cell entropy falls from fine to
//!   coarse scales
//!
//! Both are reproducible approximations. They are not integrated
//! information (IIT) or canonical TSE complexity, and should not be
//! compared against values from those literatures.

mod complexity;
mod integration;

pub use complexity::{complexity_measure, entropy_density};
pub use integration::{integration, Partition};
