//! Analysis configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::emergence::Partition;
use crate::error::{InfoError, Result};
use crate::information::Binning;
use crate::spatial::{DEFAULT_BLOCK_SCALES, DEFAULT_OFFSET};
use crate::temporal::DEFAULT_HISTORY_LENGTH;

/// Parameters for one orchestrated analysis
///
/// Passed explicitly per call; there is no process-wide state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    /// Discretization policy applied to every input
    pub binning: Binning,
    /// Neighbour offset `(dy, dx)` for spatial mutual information
    pub offset: (isize, isize),
    /// Past window for transfer entropy and active information storage
    pub history_length: usize,
    /// Block sizes swept for the block-entropy curve and complexity
    pub block_scales: Vec<usize>,
    /// Split of the field into parts for integration
    pub integration_partition: Partition,
    /// Shortest accompanying series that gets temporal measures
    pub min_series_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            binning: Binning::default(),
            offset: DEFAULT_OFFSET,
            history_length: DEFAULT_HISTORY_LENGTH,
            block_scales: DEFAULT_BLOCK_SCALES.to_vec(),
            integration_partition: Partition::default(),
            min_series_len: 10,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with `bins` equal-width bins
    pub fn with_bins(bins: usize) -> Self {
        Self {
            binning: Binning::Fixed(bins),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.binning.validate()?;
        if self.history_length == 0 {
            return Err(InfoError::invalid("history_length must be > 0"));
        }
        if self.block_scales.is_empty() {
            return Err(InfoError::invalid("block_scales must not be empty"));
        }
        if self.block_scales.contains(&0) {
            return Err(InfoError::invalid("block_scales must be positive"));
        }
        Ok(())
    }
}
