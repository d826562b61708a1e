//! Entropy Engine: Plug-in Shannon Estimators over Discrete Symbols
//!
//! All higher-level measures reduce to entropies of empirical distributions:
//!
//!   H(X) = -Σᵢ pᵢ log₂(pᵢ)
//!
//! Joint distributions are built over tuples (or slices) of symbols, so
//! mutual information and conditional entropy share a single code path:
//!
//!   H(A | B) = H(A, B) - H(B)
//!   I(X; Y)  = H(X) + H(Y) - H(X, Y)
//!
//! Results are in bits. The estimators are the maximum-likelihood plug-in
//! kind, biased low for small samples relative to the alphabet size.

use std::collections::BTreeMap;

use crate::error::{InfoError, Result};

/// Empirical probability mass function over observed symbols
///
/// Only observed symbols are stored, so no `log(0)` term ever appears.
/// The map is ordered, which fixes the summation order of [`entropy`](Self::entropy)
/// and makes every result bit-for-bit reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpiricalDistribution<T: Ord> {
    counts: BTreeMap<T, usize>,
    total: usize,
}

impl<T: Ord> EmpiricalDistribution<T> {
    /// Count symbol occurrences
    pub fn from_samples<I: IntoIterator<Item = T>>(samples: I) -> Result<Self> {
        let mut counts = BTreeMap::new();
        let mut total = 0usize;
        for s in samples {
            *counts.entry(s).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return Err(InfoError::invalid(
                "empirical distribution needs at least one sample",
            ));
        }

        Ok(Self { counts, total })
    }

    /// Number of samples counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols observed
    pub fn support_size(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, symbol: &T) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Relative frequency of `symbol` (0 if never observed)
    pub fn probability(&self, symbol: &T) -> f64 {
        self.count(symbol) as f64 / self.total as f64
    }

    /// Observed symbols with their relative frequencies, in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        let n = self.total as f64;
        self.counts.iter().map(move |(s, &c)| (s, c as f64 / n))
    }

    /// Shannon entropy in bits
    pub fn entropy(&self) -> f64 {
        let n = self.total as f64;
        self.counts
            .values()
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.log2()
            })
            .sum()
    }
}

/// Shannon entropy `H(X)` of a symbol sequence, in bits
///
/// Range `[0, log₂ k]`; exactly 0 iff every sample is the same symbol.
pub fn entropy<T: Ord>(symbols: &[T]) -> Result<f64> {
    if symbols.is_empty() {
        return Err(InfoError::invalid("entropy of an empty symbol array"));
    }
    Ok(EmpiricalDistribution::from_samples(symbols.iter())?.entropy())
}

/// Joint entropy over composite symbols (tuples, slices, block vectors)
pub fn joint_entropy<T: Ord>(tuples: &[T]) -> Result<f64> {
    if tuples.is_empty() {
        return Err(InfoError::invalid("joint entropy of an empty tuple array"));
    }
    Ok(EmpiricalDistribution::from_samples(tuples.iter())?.entropy())
}

/// Joint entropy `H(A, B)` of two aligned symbol sequences
pub fn joint_entropy_pairs<A: Ord, B: Ord>(a: &[A], b: &[B]) -> Result<f64> {
    check_paired(a.len(), b.len())?;
    Ok(EmpiricalDistribution::from_samples(a.iter().zip(b.iter()))?.entropy())
}

/// Conditional entropy `H(target | given) = H(target, given) - H(given)`
///
/// Exactly 0 when `target` is a deterministic function of `given`.
pub fn conditional_entropy<A: Ord, B: Ord>(target: &[A], given: &[B]) -> Result<f64> {
    check_paired(target.len(), given.len())?;
    // Keyed on `given` first: a deterministic target then yields the same
    // counts in the same order as H(given), and the difference is exactly 0.
    let joint = EmpiricalDistribution::from_samples(given.iter().zip(target.iter()))?.entropy();
    let marginal = EmpiricalDistribution::from_samples(given.iter())?.entropy();
    Ok((joint - marginal).max(0.0))
}

/// Mutual information `I(X; Y) = H(X) + H(Y) - H(X, Y)` of two aligned sequences
///
/// Range `[0, min(H(X), H(Y))]`.
pub fn mutual_information<A: Ord, B: Ord>(x: &[A], y: &[B]) -> Result<f64> {
    check_paired(x.len(), y.len())?;
    let hx = entropy(x)?;
    let hy = entropy(y)?;
    let hxy = joint_entropy_pairs(x, y)?;
    Ok((hx + hy - hxy).max(0.0))
}

fn check_paired(a: usize, b: usize) -> Result<()> {
    if a == 0 || b == 0 {
        return Err(InfoError::invalid("paired measure on an empty array"));
    }
    if a != b {
        return Err(InfoError::invalid(format!(
            "paired arrays differ in length ({} vs {})",
            a, b
        )));
    }
    Ok(())
}
