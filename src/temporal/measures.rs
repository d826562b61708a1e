//! Time-series Entropy, Transfer Entropy and Active Information Storage

use tracing::debug;

use crate::error::{InfoError, Result};
use crate::information::{conditional_entropy, mutual_information, Binning, EmpiricalDistribution};

/// History length used when none is configured
pub const DEFAULT_HISTORY_LENGTH: usize = 1;

/// Shannon entropy of a time series, in bits
///
/// Same machinery as the spatial entropy; kept separate so results are
/// labelled as temporal unpredictability.
pub fn time_series_entropy(x: &[f64], binning: Binning) -> Result<f64> {
    let discrete = binning.discretize(x)?;
    Ok(EmpiricalDistribution::from_samples(discrete.symbols.iter())?.entropy())
}

/// Transfer entropy `TE(source → target)` in bits
///
///   TE = H(Y_{t+1} | Y_t) - H(Y_{t+1} | Y_t, X_t)
///
/// where `Y_t`, `X_t` are the last `history_length` samples of target and
/// source ending at `t`. The series must be equal length and aligned; each
/// is discretized with its own alphabet. Windows are slid across both
/// series, dropping the first `history_length` targets that lack a full past.
///
/// Needs at least `2·history_length + 1` samples.
pub fn transfer_entropy(
    source: &[f64],
    target: &[f64],
    history_length: usize,
    binning: Binning,
) -> Result<f64> {
    check_series(source, "source")?;
    check_series(target, "target")?;
    if source.len() != target.len() {
        return Err(InfoError::invalid(format!(
            "source and target differ in length ({} vs {})",
            source.len(),
            target.len()
        )));
    }
    check_history(history_length)?;

    let n = target.len();
    let needed = history_length.saturating_mul(2).saturating_add(1);
    if n < needed {
        return Err(InfoError::insufficient("transfer_entropy", needed, n));
    }

    let xs = binning.discretize(source)?.symbols;
    let ys = binning.discretize(target)?.symbols;

    let windows = n - history_length;
    let mut next = Vec::with_capacity(windows);
    let mut target_past = Vec::with_capacity(windows);
    let mut joint_past = Vec::with_capacity(windows);

    for t in history_length..n {
        let past = t - history_length..t;
        next.push(ys[t]);
        target_past.push(&ys[past.clone()]);
        joint_past.push((&ys[past.clone()], &xs[past]));
    }

    let h_own = conditional_entropy(&next, &target_past)?;
    let h_both = conditional_entropy(&next, &joint_past)?;
    debug!(samples = windows, history_length, h_own, h_both, "transfer entropy");

    // Conditioning never raises a plug-in entropy; clamp rounding residue
    Ok((h_own - h_both).max(0.0))
}

/// Active information storage `AIS = I(X_t^{(h)} ; X_{t+1})` in bits
///
/// Mutual information between the last `history_length` samples and the
/// next one. With `history_length = 1` this is the lag-one temporal MI.
/// Bounded above by the entropy of the series.
pub fn active_information_storage(
    x: &[f64],
    history_length: usize,
    binning: Binning,
) -> Result<f64> {
    check_series(x, "series")?;
    check_history(history_length)?;

    let n = x.len();
    let needed = history_length.saturating_add(1);
    if n < needed {
        return Err(InfoError::insufficient("active_information_storage", needed, n));
    }

    let symbols = binning.discretize(x)?.symbols;
    let past: Vec<&[usize]> = (history_length..n)
        .map(|t| &symbols[t - history_length..t])
        .collect();
    let next = &symbols[history_length..];

    mutual_information(&past, next)
}

/// Mutual information between two aligned, equal-length series, in bits
pub fn mutual_information_series(x: &[f64], y: &[f64], binning: Binning) -> Result<f64> {
    check_series(x, "x")?;
    check_series(y, "y")?;
    if x.len() != y.len() {
        return Err(InfoError::invalid(format!(
            "series differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    let xs = binning.discretize(x)?.symbols;
    let ys = binning.discretize(y)?.symbols;
    mutual_information(&xs, &ys)
}

fn check_series(x: &[f64], label: &str) -> Result<()> {
    if x.is_empty() {
        return Err(InfoError::invalid(format!("{} series is empty", label)));
    }
    Ok(())
}

fn check_history(history_length: usize) -> Result<()> {
    if history_length == 0 {
        return Err(InfoError::invalid("history length must be positive"));
    }
    Ok(())
}
