//! Temporal Module: Information Dynamics of Time Series
//!
//! - **Time-series entropy**: unpredictability of the value distribution
//! - **Transfer entropy** TE(X → Y): information the source's recent past
//!   adds about the target's next value, beyond the target's own past
//!
//!     TE = H(Y_{t+1} | Y_t) - H(Y_{t+1} | Y_t, X_t)
//!
//! - **Active information storage** AIS: how much a process's recent past
//!   predicts its own next value
//!
//! Transfer entropy is directed: a lagged copy `Y_t = X_{t-1}` gives
//! TE(X → Y) ≈ H(X) while TE(Y → X) ≈ 0.

mod measures;

pub use measures::{
    active_information_storage,
    mutual_information_series,
    time_series_entropy,
    transfer_entropy,
    DEFAULT_HISTORY_LENGTH,
};
