//! Error types for effect evaluation.

use thiserror::Error;

/// Errors raised while binding effect functions to an evaluation context.
///
/// Initialization is the only fallible phase of the effect lifecycle: a
/// model cannot be evaluated with an undefined covariate, so these errors
/// propagate up and abort the run. Lifecycle misuse (calling `value`
/// before `preprocess_ego`) is a programming error in the driver and
/// panics instead of returning a variant here.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EffectError {
    /// A named longitudinal dataset is absent from the observed data.
    #[error("network data for '{0}' expected")]
    MissingData(String),

    /// A named network is absent from the current simulated state.
    #[error("network '{0}' is not part of the current state")]
    MissingNetwork(String),
}
