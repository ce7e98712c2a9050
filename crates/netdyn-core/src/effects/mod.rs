//! Effect functions: scalar statistics over (ego, alter) pairs.
//!
//! An effect function scores one candidate alter for the current ego. The
//! driver holds a tree of them and runs the lifecycle in fixed order:
//! [`initialize`] once per period, [`preprocess_ego`] once per ego, then
//! [`value`] once per candidate alter. Combinators own child functions
//! exclusively and forward the lifecycle calls; leaves read the networks
//! and the egocentric tables.
//!
//! This module provides:
//! - **combinators**: `Constant`, `AbsDiff`, `Sum`, `Product`
//! - **degree**: alter in-degree in a named network
//! - **mixed_three_cycles**: the mixed three-cycle census over a network
//!   pair, with root/center shaping and opposite-direction variants
//!
//! [`initialize`]: EffectFunction::initialize
//! [`preprocess_ego`]: EffectFunction::preprocess_ego
//! [`value`]: EffectFunction::value

pub mod combinators;
pub mod degree;
pub mod mixed_three_cycles;

use crate::cache::{CacheRegistry, SqrtTable};
use crate::data::{Data, State};
use crate::errors::EffectError;
use crate::network::ActorId;

pub use combinators::{AbsDiff, Constant, Product, Sum};
pub use degree::InDegree;
pub use mixed_three_cycles::{CycleVariant, MixedThreeCycles};

/// Context for [`EffectFunction::initialize`].
///
/// Carries the observed data, the current state, the period of interest,
/// and mutable access to the cache registry so initialization can register
/// the tables it will read later.
pub struct InitContext<'a> {
    pub data: &'a Data,
    pub state: &'a State,
    pub period: usize,
    pub cache: &'a mut CacheRegistry,
    pub sqrt: &'a SqrtTable,
}

/// Read-only context for [`EffectFunction::preprocess_ego`] and
/// [`EffectFunction::value`].
pub struct EvalContext<'a> {
    pub data: &'a Data,
    pub state: &'a State,
    pub period: usize,
    pub cache: &'a CacheRegistry,
    pub sqrt: &'a SqrtTable,
}

/// A scalar statistic evaluated per (ego, alter) pair.
///
/// Implementations resolve every name to a handle during `initialize` and
/// keep `value` down to indexed lookups; all computation whose cost does
/// not depend on the alter belongs in `preprocess_ego`. `value` is pure:
/// repeated calls for the same (ego, alter) within one pre-processing
/// window return the same number and never touch shared caches mutably.
///
/// The driver guarantees the call order `initialize` → `preprocess_ego` →
/// `value`; a `value` call outside that order is a programming error and
/// panics.
pub trait EffectFunction {
    /// Binds the function to the evaluation context. Fails if a required
    /// named network or dataset is absent.
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<(), EffectError>;

    /// Fixes the ego for the following `value` calls and performs the
    /// alter-independent part of the computation.
    fn preprocess_ego(&mut self, ctx: &EvalContext<'_>, ego: ActorId);

    /// The statistic's contribution for the given alter.
    fn value(&self, ctx: &EvalContext<'_>, alter: ActorId) -> f64;
}

/// Aborts on driver-side lifecycle misuse. Kept out of line so the check
/// in callers stays a single predictable branch.
#[cold]
#[inline(never)]
pub(crate) fn lifecycle_violation(what: &str) -> ! {
    panic!("effect lifecycle violation: {what}");
}
