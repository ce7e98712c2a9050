//! # NetDyn Core
//!
//! Evaluation core for scalar effect statistics driving Markov-chain
//! simulation of evolving relational networks. At each simulated
//! micro-step one actor (the ego) is offered a menu of tie changes, and a
//! tree of effect functions scores every candidate alter.
//!
//! Modules:
//! - **network**: directed networks over a fixed actor set
//! - **data**: observed longitudinal data and the current simulated state
//! - **cache**: memoized scalar table, egocentric configuration tables,
//!   and the per-period cache registry
//! - **effects**: the effect-function lifecycle contract, combinators, and
//!   concrete statistics
//! - **errors**: error types for initialization failures

pub mod cache;
pub mod data;
pub mod effects;
pub mod errors;
pub mod network;

// Re-export commonly used types
pub use cache::{CacheRegistry, SqrtTable};
pub use data::{Data, NetworkLongitudinalData, NetworkRef, State};
pub use effects::{EffectFunction, EvalContext, InitContext};
pub use errors::EffectError;
pub use network::{ActorId, Network};
