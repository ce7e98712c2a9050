//! Mixed three-cycle census over a network pair.

use super::{lifecycle_violation, EffectFunction, EvalContext, InitContext};
use crate::cache::{NetworkHandle, PairHandle};
use crate::data::NetworkRef;
use crate::errors::EffectError;
use crate::network::ActorId;

/// Which pair table the opposite-direction branch reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleVariant {
    /// Read the reversed pair table (second -> first) and subtract one,
    /// removing the two-path the candidate dependent tie itself creates.
    /// The subtraction clamps at zero: with the candidate tie absent there
    /// is no self-contributed two-path to remove.
    ReversedPair = 1,
    /// Read the pair table (first -> second) as-is.
    ForwardPair = 2,
}

/// Handles resolved at initialization.
struct Bound {
    first: NetworkRef,
    second: NetworkRef,
    first_in_star: NetworkHandle,
    pair_in_star: PairHandle,
    reversed_pair_in_star: PairHandle,
    centering: f64,
}

/// Counts mixed three-paths `ego -(W)-> h <-(W)- k -(X)-> alter`, where
/// `W` is the first (interaction) network and `X` the second (dependent)
/// network: for every actor `k` sending to the alter in `X`, the in-star
/// count of `k` with the ego in `W`, summed.
///
/// Shaping is fixed at construction from `parameter`: values 2 and 4
/// square-root every count through the memoized table, and values >= 3
/// subtract the expected in-star count under a null model,
/// `(average squared in-degree - average in-degree) / (n - 1)` of the
/// first network's observed data (square-rooted when both apply), so the
/// statistic is comparable across networks of different density.
///
/// With `opposite` set, the census runs against the senders to the alter
/// in `W` instead and reads one of the two mixed pair tables, selected by
/// [`CycleVariant`]; no centering applies on that branch.
pub struct MixedThreeCycles {
    first_name: String,
    second_name: String,
    root: bool,
    center: bool,
    variant: CycleVariant,
    opposite: bool,
    bound: Option<Bound>,
    ego: Option<ActorId>,
}

impl MixedThreeCycles {
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        parameter: u32,
        variant: CycleVariant,
        opposite: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            root: parameter == 2 || parameter == 4,
            center: parameter >= 3,
            variant,
            opposite,
            bound: None,
            ego: None,
        }
    }
}

impl EffectFunction for MixedThreeCycles {
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<(), EffectError> {
        let first = ctx
            .state
            .resolve(&self.first_name)
            .ok_or_else(|| EffectError::MissingNetwork(self.first_name.clone()))?;
        let second = ctx
            .state
            .resolve(&self.second_name)
            .ok_or_else(|| EffectError::MissingNetwork(self.second_name.clone()))?;
        let first_in_star = ctx.cache.register_network(ctx.state, &self.first_name)?;
        let pair_in_star = ctx
            .cache
            .register_pair(ctx.state, &self.first_name, &self.second_name)?;
        let reversed_pair_in_star = ctx
            .cache
            .register_pair(ctx.state, &self.second_name, &self.first_name)?;

        let network_data = ctx
            .data
            .network_data(&self.first_name)
            .ok_or_else(|| EffectError::MissingData(self.first_name.clone()))?;

        let mut centering = 0.0;
        if self.center {
            centering = (network_data.average_squared_in_degree()
                - network_data.average_in_degree())
                / (network_data.actor_count() as f64 - 1.0);
            if self.root {
                centering = centering.sqrt();
            }
        }

        self.bound = Some(Bound {
            first,
            second,
            first_in_star,
            pair_in_star,
            reversed_pair_in_star,
            centering,
        });
        Ok(())
    }

    fn preprocess_ego(&mut self, _ctx: &EvalContext<'_>, ego: ActorId) {
        self.ego = Some(ego);
    }

    fn value(&self, ctx: &EvalContext<'_>, alter: ActorId) -> f64 {
        let Some(bound) = self.bound.as_ref() else {
            lifecycle_violation("MixedThreeCycles::value before initialize");
        };
        let Some(ego) = self.ego else {
            lifecycle_violation("MixedThreeCycles::value before preprocess_ego");
        };
        debug_assert_eq!(
            ctx.cache.current_ego(),
            Some(ego),
            "cache registry was preprocessed for a different ego"
        );

        let mut statistic = 0.0;
        if !self.opposite {
            let second = ctx.state.network(bound.second);
            for k in second.in_ties(alter) {
                if k == ego {
                    continue;
                }
                let count = ctx.cache.in_star(bound.first_in_star, k);
                let term = if self.root {
                    ctx.sqrt.get(count)
                } else {
                    f64::from(count)
                };
                statistic += term - bound.centering;
            }
        } else {
            let first = ctx.state.network(bound.first);
            for k in first.in_ties(alter) {
                if k == ego {
                    continue;
                }
                let count = match self.variant {
                    CycleVariant::ForwardPair => ctx.cache.pair_in_star(bound.pair_in_star, k),
                    CycleVariant::ReversedPair => ctx
                        .cache
                        .pair_in_star(bound.reversed_pair_in_star, k)
                        .saturating_sub(1),
                };
                statistic += if self.root {
                    ctx.sqrt.get(count)
                } else {
                    f64::from(count)
                };
            }
        }
        statistic
    }
}
