//! Alter in-degree in a named network.

use super::{lifecycle_violation, EffectFunction, EvalContext, InitContext};
use crate::data::NetworkRef;
use crate::errors::EffectError;
use crate::network::ActorId;

/// The number of ties the alter receives in a named network.
pub struct InDegree {
    name: String,
    network: Option<NetworkRef>,
}

impl InDegree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network: None,
        }
    }
}

impl EffectFunction for InDegree {
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<(), EffectError> {
        let r = ctx
            .state
            .resolve(&self.name)
            .ok_or_else(|| EffectError::MissingNetwork(self.name.clone()))?;
        self.network = Some(r);
        Ok(())
    }

    fn preprocess_ego(&mut self, _ctx: &EvalContext<'_>, _ego: ActorId) {}

    fn value(&self, ctx: &EvalContext<'_>, alter: ActorId) -> f64 {
        let Some(r) = self.network else {
            lifecycle_violation("InDegree::value before initialize");
        };
        ctx.state.network(r).in_degree(alter) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheRegistry, SqrtTable};
    use crate::data::{Data, State};
    use crate::network::Network;

    #[test]
    fn reads_in_degree() {
        let mut net = Network::new(3);
        net.add_tie(ActorId(0), ActorId(2));
        net.add_tie(ActorId(1), ActorId(2));
        let mut state = State::new();
        state.insert_network("advice", net);
        let data = Data::new();
        let mut registry = CacheRegistry::new();
        let sqrt = SqrtTable::new();

        let mut f = InDegree::new("advice");
        let mut init = InitContext {
            data: &data,
            state: &state,
            period: 0,
            cache: &mut registry,
            sqrt: &sqrt,
        };
        f.initialize(&mut init).unwrap();
        let ctx = EvalContext {
            data: &data,
            state: &state,
            period: 0,
            cache: &registry,
            sqrt: &sqrt,
        };
        f.preprocess_ego(&ctx, ActorId(0));
        assert_eq!(f.value(&ctx, ActorId(2)), 2.0);
        assert_eq!(f.value(&ctx, ActorId(1)), 0.0);
    }

    #[test]
    fn missing_network_fails_initialization() {
        let state = State::new();
        let data = Data::new();
        let mut registry = CacheRegistry::new();
        let sqrt = SqrtTable::new();
        let mut f = InDegree::new("advice");
        let mut init = InitContext {
            data: &data,
            state: &state,
            period: 0,
            cache: &mut registry,
            sqrt: &sqrt,
        };
        assert!(matches!(
            f.initialize(&mut init),
            Err(EffectError::MissingNetwork(name)) if name == "advice"
        ));
    }
}
