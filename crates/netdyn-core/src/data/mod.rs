//! Observed longitudinal data and the current simulated state.
//!
//! Effect functions resolve networks by name exactly once, during
//! initialization; afterwards every access goes through a copyable
//! [`NetworkRef`] handle and is an indexed lookup. Mutating a state
//! network between micro-steps belongs to the simulation driver; effect
//! functions only ever read.

use rustc_hash::FxHashMap;

use crate::network::{ActorId, Network};

/// A resolved handle to a network in the current [`State`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkRef(u32);

impl NetworkRef {
    #[inline]
    pub(crate) fn from_index(index: u32) -> Self {
        NetworkRef(index)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Observed waves of one network, with degree aggregates precomputed at
/// construction.
///
/// The aggregates are means over all observed waves and all actors; they
/// feed centering constants, so they only need to describe the observed
/// density, not any single wave exactly.
#[derive(Debug, Clone)]
pub struct NetworkLongitudinalData {
    name: String,
    observations: Vec<Network>,
    actor_count: usize,
    average_in_degree: f64,
    average_squared_in_degree: f64,
}

impl NetworkLongitudinalData {
    /// Wraps the observed waves of the named network.
    pub fn new(name: impl Into<String>, observations: Vec<Network>) -> Self {
        let actor_count = observations.first().map_or(0, Network::actor_count);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut cells = 0usize;
        for wave in &observations {
            for i in 0..wave.actor_count() {
                let d = wave.in_degree(ActorId(i as u32)) as f64;
                sum += d;
                sum_sq += d * d;
                cells += 1;
            }
        }
        let denom = cells.max(1) as f64;
        Self {
            name: name.into(),
            observations,
            actor_count,
            average_in_degree: sum / denom,
            average_squared_in_degree: sum_sq / denom,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actor_count(&self) -> usize {
        self.actor_count
    }

    /// The observed wave opening the given period.
    pub fn observation(&self, period: usize) -> &Network {
        &self.observations[period]
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    /// Mean in-degree over all waves and actors.
    pub fn average_in_degree(&self) -> f64 {
        self.average_in_degree
    }

    /// Mean squared in-degree over all waves and actors.
    pub fn average_squared_in_degree(&self) -> f64 {
        self.average_squared_in_degree
    }
}

/// The observed data provider: longitudinal datasets by name.
#[derive(Debug, Clone, Default)]
pub struct Data {
    networks: FxHashMap<String, NetworkLongitudinalData>,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_network(&mut self, data: NetworkLongitudinalData) {
        self.networks.insert(data.name().to_string(), data);
    }

    pub fn network_data(&self, name: &str) -> Option<&NetworkLongitudinalData> {
        self.networks.get(name)
    }
}

/// The current simulated networks, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct State {
    names: FxHashMap<String, NetworkRef>,
    networks: Vec<Network>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the named network, or replaces it if the name is taken.
    /// Existing handles for a replaced name stay valid.
    pub fn insert_network(&mut self, name: impl Into<String>, network: Network) -> NetworkRef {
        let name = name.into();
        if let Some(&r) = self.names.get(&name) {
            self.networks[r.index()] = network;
            return r;
        }
        let r = NetworkRef::from_index(self.networks.len() as u32);
        self.networks.push(network);
        self.names.insert(name, r);
        r
    }

    /// Resolves a network name to a handle.
    pub fn resolve(&self, name: &str) -> Option<NetworkRef> {
        self.names.get(name).copied()
    }

    pub fn network(&self, r: NetworkRef) -> &Network {
        &self.networks[r.index()]
    }

    /// Driver-side mutable access, for applying tie changes between
    /// micro-steps.
    pub fn network_mut(&mut self, r: NetworkRef) -> &mut Network {
        &mut self.networks[r.index()]
    }
}
