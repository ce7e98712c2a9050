//! Configuration-table caching for effect evaluation.
//!
//! This module provides:
//! - **sqrt_table**: memoized integer square roots
//! - **egocentric**: per-ego in-star tables over one network or an
//!   ordered network pair
//! - [`CacheRegistry`]: the per-chain owner of every registered table,
//!   rebuilt once per ego and addressed through copyable handles

pub mod egocentric;
pub mod sqrt_table;

use rustc_hash::FxHashMap;

use crate::data::{NetworkRef, State};
use crate::errors::EffectError;
use crate::network::ActorId;
use egocentric::{NetworkCache, TwoNetworkCache};

pub use sqrt_table::SqrtTable;

/// Handle to a registered single-network cache.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkHandle(u32);

/// Handle to a registered network-pair cache.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairHandle(u32);

/// Rebuild counters for monitoring cache behavior.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// Number of per-ego rebuild passes performed.
    pub rebuilds: usize,
    /// Number of registered single-network tables.
    pub network_tables: usize,
    /// Number of registered pair tables.
    pub pair_tables: usize,
}

/// The live cache registry of one simulation chain.
///
/// Effect functions register the tables they need during `initialize` and
/// get back copyable handles; the driver calls [`preprocess_ego`] once per
/// ego, which bumps the registry epoch and rebuilds every table. Reads
/// check the epoch stamp in debug builds, so a table consulted without a
/// preceding rebuild fails loudly instead of returning stale counts.
///
/// [`preprocess_ego`]: CacheRegistry::preprocess_ego
#[derive(Debug, Default)]
pub struct CacheRegistry {
    networks: Vec<NetworkCache>,
    pairs: Vec<TwoNetworkCache>,
    by_network: FxHashMap<NetworkRef, NetworkHandle>,
    by_pair: FxHashMap<(NetworkRef, NetworkRef), PairHandle>,
    ego: Option<ActorId>,
    epoch: u64,
    stats: CacheStats,
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the in-star table of the named network, deduplicating
    /// repeated registrations of the same network.
    pub fn register_network(
        &mut self,
        state: &State,
        name: &str,
    ) -> Result<NetworkHandle, EffectError> {
        let r = state
            .resolve(name)
            .ok_or_else(|| EffectError::MissingNetwork(name.to_string()))?;
        if let Some(&handle) = self.by_network.get(&r) {
            return Ok(handle);
        }
        let handle = NetworkHandle(self.networks.len() as u32);
        self.networks.push(NetworkCache::new(r));
        self.by_network.insert(r, handle);
        self.stats.network_tables = self.networks.len();
        #[cfg(feature = "tracing")]
        tracing::debug!(network = name, "registered in-star table");
        Ok(handle)
    }

    /// Registers the mixed in-star table of the ordered pair
    /// `first -> second`.
    pub fn register_pair(
        &mut self,
        state: &State,
        first: &str,
        second: &str,
    ) -> Result<PairHandle, EffectError> {
        let rf = state
            .resolve(first)
            .ok_or_else(|| EffectError::MissingNetwork(first.to_string()))?;
        let rs = state
            .resolve(second)
            .ok_or_else(|| EffectError::MissingNetwork(second.to_string()))?;
        if let Some(&handle) = self.by_pair.get(&(rf, rs)) {
            return Ok(handle);
        }
        let handle = PairHandle(self.pairs.len() as u32);
        self.pairs.push(TwoNetworkCache::new(rf, rs));
        self.by_pair.insert((rf, rs), handle);
        self.stats.pair_tables = self.pairs.len();
        #[cfg(feature = "tracing")]
        tracing::debug!(first, second, "registered mixed in-star table");
        Ok(handle)
    }

    /// Rebuilds every registered table for the given ego against the
    /// current state. Must be called before the per-alter evaluation of
    /// that ego begins, and again after any tie change.
    pub fn preprocess_ego(&mut self, state: &State, ego: ActorId) {
        self.epoch += 1;
        self.ego = Some(ego);
        for cache in &mut self.networks {
            let net = state.network(cache.network());
            cache.rebuild(net, ego, self.epoch);
        }
        for cache in &mut self.pairs {
            let (rf, rs) = cache.networks();
            cache.rebuild(state.network(rf), state.network(rs), ego, self.epoch);
        }
        self.stats.rebuilds += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            ego = ego.0,
            epoch = self.epoch,
            tables = self.networks.len() + self.pairs.len(),
            "rebuilt egocentric tables"
        );
    }

    /// In-star count of `k` in the registered network.
    #[inline]
    pub fn in_star(&self, handle: NetworkHandle, k: ActorId) -> u32 {
        let cache = &self.networks[handle.0 as usize];
        debug_assert_eq!(
            cache.in_star().built_epoch(),
            self.epoch,
            "in-star table read without a rebuild for the current ego"
        );
        cache.in_star().get(k)
    }

    /// Mixed in-star count of `k` in the registered pair.
    #[inline]
    pub fn pair_in_star(&self, handle: PairHandle, k: ActorId) -> u32 {
        let cache = &self.pairs[handle.0 as usize];
        debug_assert_eq!(
            cache.in_star().built_epoch(),
            self.epoch,
            "mixed in-star table read without a rebuild for the current ego"
        );
        cache.in_star().get(k)
    }

    /// The ego the tables are currently built for.
    pub fn current_ego(&self) -> Option<ActorId> {
        self.ego
    }

    /// Generation counter, bumped by every rebuild pass.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
