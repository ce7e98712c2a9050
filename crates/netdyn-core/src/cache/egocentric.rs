//! Egocentric configuration tables.
//!
//! Each table caches, for every actor `k`, a count derived from the
//! current ego's neighborhood in one or two networks. Tables are rebuilt
//! by the [`CacheRegistry`](super::CacheRegistry) once per ego and stamped
//! with the registry epoch at which they were built; reads are O(1)
//! lookups into a dense count array that is reused across rebuilds.

use crate::data::NetworkRef;
use crate::network::{ActorId, Network};

/// Per-actor counts valid for one (ego, epoch) pair.
#[derive(Debug, Clone, Default)]
pub(crate) struct EgocentricTable {
    counts: Vec<u32>,
    built_epoch: u64,
}

impl EgocentricTable {
    fn reset(&mut self, actor_count: usize, epoch: u64) {
        self.counts.clear();
        self.counts.resize(actor_count, 0);
        self.built_epoch = epoch;
    }

    #[inline]
    pub(crate) fn get(&self, actor: ActorId) -> u32 {
        self.counts[actor.index()]
    }

    pub(crate) fn built_epoch(&self) -> u64 {
        self.built_epoch
    }
}

/// In-star table of a single network.
///
/// `in_star(k)` counts the actors `h` with ties `ego -> h` and `k -> h`,
/// i.e. the in-stars the ego and `k` span together. The ego itself is a
/// valid `k` (via its own out-ties); callers that must not count paths
/// through the ego exclude it at the query site.
#[derive(Debug, Clone)]
pub struct NetworkCache {
    network: NetworkRef,
    in_star: EgocentricTable,
}

impl NetworkCache {
    pub(crate) fn new(network: NetworkRef) -> Self {
        Self {
            network,
            in_star: EgocentricTable::default(),
        }
    }

    pub(crate) fn network(&self) -> NetworkRef {
        self.network
    }

    pub(crate) fn rebuild(&mut self, network: &Network, ego: ActorId, epoch: u64) {
        self.in_star.reset(network.actor_count(), epoch);
        for h in network.out_ties(ego) {
            for k in network.in_ties(h) {
                self.in_star.counts[k.index()] += 1;
            }
        }
    }

    pub(crate) fn in_star(&self) -> &EgocentricTable {
        &self.in_star
    }
}

/// Mixed in-star table of an ordered network pair.
///
/// `in_star(k)` counts the actors `h` with a tie `ego -> h` in the first
/// network and a tie `k -> h` in the second.
#[derive(Debug, Clone)]
pub struct TwoNetworkCache {
    first: NetworkRef,
    second: NetworkRef,
    in_star: EgocentricTable,
}

impl TwoNetworkCache {
    pub(crate) fn new(first: NetworkRef, second: NetworkRef) -> Self {
        Self {
            first,
            second,
            in_star: EgocentricTable::default(),
        }
    }

    pub(crate) fn networks(&self) -> (NetworkRef, NetworkRef) {
        (self.first, self.second)
    }

    pub(crate) fn rebuild(&mut self, first: &Network, second: &Network, ego: ActorId, epoch: u64) {
        self.in_star.reset(second.actor_count(), epoch);
        for h in first.out_ties(ego) {
            for k in second.in_ties(h) {
                self.in_star.counts[k.index()] += 1;
            }
        }
    }

    pub(crate) fn in_star(&self) -> &EgocentricTable {
        &self.in_star
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(id: u32) -> ActorId {
        ActorId(id)
    }

    #[test]
    fn single_network_in_stars() {
        // 0 -> {1, 2}; 3 -> {1, 2}; 4 -> 2.
        let mut net = Network::new(5);
        net.add_tie(a(0), a(1));
        net.add_tie(a(0), a(2));
        net.add_tie(a(3), a(1));
        net.add_tie(a(3), a(2));
        net.add_tie(a(4), a(2));

        let mut cache = NetworkCache::new(NetworkRef::from_index(0));
        cache.rebuild(&net, a(0), 1);
        // Shared targets with ego 0: actor 3 shares both 1 and 2, actor 4
        // shares only 2, and the ego counts its own out-ties.
        assert_eq!(cache.in_star().get(a(3)), 2);
        assert_eq!(cache.in_star().get(a(4)), 1);
        assert_eq!(cache.in_star().get(a(0)), 2);
        assert_eq!(cache.in_star().get(a(1)), 0);
        assert_eq!(cache.in_star().built_epoch(), 1);
    }

    #[test]
    fn rebuild_replaces_previous_ego() {
        let mut net = Network::new(3);
        net.add_tie(a(0), a(2));
        net.add_tie(a(1), a(2));

        let mut cache = NetworkCache::new(NetworkRef::from_index(0));
        cache.rebuild(&net, a(0), 1);
        assert_eq!(cache.in_star().get(a(1)), 1);
        cache.rebuild(&net, a(2), 2);
        // Ego 2 has no out-ties; every count drops to zero.
        assert_eq!(cache.in_star().get(a(1)), 0);
        assert_eq!(cache.in_star().built_epoch(), 2);
    }

    #[test]
    fn mixed_in_stars() {
        // First network: ego 0 -> {1, 2}. Second network: 3 -> 1, 3 -> 2,
        // 4 -> 2.
        let mut first = Network::new(5);
        first.add_tie(a(0), a(1));
        first.add_tie(a(0), a(2));
        let mut second = Network::new(5);
        second.add_tie(a(3), a(1));
        second.add_tie(a(3), a(2));
        second.add_tie(a(4), a(2));

        let r = NetworkRef::from_index(0);
        let mut cache = TwoNetworkCache::new(r, r);
        cache.rebuild(&first, &second, a(0), 1);
        assert_eq!(cache.in_star().get(a(3)), 2);
        assert_eq!(cache.in_star().get(a(4)), 1);
        assert_eq!(cache.in_star().get(a(0)), 0);
    }
}
