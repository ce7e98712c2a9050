//! Directed networks over a fixed actor set.
//!
//! A [`Network`] is the "current state" capability consumed by effect
//! functions: iterate the incident ties of an actor in either direction,
//! test tie existence, read degrees. Adjacency is kept sorted in both
//! directions so existence tests are binary searches, tie iteration is a
//! slice walk in ascending actor order, and evaluation is deterministic.

use smallvec::SmallVec;

/// Maximum size for inline storage of adjacency lists.
const INLINE_TIES: usize = 8;

/// A unique identifier for an actor.
///
/// ActorId implements Ord/PartialOrd for stable, deterministic iteration.
/// Uses u32 internally for efficient storage and indexing.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl ActorId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed network with a fixed number of actors.
///
/// Ties are unweighted and self-ties (loops) are rejected. Both the out-
/// and in-adjacency of every actor are maintained, each as a sorted list,
/// so `in_ties`/`out_ties` iterate without allocation and `has_tie` is
/// O(log degree).
#[derive(Debug, Clone, Default)]
pub struct Network {
    out_ties: Vec<SmallVec<[ActorId; INLINE_TIES]>>,
    in_ties: Vec<SmallVec<[ActorId; INLINE_TIES]>>,
    tie_count: usize,
}

impl Network {
    /// Creates an empty network over `actor_count` actors.
    pub fn new(actor_count: usize) -> Self {
        Self {
            out_ties: vec![SmallVec::new(); actor_count],
            in_ties: vec![SmallVec::new(); actor_count],
            tie_count: 0,
        }
    }

    /// Number of actors, ties or not.
    pub fn actor_count(&self) -> usize {
        self.out_ties.len()
    }

    /// Total number of ties.
    pub fn tie_count(&self) -> usize {
        self.tie_count
    }

    /// Introduces the tie `from -> to`.
    ///
    /// Returns `false` without changing the network if the tie already
    /// exists or is a self-tie.
    pub fn add_tie(&mut self, from: ActorId, to: ActorId) -> bool {
        if from == to {
            return false;
        }
        let out = &mut self.out_ties[from.index()];
        let Err(pos) = out.binary_search(&to) else {
            return false;
        };
        out.insert(pos, to);
        let inn = &mut self.in_ties[to.index()];
        if let Err(pos) = inn.binary_search(&from) {
            inn.insert(pos, from);
        }
        self.tie_count += 1;
        true
    }

    /// Withdraws the tie `from -> to`. Returns `false` if it was absent.
    pub fn remove_tie(&mut self, from: ActorId, to: ActorId) -> bool {
        let out = &mut self.out_ties[from.index()];
        let Ok(pos) = out.binary_search(&to) else {
            return false;
        };
        out.remove(pos);
        let inn = &mut self.in_ties[to.index()];
        if let Ok(pos) = inn.binary_search(&from) {
            inn.remove(pos);
        }
        self.tie_count -= 1;
        true
    }

    /// Whether the tie `from -> to` exists.
    pub fn has_tie(&self, from: ActorId, to: ActorId) -> bool {
        self.out_ties[from.index()].binary_search(&to).is_ok()
    }

    /// The actors `actor` has a tie to, in ascending order.
    pub fn out_ties(&self, actor: ActorId) -> impl Iterator<Item = ActorId> + '_ {
        self.out_ties[actor.index()].iter().copied()
    }

    /// The actors with a tie to `actor`, in ascending order.
    pub fn in_ties(&self, actor: ActorId) -> impl Iterator<Item = ActorId> + '_ {
        self.in_ties[actor.index()].iter().copied()
    }

    /// Number of ties sent by `actor`.
    pub fn out_degree(&self, actor: ActorId) -> usize {
        self.out_ties[actor.index()].len()
    }

    /// Number of ties received by `actor`.
    pub fn in_degree(&self, actor: ActorId) -> usize {
        self.in_ties[actor.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(id: u32) -> ActorId {
        ActorId(id)
    }

    #[test]
    fn add_and_remove_ties() {
        let mut net = Network::new(4);
        assert!(net.add_tie(a(0), a(1)));
        assert!(net.add_tie(a(2), a(1)));
        assert!(!net.add_tie(a(0), a(1)), "duplicate tie");
        assert!(!net.add_tie(a(3), a(3)), "self-tie");
        assert_eq!(net.tie_count(), 2);
        assert!(net.has_tie(a(0), a(1)));
        assert!(!net.has_tie(a(1), a(0)));

        assert!(net.remove_tie(a(0), a(1)));
        assert!(!net.remove_tie(a(0), a(1)));
        assert_eq!(net.tie_count(), 1);
        assert!(!net.has_tie(a(0), a(1)));
    }

    #[test]
    fn iteration_is_sorted_both_directions() {
        let mut net = Network::new(5);
        net.add_tie(a(3), a(1));
        net.add_tie(a(0), a(1));
        net.add_tie(a(4), a(1));
        net.add_tie(a(1), a(2));
        net.add_tie(a(1), a(0));

        let senders: Vec<_> = net.in_ties(a(1)).collect();
        assert_eq!(senders, vec![a(0), a(3), a(4)]);
        let receivers: Vec<_> = net.out_ties(a(1)).collect();
        assert_eq!(receivers, vec![a(0), a(2)]);
    }

    #[test]
    fn degrees() {
        let mut net = Network::new(3);
        net.add_tie(a(0), a(2));
        net.add_tie(a(1), a(2));
        assert_eq!(net.in_degree(a(2)), 2);
        assert_eq!(net.out_degree(a(2)), 0);
        assert_eq!(net.out_degree(a(0)), 1);
        assert_eq!(net.in_degree(a(0)), 0);
    }
}
