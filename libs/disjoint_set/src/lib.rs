use std::collections::hash_map::Entry;
use std::hash::Hash;

use ahash::AHashMap;

#[cfg(test)]
mod tests;

pub type Rank = u32;

/// Raised when `find`/`union` is called for a label that never went through `make_set`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("vertex {0:?} was never registered with make_set")]
pub struct UnknownVertex<L>(pub L);

#[derive(Clone, Copy, Debug)]
struct Slot<L> {
    parent: L,
    rank: Rank,
}

/// Union-find over arbitrary labels with path compression and union by rank.
///
/// Each registered label points to a parent label; a label that is its own parent is the
/// representative of its component. `rank` is an upper bound of the height of the tree below a
/// representative and is only meaningful for representatives.
#[derive(Clone, Debug)]
pub struct DisjointSet<L> {
    slots: AHashMap<L, Slot<L>>,
    num_sets: usize,
}

impl<L> Default for DisjointSet<L>
where
    L: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> DisjointSet<L>
where
    L: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            slots: AHashMap::new(),
            num_sets: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: AHashMap::with_capacity(capacity),
            num_sets: 0,
        }
    }

    /// Registers `label` as a singleton set. Labels that are already known keep their state.
    pub fn make_set(&mut self, label: L) {
        if let Entry::Vacant(entry) = self.slots.entry(label) {
            entry.insert(Slot {
                parent: label,
                rank: 0,
            });
            self.num_sets += 1;
        }
    }

    /// Returns the representative of the component containing `label`.
    ///
    /// Runs in two passes: the first walks up to the root, the second re-parents every label
    /// on that path directly to the root. No recursion, so deep chains cannot exhaust the stack.
    pub fn find(&mut self, label: L) -> Result<L, UnknownVertex<L>> {
        let mut root = label;
        loop {
            let parent = self.slots.get(&root).ok_or(UnknownVertex(label))?.parent;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = label;
        while current != root {
            match self.slots.get_mut(&current) {
                Some(slot) => current = std::mem::replace(&mut slot.parent, root),
                None => break,
            }
        }
        Ok(root)
    }

    /// Merges the components of `a` and `b`.
    ///
    /// The root with the smaller rank is attached below the other one. On equal ranks the root
    /// of `a` stays representative and its rank grows by one.
    pub fn union(&mut self, a: L, b: L) -> Result<(), UnknownVertex<L>> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }

        let rank_a = self.slots.get(&root_a).map_or(0, |it| it.rank);
        let rank_b = self.slots.get(&root_b).map_or(0, |it| it.rank);

        let (child, parent) = if rank_a < rank_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        if let Some(slot) = self.slots.get_mut(&child) {
            slot.parent = parent;
        }
        if rank_a == rank_b {
            if let Some(slot) = self.slots.get_mut(&parent) {
                slot.rank += 1;
            }
        }
        self.num_sets -= 1;
        Ok(())
    }

    pub fn same_set(&mut self, a: L, b: L) -> Result<bool, UnknownVertex<L>> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of disjoint components currently tracked.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Direct parent of `label`, without compressing anything.
    pub fn parent(&self, label: &L) -> Option<L> {
        self.slots.get(label).map(|it| it.parent)
    }

    pub fn rank(&self, label: &L) -> Option<Rank> {
        self.slots.get(label).map(|it| it.rank)
    }
}
