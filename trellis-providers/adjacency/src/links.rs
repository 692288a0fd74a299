//! Per-vertex link lists.

use trellis_core::{Edge, Payload};

/// Identifier shared by both halves of one stored edge.
pub(crate) type EdgeId = u64;

/// One half of a stored edge, kept in the list of the vertex it hangs off.
#[derive(Clone, Debug)]
pub(crate) struct Link<V, D> {
    pub(crate) id: EdgeId,
    pub(crate) peer: V,
    pub(crate) payload: Payload<D>,
}

impl<V: Clone, D: Clone> Link<V, D> {
    /// The edge as seen from `owner`: `(owner, peer)`.
    pub(crate) fn leaving(&self, owner: &V) -> Edge<V, D> {
        Edge::from_parts(owner.clone(), self.peer.clone(), self.payload.clone())
    }

    /// The edge as seen from `owner`: `(peer, owner)`.
    pub(crate) fn entering(&self, owner: &V) -> Edge<V, D> {
        Edge::from_parts(self.peer.clone(), owner.clone(), self.payload.clone())
    }
}

/// Links of a single vertex.
///
/// Undirected graphs keep every edge in `out` on both endpoints, with a loop
/// stored once. Directed graphs keep an arc in the source's `out` and the
/// target's `inbound`.
#[derive(Clone, Debug)]
pub(crate) struct Links<V, D> {
    /// Insertion rank, used to pick which endpoint reports an undirected edge.
    pub(crate) rank: u64,
    /// Set when the vertex was registered on its own rather than as an edge
    /// endpoint. Only unregistered vertices are pruned once isolated.
    pub(crate) explicit: bool,
    pub(crate) out: Vec<Link<V, D>>,
    pub(crate) inbound: Vec<Link<V, D>>,
}

impl<V: PartialEq, D> Links<V, D> {
    pub(crate) const fn new(rank: u64) -> Self {
        Self {
            rank,
            explicit: false,
            out: Vec::new(),
            inbound: Vec::new(),
        }
    }

    /// Out links whose peer is `vertex`.
    pub(crate) fn out_to<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a Link<V, D>> {
        self.out.iter().filter(move |link| link.peer == *vertex)
    }

    /// Number of out links that loop back to `owner`.
    pub(crate) fn loops(&self, owner: &V) -> usize {
        self.out_to(owner).count()
    }

    /// Whether the vertex was only kept alive by edges that are now gone.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.explicit && self.out.is_empty() && self.inbound.is_empty()
    }

    pub(crate) fn swap_directions(&mut self) {
        std::mem::swap(&mut self.out, &mut self.inbound);
    }
}

/// Removes the link with `id` from `list`, returning it.
pub(crate) fn take_link<V, D>(list: &mut Vec<Link<V, D>>, id: EdgeId) -> Option<Link<V, D>> {
    let index = list.iter().position(|link| link.id == id)?;
    Some(list.remove(index))
}
