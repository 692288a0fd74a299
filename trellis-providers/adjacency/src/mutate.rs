//! Mutation boundary: validation and storage updates.

use tracing::debug;
use trellis_core::{
    ArcSetMutator, DataArcSetMutator, DataEdgeSetMutator, Edge, EdgeSetMutator, GraphError,
    LabeledArcSetMutator, LabeledEdgeSetMutator, Payload, Result, Vertex, VertexSetMutator,
    WeightedArcSetMutator, WeightedEdgeSetMutator,
};

use crate::{
    graph::AdjacencyGraph,
    links::{Link, Links, take_link},
};

impl<V, D> AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn ensure_mutable(&self) -> Result<()> {
        if self.properties.mutability().is_mutable() {
            Ok(())
        } else {
            Err(GraphError::ImmutableGraph)
        }
    }

    pub(crate) fn ensure_vertex(&mut self, vertex: V) -> &mut Links<V, D> {
        let rank = self.next_rank;
        self.vertices.entry(vertex).or_insert_with(|| {
            self.next_rank += 1;
            Links::new(rank)
        })
    }

    /// Registers `vertex` so it outlives its last incident edge.
    pub(crate) fn register_vertex(&mut self, vertex: V) {
        self.ensure_vertex(vertex).explicit = true;
    }

    /// Drops `vertex` if only edges had kept it.
    fn prune(&mut self, vertex: &V) {
        if self.vertices.get(vertex).is_some_and(Links::is_prunable) {
            self.vertices.remove(vertex);
        }
    }

    /// Validates the whole batch, then stores it.
    pub(crate) fn insert_batch(&mut self, edges: Vec<Edge<V, D>>) -> Result<()> {
        if let Err(error) = self.validate(&edges) {
            debug!(code = %error.code(), %error, batch = edges.len(), "edge batch rejected");
            return Err(error);
        }
        let before = self.size;
        for edge in edges {
            self.insert(edge);
        }
        debug!(added = self.size - before, size = self.size, "edge batch stored");
        Ok(())
    }

    fn validate(&self, edges: &[Edge<V, D>]) -> Result<()> {
        let declared = self.properties.edge_kind();
        let multiplicity = self.properties.multiplicity();
        let directedness = self.properties.directedness();
        for (index, edge) in edges.iter().enumerate() {
            let found = edge.kind();
            if found != declared {
                return Err(GraphError::RichnessMismatch { declared, found });
            }
            let (u, v) = edge.both();
            if let Payload::Weighted(weight) = edge.payload()
                && !weight.is_finite()
            {
                return Err(GraphError::non_finite_weight(u, v, *weight));
            }
            if edge.is_loop() && !multiplicity.allows_loops() {
                return Err(GraphError::loop_rejected(u));
            }
            if multiplicity.allows_parallel() {
                continue;
            }
            let pending = edges
                .iter()
                .take(index)
                .filter(|earlier| earlier.connects(edge, directedness))
                .map(Edge::payload);
            let mut present = self.payloads_between(u, v).chain(pending);
            if present.any(|payload| payload != edge.payload()) {
                return Err(GraphError::parallel_rejected(u, v));
            }
        }
        Ok(())
    }

    /// Stores `edge`, skipping exact duplicates when parallel edges are
    /// disallowed. The batch has already been validated.
    fn insert(&mut self, edge: Edge<V, D>) {
        let (u, v) = edge.both();
        if !self.properties.multiplicity().allows_parallel()
            && self.payloads_between(u, v).next().is_some()
        {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        let (u, v, payload) = edge.into_parts();
        let directed = self.is_directed();
        let looped = u == v;

        self.ensure_vertex(u.clone()).out.push(Link {
            id,
            peer: v.clone(),
            payload: payload.clone(),
        });
        let target = self.ensure_vertex(v);
        let backward = Link { id, peer: u, payload };
        if directed {
            target.inbound.push(backward);
        } else if !looped {
            target.out.push(backward);
        }
        self.size += 1;
    }

    /// Removes one stored edge joining `edge`'s endpoints, preferring one with
    /// an equal payload. Endpoints left isolated are pruned unless they were
    /// registered.
    fn remove(&mut self, edge: &Edge<V, D>) {
        let (u, v) = edge.both();
        let Some(links) = self.vertices.get_mut(u) else {
            return;
        };
        let position = links
            .out
            .iter()
            .position(|link| link.peer == *v && link.payload == *edge.payload())
            .or_else(|| links.out.iter().position(|link| link.peer == *v));
        let Some(position) = position else {
            return;
        };
        let id = links.out.remove(position).id;
        let directed = self.is_directed();
        if let Some(target) = self.vertices.get_mut(v)
            && (directed || u != v)
        {
            let list = if directed {
                &mut target.inbound
            } else {
                &mut target.out
            };
            take_link(list, id);
        }
        self.size -= 1;
        self.prune(u);
        self.prune(v);
    }

    fn remove_vertex(&mut self, vertex: &V) {
        let Some(links) = self.vertices.remove(vertex) else {
            return;
        };
        let directed = self.is_directed();
        let mut removed = 0;
        for link in &links.out {
            removed += 1;
            if link.peer == *vertex {
                continue;
            }
            if let Some(peer) = self.vertices.get_mut(&link.peer) {
                let list = if directed {
                    &mut peer.inbound
                } else {
                    &mut peer.out
                };
                take_link(list, link.id);
            }
        }
        for link in links.inbound.iter().filter(|link| link.peer != *vertex) {
            removed += 1;
            if let Some(peer) = self.vertices.get_mut(&link.peer) {
                take_link(&mut peer.out, link.id);
            }
        }
        self.size -= removed;
        for link in links.out.iter().chain(&links.inbound) {
            self.prune(&link.peer);
        }
    }
}

impl<V, D> VertexSetMutator<V> for AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn ensure_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.ensure_mutable()?;
        for vertex in vertices {
            self.register_vertex(vertex);
        }
        Ok(())
    }

    fn remove_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.ensure_mutable()?;
        for vertex in vertices {
            self.remove_vertex(&vertex);
        }
        Ok(())
    }
}

impl<V, D> EdgeSetMutator<V, D> for AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.ensure_mutable()?;
        self.insert_batch(edges.into_iter().collect())
    }

    fn remove_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.ensure_mutable()?;
        for edge in edges {
            self.remove(&edge);
        }
        Ok(())
    }
}

impl<V, D> ArcSetMutator<V, D> for AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn add_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.add_edges(arcs)
    }

    fn remove_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.remove_edges(arcs)
    }
}

macro_rules! richness_mutators {
    ($($Trait:ident),+ $(,)?) => {
        $(
            impl<V, D> $Trait<V, D> for AdjacencyGraph<V, D>
            where
                V: Vertex,
                D: Clone + PartialEq,
            {
            }
        )+
    };
}

richness_mutators! {
    WeightedEdgeSetMutator,
    LabeledEdgeSetMutator,
    DataEdgeSetMutator,
    WeightedArcSetMutator,
    LabeledArcSetMutator,
    DataArcSetMutator,
}
