use ahash::{AHashMap, AHashSet};

use crate::error::Error;
use crate::hyperedge::Hyperedge;
use crate::{EdgeId, Result, VertexId};

/// Core struct representing a hypergraph.
///
/// Hypergraphs are a generalization of graphs, where each edge can connect
/// any number of vertices (see
/// [Hypergraph](https://en.wikipedia.org/wiki/Hypergraph)).
///
/// # Design overview
/// Vertex and edge identities are opaque `u64`s minted from two monotonic
/// counters, `next_vertex_id` and `next_edge_id`. Contraction never reuses
/// an endpoint's id for the vertex that replaces it: a fresh id is always
/// minted, and the discarded endpoints stop existing. This is what lets the
/// certificate builder and the ordering engine treat vertex ids as a stable
/// key space across a sequence of contractions.
///
/// `incidence_list` maps each live vertex to the hyperedges touching it;
/// `edge_list` maps each hyperedge id to its `Hyperedge`; `vertices_within`
/// maps each live vertex to the original vertex ids that have been
/// collapsed into it (a singleton of itself, for a vertex that has never
/// been involved in a contraction).
pub struct Hypergraph {
    weighted: bool,
    track_vertices_within: bool,

    incidence_list: AHashMap<VertexId, Vec<EdgeId>>,
    edge_list: AHashMap<EdgeId, Hyperedge>,
    vertices_within: AHashMap<VertexId, Vec<VertexId>>,

    next_vertex_id: VertexId,
    next_edge_id: EdgeId,
}

impl Hypergraph {
    /*
    ===============================================================================
    |                               CONSTRUCTORS                                  |
    ===============================================================================
    */

    /// Builds an unweighted hypergraph (every edge implicitly has weight 1)
    /// from a vertex list and an edge list.
    ///
    /// # Failure
    /// Returns `Error::InvalidArgument` if `vertices` is empty, if an edge
    /// references an id not present in `vertices`, or if an edge (after
    /// deduplicating repeated endpoints) has fewer than two distinct
    /// vertices.
    pub fn new(vertices: &[VertexId], edges: &[Vec<VertexId>]) -> Result<Self> {
        let with_weights: Vec<(Vec<VertexId>, f64)> =
            edges.iter().map(|e| (e.clone(), 1.0)).collect();
        Self::build(vertices, with_weights, false)
    }

    /// Builds a weighted hypergraph from a vertex list and a list of
    /// (endpoints, weight) pairs.
    ///
    /// # Failure
    /// Same as [`Hypergraph::new`].
    pub fn new_weighted(vertices: &[VertexId], edges: &[(Vec<VertexId>, f64)]) -> Result<Self> {
        Self::build(vertices, edges.to_vec(), true)
    }

    pub(crate) fn build(vertices: &[VertexId], edges: Vec<(Vec<VertexId>, f64)>, weighted: bool) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::invalid_argument("hypergraph must have at least one vertex"));
        }

        let mut incidence_list: AHashMap<VertexId, Vec<EdgeId>> = AHashMap::new();
        let mut vertices_within: AHashMap<VertexId, Vec<VertexId>> = AHashMap::new();
        let known: AHashSet<VertexId> = vertices.iter().copied().collect();

        for &v in vertices {
            incidence_list.insert(v, Vec::new());
            vertices_within.insert(v, vec![v]);
        }

        let mut edge_list: AHashMap<EdgeId, Hyperedge> = AHashMap::new();
        let mut next_edge_id: EdgeId = 0;

        for (endpoints, weight) in edges {
            let mut vs = endpoints;
            dedup_preserve_order(&mut vs);

            for v in &vs {
                if !known.contains(v) {
                    return Err(Error::invalid_argument(format!(
                        "hyperedge references unknown vertex {v}"
                    )));
                }
            }
            if vs.len() < 2 {
                return Err(Error::invalid_argument(
                    "hyperedge must contain at least two distinct vertices",
                ));
            }

            let id = next_edge_id;
            next_edge_id += 1;
            for &v in &vs {
                incidence_list.get_mut(&v).unwrap().push(id);
            }
            edge_list.insert(id, Hyperedge::new(vs, weight));
        }

        let next_vertex_id = vertices.iter().copied().max().map(|m| m + 1).unwrap_or(0);

        Ok(Self {
            weighted,
            track_vertices_within: true,
            incidence_list,
            edge_list,
            vertices_within,
            next_vertex_id,
            next_edge_id,
        })
    }

    /// Disables (or re-enables) vertices-within bookkeeping on this
    /// instance.
    ///
    /// Value-only algorithms (those that never reconstruct partitions) can
    /// turn this off to skip the concatenation work on every contraction.
    /// Disabling drops the bookkeeping collected so far; it must produce the
    /// same cut values as keeping it on, never different ones.
    pub fn with_vertex_tracking(mut self, track: bool) -> Self {
        if !track {
            self.vertices_within.clear();
        }
        self.track_vertices_within = track;
        self
    }

    /*
    ===============================================================================
    |                                  QUERIES                                    |
    ===============================================================================
    */

    /// Number of live vertices.
    pub fn num_vertices(&self) -> usize {
        self.incidence_list.len()
    }

    /// Number of hyperedges.
    pub fn num_edges(&self) -> usize {
        self.edge_list.len()
    }

    /// Sum of the sizes of all hyperedges.
    pub fn size(&self) -> usize {
        self.edge_list.values().map(Hyperedge::size).sum()
    }

    /// Maximum hyperedge size (0 if there are no edges).
    pub fn rank(&self) -> usize {
        self.edge_list.values().map(Hyperedge::size).max().unwrap_or(0)
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_tracking_vertices_within(&self) -> bool {
        self.track_vertices_within
    }

    /// Iterator over the live vertex ids, in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.incidence_list.keys().copied()
    }

    /// Iterator over the hyperedge ids, in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_list.keys().copied()
    }

    /// The edge ids incident on `v`.
    ///
    /// # Failure
    /// `Error::InvalidArgument` if `v` is not a live vertex.
    pub fn edges_incident_on(&self, v: VertexId) -> Result<&[EdgeId]> {
        self.incidence_list
            .get(&v)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::invalid_argument(format!("unknown vertex {v}")))
    }

    /// The endpoints of `e`, in the order they were last set.
    pub fn edge_vertices(&self, e: EdgeId) -> Result<&[VertexId]> {
        self.hyperedge(e).map(Hyperedge::vertices)
    }

    /// The weight of `e` (always 1 for an unweighted hypergraph).
    pub fn edge_weight(&self, e: EdgeId) -> Result<f64> {
        self.hyperedge(e).map(Hyperedge::weight)
    }

    pub fn hyperedge(&self, e: EdgeId) -> Result<&Hyperedge> {
        self.edge_list
            .get(&e)
            .ok_or_else(|| Error::invalid_argument(format!("unknown hyperedge {e}")))
    }

    /// The original vertex ids that have been collapsed into `v`.
    ///
    /// `v` is always a member of its own list (a vertex untouched by
    /// contraction has `vertices_within(v) == [v]`).
    pub fn vertices_within(&self, v: VertexId) -> Result<&[VertexId]> {
        self.vertices_within
            .get(&v)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::invalid_argument(format!("unknown vertex {v}")))
    }

    /*
    ===============================================================================
    |                                 MUTATION                                     |
    ===============================================================================
    */

    /// Adds a hyperedge over `vertices` with weight `weight` (defaulting to
    /// 1 when `None`), returning its fresh id.
    ///
    /// # Failure
    /// `Error::InvalidArgument` if an endpoint is unknown or fewer than two
    /// distinct vertices remain after deduplication.
    pub fn add_hyperedge(&mut self, vertices: &[VertexId], weight: Option<f64>) -> Result<EdgeId> {
        let mut vs = vertices.to_vec();
        dedup_preserve_order(&mut vs);

        for v in &vs {
            if !self.incidence_list.contains_key(v) {
                return Err(Error::invalid_argument(format!("hyperedge references unknown vertex {v}")));
            }
        }
        if vs.len() < 2 {
            return Err(Error::invalid_argument(
                "hyperedge must contain at least two distinct vertices",
            ));
        }

        let weight = if self.weighted { weight.unwrap_or(1.0) } else { 1.0 };
        let id = self.next_edge_id;
        self.next_edge_id += 1;

        for &v in &vs {
            self.incidence_list.get_mut(&v).unwrap().push(id);
        }
        self.edge_list.insert(id, Hyperedge::new(vs, weight));
        Ok(id)
    }

    /// Removes `e` from the hypergraph.
    ///
    /// # Failure
    /// `Error::InvalidArgument` if `e` is unknown.
    pub fn remove_hyperedge(&mut self, e: EdgeId) -> Result<()> {
        let edge = self
            .edge_list
            .remove(&e)
            .ok_or_else(|| Error::invalid_argument(format!("unknown hyperedge {e}")))?;

        for v in edge.vertices() {
            if let Some(list) = self.incidence_list.get_mut(v) {
                list.retain(|&id| id != e);
            }
        }
        Ok(())
    }

    /// Removes `v` from the hypergraph and from every edge that contained
    /// it. Edges that shrink below size 2 are removed entirely.
    ///
    /// # Failure
    /// `Error::InvalidArgument` if `v` is unknown.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<()> {
        let incident = self
            .incidence_list
            .remove(&v)
            .ok_or_else(|| Error::invalid_argument(format!("unknown vertex {v}")))?;
        self.vertices_within.remove(&v);

        for e in incident {
            let shrink_to = {
                let hedge = match self.edge_list.get_mut(&e) {
                    Some(h) => h,
                    None => continue,
                };
                hedge.vertices.retain(|&u| u != v);
                hedge.vertices.len()
            };
            if shrink_to < 2 {
                // e no longer references v, but its other endpoints'
                // incidence lists still do: drop it there too.
                if let Some(removed) = self.edge_list.remove(&e) {
                    for u in removed.vertices() {
                        if let Some(list) = self.incidence_list.get_mut(u) {
                            list.retain(|&id| id != e);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Drops every hyperedge with fewer than two distinct vertices.
    ///
    /// A single pass suffices: removing a degenerate edge cannot shrink any
    /// other edge, so the operation is idempotent by construction.
    pub fn remove_singleton_and_empty_hyperedges(&mut self) {
        let degenerate: Vec<EdgeId> = self
            .edge_list
            .iter()
            .filter(|(_, h)| h.size() < 2)
            .map(|(&id, _)| id)
            .collect();

        for e in degenerate {
            if let Some(removed) = self.edge_list.remove(&e) {
                for v in removed.vertices() {
                    if let Some(list) = self.incidence_list.get_mut(v) {
                        list.retain(|&id| id != e);
                    }
                }
            }
        }
    }

    /*
    ===============================================================================
    |                                CONTRACTION                                  |
    ===============================================================================
    */

    /// Contracts `e` into a private copy and returns it.
    pub fn contract(&self, e: EdgeId) -> Result<Self> {
        let mut clone = self.clone();
        clone.contract_in_place(e)?;
        Ok(clone)
    }

    /// Contracts `e` in place, returning the fresh vertex id that replaced
    /// its endpoints.
    ///
    /// # Failure
    /// `Error::InvalidArgument` if `e` is unknown.
    pub fn contract_in_place(&mut self, e: EdgeId) -> Result<VertexId> {
        let edge = self
            .edge_list
            .remove(&e)
            .ok_or_else(|| Error::invalid_argument(format!("unknown hyperedge {e}")))?;

        let mut endpoints = edge.vertices;
        dedup_preserve_order(&mut endpoints);

        for v in &endpoints {
            if let Some(list) = self.incidence_list.get_mut(v) {
                list.retain(|&id| id != e);
            }
        }

        let new_vertex = self.next_vertex_id;
        self.next_vertex_id += 1;

        if self.track_vertices_within {
            let mut within = Vec::new();
            for v in &endpoints {
                if let Some(mut vw) = self.vertices_within.remove(v) {
                    within.append(&mut vw);
                }
            }
            self.vertices_within.insert(new_vertex, within);
        } else {
            for v in &endpoints {
                self.vertices_within.remove(v);
            }
        }

        let endpoint_set: AHashSet<VertexId> = endpoints.iter().copied().collect();

        let mut affected: Vec<EdgeId> = Vec::new();
        let mut seen = AHashSet::new();
        for v in &endpoints {
            if let Some(list) = self.incidence_list.remove(v) {
                for eid in list {
                    if seen.insert(eid) {
                        affected.push(eid);
                    }
                }
            }
        }

        let mut new_vertex_incidence = Vec::with_capacity(affected.len());
        for eid in affected {
            let new_vertices = {
                let hedge = self
                    .edge_list
                    .get(&eid)
                    .expect("incidence list references a dropped hyperedge");
                let mut nv = Vec::with_capacity(hedge.vertices.len());
                for &v in &hedge.vertices {
                    let mapped = if endpoint_set.contains(&v) { new_vertex } else { v };
                    if !nv.contains(&mapped) {
                        nv.push(mapped);
                    }
                }
                nv
            };

            if new_vertices.len() < 2 {
                self.edge_list.remove(&eid);
            } else {
                self.edge_list.get_mut(&eid).unwrap().vertices = new_vertices;
                new_vertex_incidence.push(eid);
            }
        }

        self.incidence_list.insert(new_vertex, new_vertex_incidence);
        Ok(new_vertex)
    }

    /// Contracts the set `vs` as a single group: equivalent to adding a
    /// synthetic hyperedge over `vs` and contracting it.
    pub fn contract_vertices(&self, vs: &[VertexId]) -> Result<Self> {
        let mut clone = self.clone();
        clone.contract_vertices_in_place(vs)?;
        Ok(clone)
    }

    pub fn contract_vertices_in_place(&mut self, vs: &[VertexId]) -> Result<VertexId> {
        let synthetic = self.add_hyperedge(vs, Some(0.0))?;
        self.contract_in_place(synthetic)
    }

    /*
    ===============================================================================
    |                              CONSISTENCY CHECK                              |
    ===============================================================================
    */

    /// Checks the incidence-symmetry invariant: for every (v, e), v
    /// appears in e's vertex list iff e appears in v's incidence list.
    ///
    /// Used by tests and by callers that want to assert internal
    /// consistency after a sequence of mutations.
    pub fn is_valid(&self) -> bool {
        for (&v, edges) in &self.incidence_list {
            for &e in edges {
                match self.edge_list.get(&e) {
                    Some(hedge) if hedge.contains(v) => {}
                    _ => return false,
                }
            }
        }
        for (&e, hedge) in &self.edge_list {
            for v in hedge.vertices() {
                match self.incidence_list.get(v) {
                    Some(edges) if edges.contains(&e) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Clone for Hypergraph {
    fn clone(&self) -> Self {
        Self {
            weighted: self.weighted,
            track_vertices_within: self.track_vertices_within,
            incidence_list: self.incidence_list.clone(),
            edge_list: self.edge_list.clone(),
            vertices_within: self.vertices_within.clone(),
            next_vertex_id: self.next_vertex_id,
            next_edge_id: self.next_edge_id,
        }
    }
}

/// Removes repeated values, keeping the first occurrence of each.
pub(crate) fn dedup_preserve_order(values: &mut Vec<VertexId>) {
    let mut seen = AHashSet::with_capacity(values.len());
    values.retain(|v| seen.insert(*v));
}
