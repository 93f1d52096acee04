use ahash::AHashSet;

use crate::error::CutInvalidReason;
use crate::{EdgeId, Error, Hypergraph, Result, VertexId};

/// A k-cut: its value (cost) plus the partition that achieves it, in terms
/// of *original* vertex ids; never the fresh ids minted by contraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    pub value: f64,
    pub partitions: Vec<Vec<VertexId>>,
}

impl Cut {
    pub fn new(value: f64, partitions: Vec<Vec<VertexId>>) -> Self {
        Self { value, partitions }
    }

    pub fn k(&self) -> usize {
        self.partitions.len()
    }
}

/// The weight of every hyperedge incident on `v`: the cost of splitting `v`
/// off from the rest of `h` as a singleton block.
///
/// # Failure
/// `Error::InvalidArgument` if `v` is not a live vertex of `h`.
pub fn one_vertex_cut(h: &Hypergraph, v: VertexId) -> Result<f64> {
    let mut total = 0.0;
    for &e in h.edges_incident_on(v)? {
        total += h.edge_weight(e)?;
    }
    Ok(total)
}

/// Computes the value of a partition over `h`: the total weight of edges
/// not wholly contained in a single block.
///
/// `partition` must map every live vertex of `h` to exactly one block
/// index; this is weaker than the full cut-validity check in
/// [`validate_cut`] and is meant for internal use by algorithms that
/// already know their own partition is well-formed.
pub fn cut_value(h: &Hypergraph, partition: &ahash::AHashMap<VertexId, usize>) -> Result<f64> {
    let mut total = 0.0;
    for e in h.edges() {
        let vs = h.edge_vertices(e)?;
        let first_block = partition
            .get(&vs[0])
            .ok_or_else(|| Error::invalid_argument(format!("vertex {} missing from partition", vs[0])))?;
        let crosses = vs[1..].iter().any(|v| partition.get(v) != Some(first_block));
        if crosses {
            total += h.edge_weight(e)?;
        }
    }
    Ok(total)
}

/// Confirms that `cut` is a legal k-cut of `original` with the stated
/// value, or explains why not.
///
/// Checks, in order: the number of partitions is consistent with itself
/// (each non-empty), every original vertex of `original` appears in
/// exactly one partition, and the recomputed cut value matches
/// `cut.value`.
pub fn validate_cut(original: &Hypergraph, cut: &Cut) -> Result<()> {
    if cut.partitions.iter().any(Vec::is_empty) {
        return Err(Error::CutInvalid { reason: CutInvalidReason::EmptyPartition });
    }

    let mut assigned: ahash::AHashMap<VertexId, usize> = ahash::AHashMap::new();
    for (block, vs) in cut.partitions.iter().enumerate() {
        for &v in vs {
            if assigned.insert(v, block).is_some() {
                return Err(Error::CutInvalid { reason: CutInvalidReason::DuplicateVertex });
            }
        }
    }

    let original_vertices: AHashSet<VertexId> = original.vertices().collect();
    if assigned.len() != original_vertices.len() || original_vertices.iter().any(|v| !assigned.contains_key(v)) {
        return Err(Error::CutInvalid { reason: CutInvalidReason::MissingVertex });
    }

    let recomputed = cut_value(original, &assigned)?;
    if (recomputed - cut.value).abs() > 1e-6 {
        return Err(Error::CutInvalid { reason: CutInvalidReason::ValueMismatch });
    }

    Ok(())
}

/// Checks only that `cut` has exactly `k` partitions, ahead of the fuller
/// [`validate_cut`] check. Split out because several algorithms know `k`
/// up front and want to fail fast before the more expensive checks.
pub fn validate_partition_count(cut: &Cut, k: usize) -> Result<()> {
    if cut.k() != k {
        return Err(Error::CutInvalid { reason: CutInvalidReason::WrongPartitionCount });
    }
    Ok(())
}

#[allow(dead_code)]
pub(crate) fn edges_crossing(h: &Hypergraph, partition: &ahash::AHashMap<VertexId, usize>) -> Result<Vec<EdgeId>> {
    let mut crossing = Vec::new();
    for e in h.edges() {
        let vs = h.edge_vertices(e)?;
        let first_block = partition.get(&vs[0]);
        if vs[1..].iter().any(|v| partition.get(v) != first_block) {
            crossing.push(e);
        }
    }
    Ok(crossing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_vertex_cut_sums_incident_weights() {
        let h = Hypergraph::new_weighted(&[0, 1, 2], &[(vec![0, 1], 3.0), (vec![1, 2], 4.0)]).unwrap();
        assert_eq!(one_vertex_cut(&h, 1).unwrap(), 7.0);
    }

    #[test]
    fn validate_cut_detects_missing_vertex() {
        let h = Hypergraph::new(&[0, 1, 2], &[vec![0, 1, 2]]).unwrap();
        let cut = Cut::new(1.0, vec![vec![0], vec![1]]);
        let err = validate_cut(&h, &cut).unwrap_err();
        assert!(matches!(err, Error::CutInvalid { reason: CutInvalidReason::MissingVertex }));
    }

    #[test]
    fn validate_cut_accepts_correct_cut() {
        let h = Hypergraph::new(&[0, 1, 2], &[vec![0, 1, 2]]).unwrap();
        let cut = Cut::new(1.0, vec![vec![0], vec![1, 2]]);
        assert!(validate_cut(&h, &cut).is_ok());
    }
}
