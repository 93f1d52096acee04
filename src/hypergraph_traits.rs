use std::fmt::{Debug, Display};

use super::Hypergraph;

impl Debug for Hypergraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut vertices: Vec<_> = self.vertices().collect();
        vertices.sort_unstable();

        write!(f, "Hypergraph {{ vertices: {:?}, edges: [", vertices)?;
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort_unstable();
        for (i, e) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let hedge = self.hyperedge(*e).expect("edge id came from self.edges()");
            write!(f, "{:?}@{}", hedge.vertices(), hedge.weight())?;
        }
        write!(f, "] }}")
    }
}

impl Display for Hypergraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hypergraph with {} vertices and {} edges",
            self.num_vertices(),
            self.num_edges()
        )
    }
}
