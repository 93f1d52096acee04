//! A library of exact and approximate algorithms for computing minimum
//! k-cuts of hypergraphs.
//!
//! The data structure at the bottom is [`Hypergraph`]: vertices, weighted
//! hyperedges, and a single mutation primitive, contraction, that every
//! algorithm above it is built from. On top of that sit three families:
//!
//! - deterministic vertex-ordering min-2-cut ([`ordering`],
//!   [`vertex_order_mincut`]) and the [`certificate`] sparsifier built from
//!   the same ordering machinery;
//! - randomized contraction algorithms ([`contraction`]) wrapped by a
//!   repeat-until-discovery runner;
//! - the [`approx`] (2+ε)-approximation and the certificate-accelerated
//!   exact search in [`certificate_mincut`].
//!
//! Reading and writing hypergraphs, dispatching algorithms by name, and
//! persisting results are all external concerns; this crate only computes.

mod hyperedge;
mod hypergraph;
mod hypergraph_traits;

pub mod approx;
pub mod certificate;
pub mod certificate_mincut;
pub mod contraction;
pub mod cut;
pub mod error;
pub mod ordering;
pub mod priority;
pub mod vertex_order_mincut;

pub use cut::Cut;
pub use error::{CutInvalidReason, Error, Result};
pub use hyperedge::Hyperedge;
pub use hypergraph::Hypergraph;

/// Opaque vertex identifier. Never reused once a vertex stops being live.
pub type VertexId = u64;

/// Opaque hyperedge identifier.
pub type EdgeId = u64;
