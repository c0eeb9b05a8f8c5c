//! ft-graph: flow network model for flowtrace.
//!
//! Provides:
//! - The capacitated network with mutable flow state (Arc, Network)
//! - Residual adjacency with O(1) reverse lookup (ResidualArc, Direction)
//! - Network builder with eager validation
//! - Deterministic label -> index assignment for boundary adapters
//!
//! # Example
//!
//! ```
//! use ft_graph::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new(3);
//! builder.add_arc(0, 1, 4.0);
//! builder.add_arc(1, 2, 3.0);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.node_count(), 3);
//! assert_eq!(network.arcs().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::{GraphError, GraphResult, InvalidNetwork};
pub use graph::{Arc, Direction, Network, ResidualArc};
pub use indexing::IndexMap;
