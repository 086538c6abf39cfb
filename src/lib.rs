//! All-Pairs Shortest Paths by Dynamic Programming (APSP-DP)
//!
//! This crate computes, for every ordered pair of nodes in a weighted
//! directed graph, the cost of a cheapest path and enough predecessor
//! information to rebuild that path. It implements the Floyd–Warshall
//! recurrence over intermediate nodes on a dense adjacency matrix.
//!
//! ## Core idea
//! 1. Describe the graph as an [`AdjacencyMatrix`]: `+inf` for a missing arc,
//!    `0` on the diagonal, finite real costs elsewhere (NaN and `-inf` are rejected).
//! 2. Hand it to [`FloydWarshall::compute`].
//! 3. Query the returned [`ShortestPathData`]: O(1) costs, O(path length)
//!    path reconstruction, and a negative-cycle flag that must be checked
//!    before trusting either.
//!
//! The algorithm is Θ(n³) time and Θ(n²) memory, which pays off for dense
//! graphs of moderate size.
//!
//! ## Quick start
//! ```
//! use apsp_dp::{AdjacencyMatrix, FloydWarshall};
//!
//! let mut graph = AdjacencyMatrix::new(3).unwrap();
//! graph.set_cost(0, 1, 3.0).unwrap();
//! graph.set_cost(1, 2, 1.5).unwrap();
//!
//! let data = FloydWarshall::new().compute(&graph);
//! assert!(!data.has_negative_cycle());
//! assert_eq!(data.cost_matrix().get_cost(0, 2).unwrap(), 4.5);
//! assert_eq!(data.parent_matrix().reconstruct_path(0, 2).unwrap(), vec![0, 1, 2]);
//! assert!(data.parent_matrix().reconstruct_path(2, 0).unwrap().is_empty());
//! ```
//!
//! ## Features
//! - `tracing`: emit spans for each computation phase and debug events for
//!   relaxation counts and negative-cycle witnesses.
//! - `heavy`: enable large stress tests.

pub mod adjacency;
pub mod builder;
pub mod cost;
pub mod data;
pub mod dense;
pub mod engine;
pub mod error;
pub mod parent;
pub mod utils;

pub use crate::adjacency::AdjacencyMatrix;
pub use crate::builder::FloydWarshallBuilder;
pub use crate::cost::ShortestPathCostMatrix;
pub use crate::data::ShortestPathData;
pub use crate::engine::{CycleCheck, FloydWarshall};
pub use crate::error::{ApspError, Result};
pub use crate::parent::ParentMatrix;
