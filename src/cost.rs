//! Shortest-path cost matrix produced by the engine.

use crate::dense::DenseMatrix;
use crate::error::Result;
use crate::utils::render_table;
use std::fmt;

/// O(1) lookup of the cheapest known cost between two nodes.
///
/// `+inf` marks an unreachable target. Entries touched by a negative-weight
/// cycle hold whatever the relaxation last wrote and are not minima.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathCostMatrix {
    costs: DenseMatrix<f64>,
}

impl ShortestPathCostMatrix {
    pub(crate) fn from_dense(costs: DenseMatrix<f64>) -> Self {
        Self { costs }
    }

    pub fn num_nodes(&self) -> usize {
        self.costs.dim()
    }

    /// Cost of the cheapest path from `source` to `target`.
    pub fn get_cost(&self, source: usize, target: usize) -> Result<f64> {
        self.costs.get(source, target)
    }
}

impl fmt::Display for ShortestPathCostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_table(f, self.num_nodes(), |i, j| {
            format!("{:+.2}", self.costs.at(i, j))
        })
    }
}
