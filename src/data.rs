//! Immutable bundle returned by one all-pairs computation.

use crate::cost::ShortestPathCostMatrix;
use crate::error::Result;
use crate::parent::ParentMatrix;

/// Cost matrix, parent matrix and the negative-cycle flag of one run.
///
/// When [`has_negative_cycle`](Self::has_negative_cycle) is `true`, costs and
/// paths for pairs that can reach the cycle are not shortest-path answers.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathData {
    cost_matrix: ShortestPathCostMatrix,
    parent_matrix: ParentMatrix,
    has_negative_cycle: bool,
}

impl ShortestPathData {
    pub(crate) fn new(
        cost_matrix: ShortestPathCostMatrix,
        parent_matrix: ParentMatrix,
        has_negative_cycle: bool,
    ) -> Self {
        Self {
            cost_matrix,
            parent_matrix,
            has_negative_cycle,
        }
    }

    pub fn cost_matrix(&self) -> &ShortestPathCostMatrix {
        &self.cost_matrix
    }

    pub fn parent_matrix(&self) -> &ParentMatrix {
        &self.parent_matrix
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    pub fn num_nodes(&self) -> usize {
        self.cost_matrix.num_nodes()
    }

    /// Shorthand for `cost_matrix().get_cost(source, target)`.
    pub fn cost(&self, source: usize, target: usize) -> Result<f64> {
        self.cost_matrix.get_cost(source, target)
    }

    /// Shorthand for `parent_matrix().reconstruct_path(source, target)`.
    pub fn path(&self, source: usize, target: usize) -> Result<Vec<usize>> {
        self.parent_matrix.reconstruct_path(source, target)
    }

    /// Split the bundle into its parts.
    pub fn into_parts(self) -> (ShortestPathCostMatrix, ParentMatrix, bool) {
        (self.cost_matrix, self.parent_matrix, self.has_negative_cycle)
    }
}
