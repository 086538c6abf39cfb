//! Dense directed-graph input.
//!
//! Absent arcs are `+inf` and the diagonal is pinned at zero. NaN and `-inf`
//! never enter the matrix. The engine only borrows an `AdjacencyMatrix`, so the
//! same instance can be fed to several computations.

use crate::dense::DenseMatrix;
use crate::error::Result;
use crate::utils::check_arc_cost;

/// Arc costs of a directed graph over nodes `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    costs: DenseMatrix<f64>,
}

impl AdjacencyMatrix {
    /// Graph with `n` nodes and no arcs.
    ///
    /// Fails with [`ApspError::InvalidArgument`](crate::ApspError::InvalidArgument)
    /// only when `n * n` cells cannot be addressed.
    pub fn new(n: usize) -> Result<Self> {
        let mut costs = DenseMatrix::filled(n, f64::INFINITY)?;
        for i in 0..n {
            costs.put(i, i, 0.0);
        }
        Ok(Self { costs })
    }

    /// Build a graph by applying [`set_cost`](Self::set_cost) to each
    /// `(tail, head, cost)` in order; later duplicates overwrite earlier ones.
    pub fn from_arcs<I>(n: usize, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut m = Self::new(n)?;
        for (tail, head, cost) in arcs {
            m.set_cost(tail, head, cost)?;
        }
        Ok(m)
    }

    pub fn num_nodes(&self) -> usize {
        self.costs.dim()
    }

    /// Stored cost of `tail -> head`; `+inf` when the arc is absent.
    pub fn get_cost(&self, tail: usize, head: usize) -> Result<f64> {
        self.costs.get(tail, head)
    }

    /// Overwrite the cost of `tail -> head`.
    ///
    /// Self-loops are dropped silently so the diagonal stays at zero. NaN and
    /// `-inf` fail with [`ApspError::InvalidArgument`](crate::ApspError::InvalidArgument).
    pub fn set_cost(&mut self, tail: usize, head: usize, cost: f64) -> Result<()> {
        self.costs.check_index(tail)?;
        self.costs.check_index(head)?;
        check_arc_cost(cost)?;
        if tail != head {
            self.costs.put(tail, head, cost);
        }
        Ok(())
    }

    /// Present arcs as `(tail, head, cost)`, row-major.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.costs
            .iter()
            .filter(|&(tail, head, cost)| tail != head && cost.is_finite())
    }

    pub(crate) fn costs(&self) -> &DenseMatrix<f64> {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyMatrix;
    use crate::error::ApspError;

    #[test]
    fn fresh_matrix_has_zero_diagonal_and_no_arcs() {
        let m = AdjacencyMatrix::new(4).unwrap();
        assert_eq!(m.num_nodes(), 4);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 0.0 } else { f64::INFINITY };
                assert_eq!(m.get_cost(i, j).unwrap(), expected);
            }
        }
        assert_eq!(m.arcs().count(), 0);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut m = AdjacencyMatrix::new(2).unwrap();
        m.set_cost(0, 0, 1.5).unwrap();
        m.set_cost(1, 1, -9.6).unwrap();
        assert_eq!(m.get_cost(0, 0).unwrap(), 0.0);
        assert_eq!(m.get_cost(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn last_write_wins() {
        let m = AdjacencyMatrix::from_arcs(3, [(0, 1, 4.0), (0, 1, 2.5), (2, 0, -1.0)]).unwrap();
        assert_eq!(m.get_cost(0, 1).unwrap(), 2.5);
        let arcs: Vec<_> = m.arcs().collect();
        assert_eq!(arcs, vec![(0, 1, 2.5), (2, 0, -1.0)]);
    }

    #[test]
    fn nan_cost_rejected_without_mutation() {
        let mut m = AdjacencyMatrix::new(2).unwrap();
        m.set_cost(0, 1, 3.0).unwrap();
        assert!(matches!(
            m.set_cost(0, 1, f64::NAN),
            Err(ApspError::InvalidArgument(_))
        ));
        assert_eq!(m.get_cost(0, 1).unwrap(), 3.0);
    }

    #[test]
    fn negative_infinity_rejected_without_mutation() {
        let mut m = AdjacencyMatrix::new(3).unwrap();
        m.set_cost(1, 2, 1.0).unwrap();
        assert!(matches!(
            m.set_cost(0, 1, f64::NEG_INFINITY),
            Err(ApspError::InvalidArgument(_))
        ));
        assert_eq!(m.get_cost(0, 1).unwrap(), f64::INFINITY);
        assert!(matches!(
            AdjacencyMatrix::from_arcs(3, [(0, 1, f64::NEG_INFINITY), (1, 2, 1.0)]),
            Err(ApspError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unaddressable_size_is_invalid_argument() {
        assert!(matches!(
            AdjacencyMatrix::new(1usize << 31),
            Err(ApspError::InvalidArgument(_))
        ));
    }

    #[test]
    fn index_checks_precede_cost_checks() {
        let mut m = AdjacencyMatrix::new(2).unwrap();
        assert_eq!(
            m.set_cost(2, 0, f64::NAN),
            Err(ApspError::IndexOutOfRange {
                index: 2,
                num_nodes: 2
            })
        );
        assert_eq!(
            m.get_cost(0, 3),
            Err(ApspError::IndexOutOfRange {
                index: 3,
                num_nodes: 2
            })
        );
    }

    #[test]
    fn empty_graph_rejects_all_indices() {
        let mut m = AdjacencyMatrix::new(0).unwrap();
        assert!(m.get_cost(0, 0).is_err());
        assert!(m.set_cost(0, 0, 1.0).is_err());
    }

    #[test]
    fn infinite_cost_removes_an_arc() {
        let mut m = AdjacencyMatrix::from_arcs(2, [(0, 1, 1.0)]).unwrap();
        m.set_cost(0, 1, f64::INFINITY).unwrap();
        assert_eq!(m.arcs().count(), 0);
    }
}
