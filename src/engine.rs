//! Floyd–Warshall all-pairs shortest-path engine.
//!
//! One call to [`FloydWarshall::compute`] runs three phases:
//! 1. Preprocessing copies the arc costs and seeds direct-arc parents.
//! 2. Relaxation routes every pair through each intermediate node `k` in
//!    turn. `k` is the outermost loop: phase `k` only combines paths whose
//!    intermediate nodes lie in `{0..k}`.
//! 3. A negative-cycle check inspects the relaxed costs.
//!
//! The engine keeps no state between calls; every computation allocates its
//! own buffers and hands them back inside an immutable [`ShortestPathData`].

use crate::adjacency::AdjacencyMatrix;
use crate::cost::ShortestPathCostMatrix;
use crate::data::ShortestPathData;
use crate::dense::DenseMatrix;
use crate::parent::ParentMatrix;

/// How negative-weight cycles are detected once relaxation has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleCheck {
    /// For every arc `j -> i`, test `cost(j -> i) + dist(i, j) < 0`.
    ///
    /// Any negative cycle closes through one of its own arcs, and the
    /// relaxed `dist(i, j)` never exceeds the rest of that cycle, so this
    /// catches every cycle, not only 2-cycles.
    #[default]
    ClosingArcs,
    /// Test `dist(v, v) < 0` for every node.
    Diagonal,
}

/// All-pairs shortest-path engine for dense graphs.
///
/// ```
/// use apsp_dp::{AdjacencyMatrix, FloydWarshall};
///
/// let graph = AdjacencyMatrix::from_arcs(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 9.0)]).unwrap();
/// let data = FloydWarshall::new().compute(&graph);
/// assert!(!data.has_negative_cycle());
/// assert_eq!(data.cost(0, 2).unwrap(), 5.0);
/// assert_eq!(data.path(0, 2).unwrap(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloydWarshall {
    cycle_check: CycleCheck,
}

impl FloydWarshall {
    /// Engine with the default [`CycleCheck::ClosingArcs`] strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit negative-cycle strategy.
    pub fn with_cycle_check(cycle_check: CycleCheck) -> Self {
        Self { cycle_check }
    }

    /// Return the configured negative-cycle strategy.
    pub fn cycle_check(&self) -> CycleCheck {
        self.cycle_check
    }

    /// Solve all-pairs shortest paths over `adjacency`.
    ///
    /// Runs in Θ(n³) time and Θ(n²) extra space. The input is only read.
    /// Check [`ShortestPathData::has_negative_cycle`] before trusting the
    /// returned costs and paths.
    pub fn compute(&self, adjacency: &AdjacencyMatrix) -> ShortestPathData {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("apsp_compute", n = adjacency.num_nodes());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (mut costs, mut parents) = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("preprocess");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            preprocess(adjacency)
        };

        {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("relax");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            relax(&mut costs, &mut parents);
        }

        // A zero-length path has no predecessor, whatever relaxation wrote.
        for i in 0..parents.dim() {
            parents.put(i, i, None);
        }

        let witness = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("negative_cycle_check", strategy = ?self.cycle_check);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            find_negative_cycle(self.cycle_check, adjacency, &costs)
        };
        #[cfg(feature = "tracing")]
        if let Some((tail, head)) = witness {
            tracing::debug!(tail, head, "negative-weight cycle detected");
        }

        ShortestPathData::new(
            ShortestPathCostMatrix::from_dense(costs),
            ParentMatrix::from_dense(parents),
            witness.is_some(),
        )
    }
}

/// Copy arc costs and point every direct arc's parent at its tail.
fn preprocess(adjacency: &AdjacencyMatrix) -> (DenseMatrix<f64>, DenseMatrix<Option<usize>>) {
    let costs = adjacency.costs().clone();
    let mut parents = DenseMatrix::filled_like(&costs, None);
    for (tail, head, _) in adjacency.arcs() {
        parents.put(tail, head, Some(tail));
    }
    (costs, parents)
}

/// Triple-loop relaxation; returns the number of strict improvements.
///
/// Row `k` is snapshotted at the start of phase `k`. Without a negative
/// cycle through `k` that row cannot change during the phase, so the
/// snapshot only matters for results already flagged as unreliable.
fn relax(costs: &mut DenseMatrix<f64>, parents: &mut DenseMatrix<Option<usize>>) -> usize {
    let n = costs.dim();
    let mut pivot_costs = vec![f64::INFINITY; n];
    let mut pivot_parents = vec![None; n];
    let mut improvements = 0usize;

    for k in 0..n {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("relax_phase", k);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pivot_costs.copy_from_slice(costs.row(k));
        pivot_parents.copy_from_slice(parents.row(k));

        for i in 0..n {
            let via = costs.at(i, k);
            // inf + x is never a strict improvement.
            if via == f64::INFINITY {
                continue;
            }
            let cost_row = costs.row_mut(i);
            let parent_row = parents.row_mut(i);
            for (((cost, parent), &onward), &onward_parent) in cost_row
                .iter_mut()
                .zip(parent_row.iter_mut())
                .zip(&pivot_costs)
                .zip(&pivot_parents)
            {
                let tentative = via + onward;
                if tentative < *cost {
                    *cost = tentative;
                    *parent = onward_parent;
                    improvements += 1;
                }
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(improvements, "relaxation converged");
    improvements
}

/// Return a witness `(tail, head)` of a negative cycle, if any.
///
/// For [`CycleCheck::ClosingArcs`] the witness is the closing arc; for
/// [`CycleCheck::Diagonal`] it is `(v, v)` for the first node with a
/// negative round trip.
fn find_negative_cycle(
    strategy: CycleCheck,
    adjacency: &AdjacencyMatrix,
    costs: &DenseMatrix<f64>,
) -> Option<(usize, usize)> {
    match strategy {
        CycleCheck::ClosingArcs => adjacency
            .arcs()
            .find(|&(tail, head, arc)| arc + costs.at(head, tail) < 0.0)
            .map(|(tail, head, _)| (tail, head)),
        CycleCheck::Diagonal => (0..costs.dim())
            .find(|&v| costs.at(v, v) < 0.0)
            .map(|v| (v, v)),
    }
}
