//! Predecessor matrix and path reconstruction.
//!
//! Entry `(s, v)` names the node immediately before `v` on the best known
//! path from `s`, or `None` when no such node exists (unreachable `v`, or
//! `v == s`). A path query walks these entries backwards from the target,
//! so it costs O(path length).

use crate::dense::DenseMatrix;
use crate::error::{ApspError, Result};
use crate::utils::render_table;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ParentMatrix {
    parents: DenseMatrix<Option<usize>>,
}

impl ParentMatrix {
    pub(crate) fn from_dense(parents: DenseMatrix<Option<usize>>) -> Self {
        Self { parents }
    }

    pub fn num_nodes(&self) -> usize {
        self.parents.dim()
    }

    /// Predecessor of `node` on the best known path from `source`.
    pub fn get_parent(&self, source: usize, node: usize) -> Result<Option<usize>> {
        self.parents.get(source, node)
    }

    /// Node sequence `source, ..., target` of a shortest path.
    ///
    /// Returns `[source]` when `source == target` and an empty vector when
    /// `target` is unreachable. The walk visits at most `num_nodes()` nodes;
    /// a longer or broken predecessor chain, which only a negative-weight
    /// cycle can produce, yields [`ApspError::PredecessorCycle`].
    pub fn reconstruct_path(&self, source: usize, target: usize) -> Result<Vec<usize>> {
        self.parents.check_index(source)?;
        self.parents.check_index(target)?;

        if source == target {
            return Ok(vec![source]);
        }
        if self.parents.at(source, target).is_none() {
            return Ok(Vec::new());
        }

        let broken = ApspError::PredecessorCycle {
            origin: source,
            target,
        };
        let mut path = vec![target];
        let mut node = target;
        while node != source {
            if path.len() == self.num_nodes() {
                return Err(broken);
            }
            node = self.parents.at(source, node).ok_or_else(|| broken.clone())?;
            path.push(node);
        }

        path.reverse();
        Ok(path)
    }
}

impl fmt::Display for ParentMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_table(f, self.num_nodes(), |i, j| match self.parents.at(i, j) {
            Some(p) => p.to_string(),
            None => "-".to_string(),
        })
    }
}
