//! Dense square storage shared by the adjacency, cost and parent matrices.
//!
//! Cells live in one row-major buffer; cell `(row, col)` sits at
//! `row * n + col`. Bounds are checked once at the accessor boundary so the
//! engine's inner loops can work on raw row slices.

use crate::error::{ApspError, Result};

/// Row-major `n × n` matrix of `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Copy> DenseMatrix<T> {
    /// Allocate an `n × n` matrix with every cell set to `fill`.
    ///
    /// Fails with [`ApspError::InvalidArgument`] when `n * n` cells cannot be
    /// addressed, either because the count overflows `usize` or because the
    /// buffer would exceed `isize::MAX` bytes.
    pub fn filled(n: usize, fill: T) -> Result<Self> {
        let len = n.checked_mul(n).ok_or_else(|| {
            ApspError::invalid_argument(format!("{n} nodes need more than usize::MAX cells"))
        })?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|err| {
            ApspError::invalid_argument(format!("cannot allocate {len} cells for {n} nodes: {err}"))
        })?;
        cells.resize(len, fill);
        Ok(Self { n, cells })
    }

    /// Same shape as `template`, every cell set to `fill`. Cannot overflow
    /// since `template` already holds `n * n` cells.
    pub(crate) fn filled_like<U>(template: &DenseMatrix<U>, fill: T) -> Self {
        Self {
            n: template.n,
            cells: vec![fill; template.cells.len()],
        }
    }

    /// Number of rows (equivalently, columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Validate a single node index against the dimension.
    #[inline]
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.n {
            Ok(())
        } else {
            Err(ApspError::IndexOutOfRange {
                index,
                num_nodes: self.n,
            })
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row)?;
        self.check_index(col)?;
        Ok(self.cells[row * self.n + col])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row)?;
        self.check_index(col)?;
        self.cells[row * self.n + col] = value;
        Ok(())
    }

    /// Read without bounds validation beyond the slice index panic.
    ///
    /// Callers inside the crate must have validated `row` and `col` already.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.n + col]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.n + col] = value;
    }

    /// Borrow one row.
    #[inline]
    pub(crate) fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    /// Borrow one row mutably.
    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [T] {
        let n = self.n;
        &mut self.cells[row * n..(row + 1) * n]
    }

    /// Iterate over `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (idx / n, idx % n, v))
    }
}
