//! Incremental site percolation on an `n × n` grid.
//!
//! Sites are addressed by 1-based `(row, col)` in `[1, n]`. Every site maps
//! to an element id `(row - 1) * n + col` of a disjoint-set universe that
//! also holds two virtual elements: [`VIRTUAL_TOP`] (id `0`) standing for the
//! whole top row and a virtual bottom (id `n² + 1`) standing for the whole
//! bottom row. Opening a site unions it with its open 4-neighbours, so
//! "does the system percolate?" is a single connectivity query.
//!
//! # Backwash
//!
//! With one shared forest, once the system percolates every bottom-row
//! component is connected to the top through the virtual bottom, and
//! `is_full` would report sites that no open path reaches. The model keeps
//! a second forest without the virtual bottom and answers `is_full` from it.

use crate::collections::UnionFind;
use crate::error::{Error, Result};

/// Element id of the virtual top site.
pub const VIRTUAL_TOP: usize = 0;

const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// `true` if a `Vec<usize>` of `len` elements stays under the allocation
/// limit of `isize::MAX` bytes.
fn fits_in_memory(len: usize) -> bool {
    len.checked_mul(std::mem::size_of::<usize>())
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

/// An `n × n` grid of open or blocked sites with incremental connectivity.
///
/// # Examples
/// ```
/// use percolate::Percolation;
///
/// let mut grid = Percolation::new(3).unwrap();
/// grid.open(1, 2).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(!grid.percolates());
/// grid.open(3, 2).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(3, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    /// Both virtual sites; answers `percolates`.
    paths: UnionFind,
    /// Virtual top only; answers `is_full`.
    fullness: UnionFind,
}

impl Percolation {
    /// Creates an `n × n` grid with every site blocked.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n == 0` or the grid cannot be
    /// allocated.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "grid size must be positive, got 0".into(),
            ));
        }
        let sites = n
            .checked_mul(n)
            .filter(|&sites| sites.checked_add(2).is_some_and(fits_in_memory))
            .ok_or_else(|| {
                Error::InvalidArgument(format!("grid size {n} is too large to allocate"))
            })?;

        let mut open = Vec::new();
        open.try_reserve_exact(sites).map_err(|err| {
            Error::InvalidArgument(format!("cannot allocate a {n}x{n} grid: {err}"))
        })?;
        open.resize(sites, false);

        Ok(Self {
            n,
            open,
            open_count: 0,
            paths: UnionFind::try_new(sites + 2)?,
            fullness: UnionFind::try_new(sites + 1)?,
        })
    }

    /// Returns the grid dimension `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of open sites.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Element id of the virtual bottom site, `n² + 1`.
    pub fn virtual_bottom(&self) -> usize {
        self.open.len() + 1
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `row` or `col` is outside `[1, n]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let id = self.site_id(row, col)?;
        if self.open[id - 1] {
            return Ok(());
        }
        self.open[id - 1] = true;
        self.open_count += 1;
        log::trace!("opened site ({row}, {col})");

        if row == 1 {
            self.paths.link(id, VIRTUAL_TOP);
            self.fullness.link(id, VIRTUAL_TOP);
        }
        if row == self.n {
            let bottom = self.virtual_bottom();
            self.paths.link(id, bottom);
        }

        for (r, c) in self.neighbours(row, col) {
            let other = self.id_of(r, c);
            if self.open[other - 1] {
                self.paths.link(id, other);
                self.fullness.link(id, other);
            }
        }
        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` is open.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `row` or `col` is outside `[1, n]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let id = self.site_id(row, col)?;
        Ok(self.open[id - 1])
    }

    /// Returns `true` if the site at `(row, col)` is connected to the top row
    /// through open sites.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `row` or `col` is outside `[1, n]`.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let id = self.site_id(row, col)?;
        Ok(self.fullness.root(id) == self.fullness.root(VIRTUAL_TOP))
    }

    /// Returns `true` if an open path joins the top row to the bottom row.
    ///
    /// Once this returns `true` it keeps returning `true`.
    pub fn percolates(&mut self) -> bool {
        let bottom = self.virtual_bottom();
        self.paths.root(VIRTUAL_TOP) == self.paths.root(bottom)
    }

    /// Validates `(row, col)` and returns its element id.
    pub fn site_id(&self, row: usize, col: usize) -> Result<usize> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            Ok(self.id_of(row, col))
        } else {
            Err(Error::OutOfRange(format!(
                "site ({row}, {col}) is outside [1, {n}] x [1, {n}]",
                n = self.n
            )))
        }
    }

    fn id_of(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    /// In-bounds 4-neighbours of `(row, col)`.
    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n as isize;
        NEIGHBOURS.into_iter().filter_map(move |(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 1 && r <= n && c >= 1 && c <= n {
                Some((r as usize, c as usize))
            } else {
                None
            }
        })
    }
}
