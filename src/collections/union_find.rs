//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a partition of the elements `0..len` into disjoint components
//! with near-constant-time union and find operations.
//!
//! # Algorithm
//!
//! Uses **path halving** during `find` and **union by size** during
//! `union` to achieve amortized O(α(n)) per operation, where α is the
//! inverse Ackermann function.
//!
//! # References
//!
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"
//! - Sedgewick & Wayne (2011), *Algorithms*, 4th ed., §1.5 (weighted quick-union)

use crate::error::{Error, Result};

/// Disjoint-set forest with path halving and union by size.
///
/// The public operations are bounds-checked and return
/// [`Error::OutOfRange`] for ids outside `0..len()`.
///
/// # Examples
/// ```
/// use percolate::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1).unwrap();
/// uf.union(2, 3).unwrap();
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1).unwrap());
/// assert!(!uf.connected(0, 2).unwrap());
///
/// uf.union(1, 3).unwrap();
/// assert!(uf.connected(0, 2).unwrap()); // transitivity
/// assert!(uf.find(7).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates a new Union-Find with `len` singleton components `{0}, ..., {len-1}`.
    ///
    /// # Complexity
    /// O(len)
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Fallible [`Self::new`] for universes sized from caller input.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `len` elements cannot be allocated.
    pub fn try_new(len: usize) -> Result<Self> {
        let mut parent = Vec::new();
        let mut size = Vec::new();
        parent
            .try_reserve_exact(len)
            .and_then(|()| size.try_reserve_exact(len))
            .map_err(|err| {
                Error::InvalidArgument(format!(
                    "cannot allocate a universe of {len} elements: {err}"
                ))
            })?;
        parent.extend(0..len);
        size.resize(len, 1);
        Ok(Self {
            parent,
            size,
            components: len,
        })
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Finds the representative (root) of the component containing `x`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `x >= len()`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merges the components containing `x` and `y`.
    ///
    /// Returns `true` if `x` and `y` were in different components (and are
    /// now merged), `false` if they were already connected.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either id is `>= len()`. Nothing is merged
    /// in that case.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.link(x, y))
    }

    /// Returns `true` if `x` and `y` are in the same component.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either id is `>= len()`.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.root(x) == self.root(y))
    }

    /// Returns the size of the component containing `x`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `x >= len()`.
    pub fn component_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Unchecked find with path halving: every other node on the path is
    /// re-pointed at its grandparent.
    ///
    /// Callers must pass `x < len()`; out-of-range ids panic on indexing.
    pub(crate) fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Unchecked union by size. Same precondition as [`Self::root`].
    pub(crate) fn link(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.root(x);
        let root_y = self.root(y);

        if root_x == root_y {
            return false;
        }

        let (small, large) = if self.size[root_x] < self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];

        self.components -= 1;
        true
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange(format!(
                "element {x} is outside the universe 0..{}",
                self.parent.len()
            )))
        }
    }
}
