use std::fmt;
use std::mem;

/// Failure modes of the element-indexed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "element index {index} out of range for universe of {len} elements")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Partitions the elements `0..n` into disjoint sets, supporting merge and
/// same-set queries in amortized near-constant time via path compression
/// and union by rank.
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets over the elements `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![1; n],
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the representative of the set containing `x`, flattening the
    /// traversed chain so every visited node points at the root directly.
    pub fn find(&mut self, x: usize) -> Result<usize, Error> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Merges the sets containing `x` and `y`. Returns `Ok(false)` if they
    /// were already the same set, leaving all state untouched.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, Error> {
        self.check(x)?;
        self.check(y)?;
        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        } else {
            // equal ranks always keep root_x as the surviving root
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
            self.rank[root_x] += 1;
        }
        self.count -= 1;
        Ok(true)
    }

    pub fn is_same_set(&mut self, x: usize, y: usize) -> Result<bool, Error> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Number of elements in the set containing `x`, always in `1..=n`.
    pub fn size_of_set(&mut self, x: usize) -> Result<usize, Error> {
        self.check(x)?;
        let root = self.find_root(x);
        Ok(self.size[root])
    }

    pub fn num_disjoint_sets(&self) -> usize {
        self.count
    }

    /// Alias of [`num_disjoint_sets`](Self::num_disjoint_sets) for
    /// container-style querying.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw parent array as of the last compression. Diagnostics only; the
    /// exact layout beyond the documented tie-break is not a contract.
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    fn check(&self, x: usize) -> Result<(), Error> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    // Caller has validated `i`. Walks to the root, then rewrites every node
    // on the path to point at it.
    fn find_root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while i != root {
            i = mem::replace(&mut self.parent[i], root);
        }
        root
    }
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisjointSet with parents: {:?}", self.parent)
    }
}
