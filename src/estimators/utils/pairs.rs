use ndarray::Array2;

/// Number of unordered variable pairs, self-pairs included: V (V + 1) / 2.
pub fn n_pairs(n_vars: usize) -> usize {
    n_vars * (n_vars + 1) / 2
}

/// Flat, row-major enumeration of the unordered variable pairs `(i, j)`, `i <= j`.
///
/// The same ordering schedules the parallel joint-entropy tasks and scatters their results
/// back into the symmetric matrix: slot `k` of a per-pair buffer always belongs to
/// `pairs()[k]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairIndexer {
    n_vars: usize,
}

impl PairIndexer {
    pub fn new(n_vars: usize) -> Self {
        Self { n_vars }
    }

    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    pub fn n_pairs(&self) -> usize {
        n_pairs(self.n_vars)
    }

    /// All pairs, outer `i` ascending, inner `j` from `i` to `V - 1`.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.n_pairs());
        for i in 0..self.n_vars {
            for j in i..self.n_vars {
                out.push((i, j));
            }
        }
        out
    }

    /// Flat slot of the unordered pair `{i, j}`; argument order does not matter.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn position(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.n_vars && j < self.n_vars,
            "pair ({i}, {j}) out of range for {} variables",
            self.n_vars
        );
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        // rows 0..i hold V, V-1, ..., V-i+1 pairs
        i * (2 * self.n_vars - i + 1) / 2 + (j - i)
    }

    /// Symmetric V x V matrix whose entry (i, j) is the flat slot of the pair.
    pub fn lookup_matrix(&self) -> Array2<usize> {
        let mut lookup = Array2::zeros((self.n_vars, self.n_vars));
        for (k, (i, j)) in self.pairs().into_iter().enumerate() {
            lookup[[i, j]] = k;
            lookup[[j, i]] = k;
        }
        lookup
    }
}
