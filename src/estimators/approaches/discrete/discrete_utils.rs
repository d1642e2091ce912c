// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::trace;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ShapeBuilder, Zip};

use crate::error::{Error, Result};

/// Indexing convention of the bin codes handed in by the caller.
///
/// Analysis environments such as R number bins from 1, so `OneBased` is the default.
/// Codes are shifted to 0-based before any histogramming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    #[default]
    OneBased,
    ZeroBased,
}

impl IndexBase {
    #[inline]
    fn offset(self) -> i64 {
        match self {
            IndexBase::OneBased => 1,
            IndexBase::ZeroBased => 0,
        }
    }
}

/// Shared dataset for pairwise discrete estimation: an N x V matrix of 0-based bin codes.
///
/// Codes are stored column-major so each variable's samples are contiguous. Every variable
/// is binned on its own support `[0, max_v]`, and marginal and joint tables use the same
/// per-variable bin counts so that `H(i) + H(j) - H(i,j)` stays consistent.
pub struct DiscreteDataset {
    codes: Array2<usize>,
    bins: Vec<usize>,
    /// Total number of observations (rows)
    pub n: usize,
    /// Number of variables (columns)
    pub v: usize,
}

impl DiscreteDataset {
    /// Build a dataset from raw integer codes (samples x variables), normalizing the
    /// caller's indexing convention to 0-based codes.
    ///
    /// Count tables are dense: a variable with largest code `m` gets `m + 1` bins, and every
    /// joint table of variables `a` and `b` holds `bins(a) * bins(b)` cells, allocated once per
    /// pair on each worker. Codes are expected to be compact; a single huge code (e.g.
    /// `i32::MAX`) makes every table touching that variable enormous.
    ///
    /// # Panics
    /// Later table construction panics or aborts if `bins(a) * bins(b)` overflows or cannot be
    /// allocated.
    pub fn from_data(data: ArrayView2<'_, i32>, base: IndexBase) -> Result<Self> {
        let (n, v) = data.dim();
        if n == 0 || v == 0 {
            return Err(Error::EmptyInput {
                n_samples: n,
                n_variables: v,
            });
        }

        let offset = base.offset();
        let mut codes = Array2::<usize>::zeros((n, v).f());
        for ((sample, variable), &raw) in data.indexed_iter() {
            let value = i64::from(raw) - offset;
            if value < 0 {
                return Err(Error::NegativeBinIndex {
                    sample,
                    variable,
                    value,
                });
            }
            codes[[sample, variable]] = value as usize;
        }

        let bins: Vec<usize> = codes
            .columns()
            .into_iter()
            .map(|col| col.iter().copied().max().unwrap_or(0) + 1)
            .collect();
        trace!("per-variable bin counts: {bins:?}");

        Ok(Self { codes, bins, n, v })
    }

    /// 0-based codes of one variable.
    pub fn column(&self, variable: usize) -> ArrayView1<'_, usize> {
        self.codes.column(variable)
    }

    /// Number of bins (observed maximum + 1) of one variable.
    pub fn bins(&self, variable: usize) -> usize {
        self.bins[variable]
    }

    /// Empirical marginal distribution of one variable.
    pub fn marginal(&self, variable: usize) -> EmpiricalDistribution {
        EmpiricalDistribution::from_counts(count_marginal(
            self.column(variable),
            self.bins[variable],
        ))
    }

    /// Empirical joint distribution of two variables, shaped `bins(a) x bins(b)`.
    pub fn joint(&self, a: usize, b: usize) -> EmpiricalDistribution {
        EmpiricalDistribution::from_counts(count_joint(
            self.column(a),
            self.column(b),
            self.bins[a],
            self.bins[b],
        ))
    }
}

/// Empirical (maximum-likelihood) distribution over a dense discrete support.
///
/// A marginal distribution is stored as a single-column table (`bins x 1`), a joint
/// distribution as a `bins_a x bins_b` table. Unobserved cells carry zero mass; there is
/// no smoothing. Counts are kept next to the probabilities so that singleton and
/// occupied-bin tallies are exact integer tests.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalDistribution {
    counts: Array2<usize>,
    n: usize,
}

impl EmpiricalDistribution {
    /// Marginal distribution of a column of 0-based codes, sized to its observed maximum + 1.
    pub fn marginal(column: ArrayView1<'_, usize>) -> Self {
        let bins = column.iter().copied().max().map_or(0, |m| m + 1);
        Self::from_counts(count_marginal(column, bins))
    }

    /// Joint distribution of two equally long columns of 0-based codes.
    ///
    /// # Panics
    /// If the columns differ in length.
    pub fn joint(a: ArrayView1<'_, usize>, b: ArrayView1<'_, usize>) -> Self {
        assert_eq!(
            a.len(),
            b.len(),
            "Columns must have the same length for a joint distribution"
        );
        let bins_a = a.iter().copied().max().map_or(0, |m| m + 1);
        let bins_b = b.iter().copied().max().map_or(0, |m| m + 1);
        Self::from_counts(count_joint(a, b, bins_a, bins_b))
    }

    /// Build from a precomputed count table; the sample count is the table total.
    pub fn from_counts(counts: Array2<usize>) -> Self {
        let n = counts.sum();
        Self { counts, n }
    }

    /// Number of samples N the distribution was estimated from.
    pub fn n_samples(&self) -> usize {
        self.n
    }

    /// Total number of cells B, observed or not.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Table dimensions; `(bins, 1)` for a marginal distribution.
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    /// Number of cells with nonzero empirical probability.
    pub fn nonzero_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Number of cells observed exactly once, i.e. with probability exactly 1/N.
    pub fn singleton_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 1).count()
    }

    /// Flattened (row-major) cell probabilities `count / N`.
    pub fn probabilities(&self) -> Array1<f64> {
        if self.n == 0 {
            return Array1::zeros(self.counts.len());
        }
        let n_f = self.n as f64;
        self.counts.iter().map(|&c| c as f64 / n_f).collect()
    }

    /// Cell probabilities in table form.
    pub fn as_matrix(&self) -> Array2<f64> {
        if self.n == 0 {
            return Array2::zeros(self.counts.dim());
        }
        let n_f = self.n as f64;
        self.counts.mapv(|c| c as f64 / n_f)
    }
}

/// Dense histogram of one column over `[0, bins)` as a `bins x 1` table.
fn count_marginal(column: ArrayView1<'_, usize>, bins: usize) -> Array2<usize> {
    let mut counts = Array2::<usize>::zeros((bins, 1));
    for &code in column.iter() {
        counts[[code, 0]] += 1;
    }
    counts
}

/// Dense contingency table of two aligned columns.
fn count_joint(
    a: ArrayView1<'_, usize>,
    b: ArrayView1<'_, usize>,
    bins_a: usize,
    bins_b: usize,
) -> Array2<usize> {
    let mut counts = Array2::<usize>::zeros((bins_a, bins_b));
    Zip::from(&a).and(&b).for_each(|&x, &y| {
        counts[[x, y]] += 1;
    });
    counts
}
