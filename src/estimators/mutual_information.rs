// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace};
use ndarray::{Array1, Array2, ArrayView2};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::DiscreteMutualInformation;
use crate::estimators::approaches::discrete::discrete_utils::{DiscreteDataset, IndexBase};
use crate::estimators::approaches::{
    ChaoShenEntropy, DiscreteEntropy, MillerMadowEntropy, ShrinkEntropy,
};
use crate::estimators::entropy::Estimator;
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::pairs::PairIndexer;

/// Builder for symmetric pairwise mutual-information matrices.
///
/// Marginal entropies are computed serially, then the V (V + 1) / 2 joint entropies are
/// spread over a dedicated pool of `threads` workers. Each joint-entropy task writes exactly
/// one slot of the per-pair buffer, so the parallel phase needs no synchronization beyond
/// the final join. Results do not depend on the thread count.
///
/// ```rust
/// use fastmim::estimators::entropy::Estimator;
/// use fastmim::estimators::mutual_information::MiMatrixBuilder;
/// use ndarray::array;
///
/// let data = array![[1, 2, 3], [3, 2, 1], [2, 3, 1], [1, 1, 2]];
/// let mim = MiMatrixBuilder::new(Estimator::MaximumLikelihood)
///     .threads(2)
///     .compute(data.view())
///     .unwrap();
/// assert_eq!(mim.dim(), (3, 3));
/// ```
#[derive(Debug, Clone)]
pub struct MiMatrixBuilder {
    estimator: Estimator,
    threads: usize,
    index_base: IndexBase,
}

impl MiMatrixBuilder {
    /// New builder using rayon's detected parallelism and 1-based input codes.
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            threads: rayon::current_num_threads(),
            index_base: IndexBase::default(),
        }
    }

    /// Number of workers for the joint-entropy phase; zero is rejected at compute time.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Indexing convention of the input codes.
    pub fn index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Compute the V x V mutual-information matrix (nats) of an N x V code matrix.
    ///
    /// The diagonal holds the self-pair value `2 H(i) - H(i, i)`, which equals the marginal
    /// entropy for every estimator except shrinkage (whose joint table has more cells).
    pub fn compute(&self, data: ArrayView2<'_, i32>) -> Result<Array2<f64>> {
        self.check_threads()?;
        let dataset = DiscreteDataset::from_data(data, self.index_base)?;
        debug!(
            "computing {} MI matrix: {} samples x {} variables, {} threads",
            self.estimator, dataset.n, dataset.v, self.threads
        );

        let h_marginals = marginal_entropies_of(&dataset, self.estimator);
        let indexer = PairIndexer::new(dataset.v);
        let pairs = indexer.pairs();
        let h_joints = self.joint_entropies_of(&dataset, &pairs)?;

        let mut mim = Array2::<f64>::zeros((dataset.v, dataset.v));
        for (&(i, j), &h_ij) in pairs.iter().zip(h_joints.iter()) {
            let mi = h_marginals[i] + h_marginals[j] - h_ij;
            mim[[i, j]] = mi;
            mim[[j, i]] = mi;
        }

        if self.estimator.clamps_negative_mi() {
            mim.mapv_inplace(|mi| if mi < 0.0 { 0.0 } else { mi });
        }
        Ok(mim)
    }

    /// Per-variable marginal entropies under the configured estimator.
    pub fn marginal_entropies(&self, data: ArrayView2<'_, i32>) -> Result<Array1<f64>> {
        let dataset = DiscreteDataset::from_data(data, self.index_base)?;
        Ok(marginal_entropies_of(&dataset, self.estimator))
    }

    /// Per-pair joint entropies, ordered as [`PairIndexer::pairs`].
    pub fn joint_entropies(&self, data: ArrayView2<'_, i32>) -> Result<Array1<f64>> {
        self.check_threads()?;
        let dataset = DiscreteDataset::from_data(data, self.index_base)?;
        let pairs = PairIndexer::new(dataset.v).pairs();
        Ok(Array1::from(self.joint_entropies_of(&dataset, &pairs)?))
    }

    /// Mutual information of a single variable pair, with the same clamping rule as
    /// [`MiMatrixBuilder::compute`].
    pub fn pair(&self, data: ArrayView2<'_, i32>, i: usize, j: usize) -> Result<f64> {
        let dataset = DiscreteDataset::from_data(data, self.index_base)?;
        for index in [i, j] {
            if index >= dataset.v {
                return Err(Error::VariableOutOfRange {
                    index,
                    n_variables: dataset.v,
                });
            }
        }
        let mi = match self.estimator {
            Estimator::MaximumLikelihood => {
                DiscreteMutualInformation::<DiscreteEntropy>::new(&dataset, i, j).global_value()
            }
            Estimator::MillerMadow => {
                DiscreteMutualInformation::<MillerMadowEntropy>::new(&dataset, i, j)
                    .global_value()
            }
            Estimator::ChaoShen => {
                DiscreteMutualInformation::<ChaoShenEntropy>::new(&dataset, i, j).global_value()
            }
            Estimator::Shrinkage => {
                DiscreteMutualInformation::<ShrinkEntropy>::new(&dataset, i, j).global_value()
            }
        };
        if self.estimator.clamps_negative_mi() && mi < 0.0 {
            return Ok(0.0);
        }
        Ok(mi)
    }

    fn check_threads(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::InvalidThreadCount(self.threads));
        }
        Ok(())
    }

    fn joint_entropies_of(
        &self,
        dataset: &DiscreteDataset,
        pairs: &[(usize, usize)],
    ) -> Result<Vec<f64>> {
        let pool = ThreadPoolBuilder::new().num_threads(self.threads).build()?;
        debug!("dispatching {} joint entropies", pairs.len());

        let estimator = self.estimator;
        let mut h_joints = vec![0.0_f64; pairs.len()];
        pool.install(|| {
            h_joints
                .par_iter_mut()
                .zip(pairs.par_iter())
                .for_each(|(slot, &(i, j))| {
                    *slot = estimator.entropy(dataset.joint(i, j));
                });
        });
        Ok(h_joints)
    }
}

fn marginal_entropies_of(dataset: &DiscreteDataset, estimator: Estimator) -> Array1<f64> {
    (0..dataset.v)
        .map(|v| {
            let h = estimator.entropy(dataset.marginal(v));
            trace!("H({v}) = {h}");
            h
        })
        .collect()
}

/// Mutual information factory: single-pair estimators and whole-matrix entry points,
/// one per estimator, all with the same shape.
///
/// The matrix functions take 1-based codes; use [`MiMatrixBuilder`] for 0-based input.
pub struct MutualInformation;

impl MutualInformation {
    pub fn new_discrete_mle(
        dataset: &DiscreteDataset,
        i: usize,
        j: usize,
    ) -> DiscreteMutualInformation<DiscreteEntropy> {
        DiscreteMutualInformation::new(dataset, i, j)
    }

    pub fn new_discrete_miller_madow(
        dataset: &DiscreteDataset,
        i: usize,
        j: usize,
    ) -> DiscreteMutualInformation<MillerMadowEntropy> {
        DiscreteMutualInformation::new(dataset, i, j)
    }

    pub fn new_discrete_chao_shen(
        dataset: &DiscreteDataset,
        i: usize,
        j: usize,
    ) -> DiscreteMutualInformation<ChaoShenEntropy> {
        DiscreteMutualInformation::new(dataset, i, j)
    }

    pub fn new_discrete_shrink(
        dataset: &DiscreteDataset,
        i: usize,
        j: usize,
    ) -> DiscreteMutualInformation<ShrinkEntropy> {
        DiscreteMutualInformation::new(dataset, i, j)
    }

    /// MI matrix of 1-based codes with the given estimator.
    pub fn matrix(
        data: ArrayView2<'_, i32>,
        estimator: Estimator,
        threads: usize,
    ) -> Result<Array2<f64>> {
        MiMatrixBuilder::new(estimator).threads(threads).compute(data)
    }

    /// Maximum-likelihood MI matrix; may be slightly negative on small samples.
    pub fn matrix_mle(data: ArrayView2<'_, i32>, threads: usize) -> Result<Array2<f64>> {
        Self::matrix(data, Estimator::MaximumLikelihood, threads)
    }

    /// Miller–Madow MI matrix, clamped to be non-negative.
    pub fn matrix_miller_madow(data: ArrayView2<'_, i32>, threads: usize) -> Result<Array2<f64>> {
        Self::matrix(data, Estimator::MillerMadow, threads)
    }

    /// Chao–Shen MI matrix, clamped to be non-negative.
    pub fn matrix_chao_shen(data: ArrayView2<'_, i32>, threads: usize) -> Result<Array2<f64>> {
        Self::matrix(data, Estimator::ChaoShen, threads)
    }

    /// Shrinkage MI matrix, not clamped.
    pub fn matrix_shrink(data: ArrayView2<'_, i32>, threads: usize) -> Result<Array2<f64>> {
        Self::matrix(data, Estimator::Shrinkage, threads)
    }
}
