// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;
use crate::estimators::traits::{DistributionEntropy, GlobalValue};

/// Plug-in Shannon entropy $-\sum_k p_k \ln p_k$ of a probability vector (natural log base).
///
/// Cells with $p_k = 0$ contribute nothing. Shared by every discrete estimator, for
/// marginal vectors and flattened joint tables alike.
pub fn ml_entropy(probs: ArrayView1<'_, f64>) -> f64 {
    let mut h = 0.0_f64;
    for &p in probs.iter() {
        if p > 0.0 {
            h -= p * p.ln();
        }
    }
    h
}

/// Standard Shannon entropy estimator for discrete data using maximum likelihood (natural log base).
///
/// This baseline estimator computes H = -Σ p_i ln p_i from empirical probabilities p_i = n_i/N.
///
/// Suitable as a reference and for well-sampled regimes; for small N or large K consider
/// the bias-corrected Miller–Madow or the coverage-based Chao–Shen estimator.
pub struct DiscreteEntropy {
    dist: EmpiricalDistribution,
}

impl DiscreteEntropy {
    pub fn new(dist: EmpiricalDistribution) -> Self {
        Self { dist }
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        ml_entropy(self.dist.probabilities().view())
    }
}

impl DistributionEntropy for DiscreteEntropy {
    fn from_distribution(dist: EmpiricalDistribution) -> Self {
        Self::new(dist)
    }
}
