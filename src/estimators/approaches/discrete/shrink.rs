// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;
use crate::estimators::approaches::discrete::mle::ml_entropy;
use crate::estimators::traits::{DistributionEntropy, GlobalValue};

/// Shrinkage (James–Stein) entropy estimator for discrete data (natural log base).
///
/// Forms a convex combination between the empirical distribution and the uniform target
/// over all $B$ cells of the table (observed or not) with shrinkage intensity
/// $λ^* = (1 - \sum p^2) / ((N-1) \sum (1/B - p)^2)$, clamped to $\[0,1\]$.
/// A zero denominator (N < 2, or an already uniform table) gives $λ^* = 0$.
pub struct ShrinkEntropy {
    dist: EmpiricalDistribution,
}

impl ShrinkEntropy {
    pub fn new(dist: EmpiricalDistribution) -> Self {
        Self { dist }
    }

    /// Data-driven shrinkage intensity, always within [0, 1].
    pub fn shrinkage_intensity(&self) -> f64 {
        let u = self.dist.probabilities();
        lambda_star(&u, self.dist.n_samples())
    }

    /// Shrunk cell probabilities λ/B + (1 - λ) p, flattened row-major.
    pub fn shrink_probs(&self) -> Array1<f64> {
        let u = self.dist.probabilities();
        let lambda = lambda_star(&u, self.dist.n_samples());
        let t = 1.0 / u.len() as f64; // uniform target
        u.mapv(|p| lambda * t + (1.0 - lambda) * p)
    }
}

fn lambda_star(u: &Array1<f64>, n: usize) -> f64 {
    let t = 1.0 / u.len() as f64;
    let numer = 1.0 - u.dot(u);
    let msp: f64 = u.iter().map(|&p| (t - p) * (t - p)).sum();
    let denom = (n as f64 - 1.0) * msp;
    if denom == 0.0 {
        return 0.0;
    }
    (numer / denom).clamp(0.0, 1.0)
}

impl GlobalValue for ShrinkEntropy {
    fn global_value(&self) -> f64 {
        // H = -sum p_shrink ln p_shrink over every cell
        ml_entropy(self.shrink_probs().view())
    }
}

impl DistributionEntropy for ShrinkEntropy {
    fn from_distribution(dist: EmpiricalDistribution) -> Self {
        Self::new(dist)
    }
}
