use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;
use crate::estimators::traits::{DistributionEntropy, GlobalValue};

/// Offset inside the logarithm keeping empty cells finite.
const LOG_FLOOR: f64 = 1e-16;

/// Chao–Shen coverage-adjusted entropy estimator for discrete data (natural log base).
///
/// Adjusts empirical probabilities by sample coverage C = 1 - f1/N and compensates for
/// unseen mass with the Horvitz–Thompson factor 1 / (1 - (1 - C p)^N). Cells whose factor
/// is infinite (C p = 0) are dropped instead of propagating infinity.
///
/// A joint table is treated as its flattened cells.
pub struct ChaoShenEntropy {
    dist: EmpiricalDistribution,
}

impl ChaoShenEntropy {
    pub fn new(dist: EmpiricalDistribution) -> Self {
        Self { dist }
    }

    /// Sample coverage C = 1 - f1/N, f1 being the number of cells seen exactly once.
    ///
    /// Lies in (0, 1] as long as at least one cell was observed more than once; a sample made
    /// only of singletons has coverage 0.
    pub fn coverage(&self) -> f64 {
        let n = self.dist.n_samples() as f64;
        1.0 - (self.dist.singleton_bins() as f64) / n
    }

    /// Per-cell Horvitz–Thompson factors, with infinite factors forced to zero.
    pub fn correction_factors(&self) -> Vec<f64> {
        let n = self.dist.n_samples() as f64;
        let c_cov = self.coverage();
        self.dist
            .probabilities()
            .iter()
            .map(|&p| {
                let f = 1.0 / (1.0 - (1.0 - c_cov * p).powf(n));
                if f.is_infinite() { 0.0 } else { f }
            })
            .collect()
    }
}

impl GlobalValue for ChaoShenEntropy {
    fn global_value(&self) -> f64 {
        let c_cov = self.coverage();
        let factors = self.correction_factors();

        // - sum( pa * ln(pa + eps) * f ) where pa = C * p_ml
        let mut h = 0.0_f64;
        for (&p_ml, &f) in self.dist.probabilities().iter().zip(factors.iter()) {
            let pa = c_cov * p_ml;
            h -= pa * (pa + LOG_FLOOR).ln() * f;
        }
        h
    }
}

impl DistributionEntropy for ChaoShenEntropy {
    fn from_distribution(dist: EmpiricalDistribution) -> Self {
        Self::new(dist)
    }
}
