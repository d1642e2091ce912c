use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;
use crate::estimators::approaches::discrete::mle::ml_entropy;
use crate::estimators::traits::{DistributionEntropy, GlobalValue};

/// Miller–Madow entropy estimator for discrete data (natural log base).
///
/// Adds the small-sample bias correction (K-1)/(2N) to the MLE (Shannon) estimate, where K
/// counts the occupied cells. A joint table is treated as its flattened cells, so the same
/// correction applies to marginal and joint distributions.
pub struct MillerMadowEntropy {
    dist: EmpiricalDistribution,
}

impl MillerMadowEntropy {
    pub fn new(dist: EmpiricalDistribution) -> Self {
        Self { dist }
    }

    #[inline]
    pub fn correction(&self) -> f64 {
        // (K - 1) / (2N)
        (self.dist.nonzero_bins().saturating_sub(1) as f64) / (2.0 * self.dist.n_samples() as f64)
    }
}

impl GlobalValue for MillerMadowEntropy {
    fn global_value(&self) -> f64 {
        // H_MM = H_MLE + (K-1)/(2N)
        ml_entropy(self.dist.probabilities().view()) + self.correction()
    }
}

impl DistributionEntropy for MillerMadowEntropy {
    fn from_distribution(dist: EmpiricalDistribution) -> Self {
        Self::new(dist)
    }
}
