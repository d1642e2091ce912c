use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;
use crate::estimators::approaches::{
    ChaoShenEntropy, DiscreteEntropy, MillerMadowEntropy, ShrinkEntropy,
};
pub use crate::estimators::traits::{DistributionEntropy, GlobalValue};

/// Discrete entropy estimator selection.
///
/// Every variant shares the empirical distribution builders and the plug-in entropy; they
/// differ only in the bias correction applied on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Estimator {
    /// Plug-in maximum-likelihood entropy, no correction.
    MaximumLikelihood,
    /// Plug-in entropy plus (K-1)/(2N).
    MillerMadow,
    /// Coverage-adjusted Horvitz–Thompson entropy.
    ChaoShen,
    /// James–Stein shrinkage toward the uniform distribution.
    Shrinkage,
}

impl Estimator {
    pub const ALL: [Estimator; 4] = [
        Estimator::MaximumLikelihood,
        Estimator::MillerMadow,
        Estimator::ChaoShen,
        Estimator::Shrinkage,
    ];

    /// Entropy (nats) of a marginal or joint distribution under this estimator.
    pub fn entropy(self, dist: EmpiricalDistribution) -> f64 {
        match self {
            Estimator::MaximumLikelihood => DiscreteEntropy::entropy_of(dist),
            Estimator::MillerMadow => MillerMadowEntropy::entropy_of(dist),
            Estimator::ChaoShen => ChaoShenEntropy::entropy_of(dist),
            Estimator::Shrinkage => ShrinkEntropy::entropy_of(dist),
        }
    }

    /// Whether negative mutual information is clamped to zero.
    ///
    /// The additive corrections of Miller–Madow and Chao–Shen overshoot on sparse joint
    /// tables; plug-in and shrinkage estimates are reported as computed.
    pub fn clamps_negative_mi(self) -> bool {
        matches!(self, Estimator::MillerMadow | Estimator::ChaoShen)
    }

    pub fn name(self) -> &'static str {
        match self {
            Estimator::MaximumLikelihood => "ml",
            Estimator::MillerMadow => "miller_madow",
            Estimator::ChaoShen => "chao_shen",
            Estimator::Shrinkage => "shrink",
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Estimator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ml" | "mle" | "discrete" => Ok(Estimator::MaximumLikelihood),
            "mm" | "miller_madow" => Ok(Estimator::MillerMadow),
            "cs" | "chao_shen" => Ok(Estimator::ChaoShen),
            "shrink" | "shrinkage" => Ok(Estimator::Shrinkage),
            _ => Err(Error::UnknownEstimator(s.to_string())),
        }
    }
}

/// Entropy estimation methods for discrete distributions
///
/// This struct provides static methods for creating entropy estimators
/// over an empirical (marginal or joint) distribution.
pub struct Entropy;

impl Entropy {
    /// Creates a new maximum-likelihood (plug-in) entropy estimator
    pub fn new_discrete(dist: EmpiricalDistribution) -> DiscreteEntropy {
        DiscreteEntropy::new(dist)
    }

    /// Creates a new Miller–Madow entropy estimator
    pub fn new_miller_madow(dist: EmpiricalDistribution) -> MillerMadowEntropy {
        MillerMadowEntropy::new(dist)
    }

    /// Creates a new Chao–Shen entropy estimator
    pub fn new_chao_shen(dist: EmpiricalDistribution) -> ChaoShenEntropy {
        ChaoShenEntropy::new(dist)
    }

    /// Creates a new shrinkage entropy estimator
    pub fn new_shrink(dist: EmpiricalDistribution) -> ShrinkEntropy {
        ShrinkEntropy::new(dist)
    }
}
