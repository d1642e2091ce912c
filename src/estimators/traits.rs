// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::discrete::discrete_utils::EmpiricalDistribution;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Interface for discrete entropy estimators built on an empirical distribution,
/// marginal or joint alike.
pub trait DistributionEntropy: GlobalValue + Sized {
    fn from_distribution(dist: EmpiricalDistribution) -> Self;

    /// Convenience: estimate the entropy of `dist` in one call.
    fn entropy_of(dist: EmpiricalDistribution) -> f64 {
        Self::from_distribution(dist).global_value()
    }
}
