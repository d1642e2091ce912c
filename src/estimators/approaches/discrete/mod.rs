// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

pub mod discrete_utils;

pub mod chao_shen;
pub mod miller_madow;
pub mod mle;
pub mod shrink;

use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;
use crate::estimators::traits::{DistributionEntropy, GlobalValue};

/// Discrete Mutual Information of one variable pair using the entropy-summation formula.
///
/// This estimator can wrap any discrete entropy estimator. Both marginals and the joint
/// table are binned on each variable's own support.
pub struct DiscreteMutualInformation<E> {
    marginals: [E; 2],
    joint: E,
}

impl<E: DistributionEntropy> DiscreteMutualInformation<E> {
    pub fn new(dataset: &DiscreteDataset, i: usize, j: usize) -> Self {
        let marginal_i = dataset.marginal(i);
        let marginal_j = if i == j {
            marginal_i.clone()
        } else {
            dataset.marginal(j)
        };
        let marginals = [
            E::from_distribution(marginal_i),
            E::from_distribution(marginal_j),
        ];
        let joint = E::from_distribution(dataset.joint(i, j));
        Self { marginals, joint }
    }
}

impl<E: GlobalValue> GlobalValue for DiscreteMutualInformation<E> {
    fn global_value(&self) -> f64 {
        let h_marginals: f64 = self.marginals.iter().map(|m| m.global_value()).sum();
        let h_joint = self.joint.global_value();
        // I(X; Y) = H(X) + H(Y) - H(X, Y)
        h_marginals - h_joint
    }
}
