// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// fastmim::estimators::approaches::* ergonomically.
pub use discrete::chao_shen::ChaoShenEntropy;
pub use discrete::discrete_utils::{DiscreteDataset, EmpiricalDistribution, IndexBase};
pub use discrete::miller_madow::MillerMadowEntropy;
pub use discrete::mle::DiscreteEntropy;
pub use discrete::shrink::ShrinkEntropy;
pub use discrete::DiscreteMutualInformation;
