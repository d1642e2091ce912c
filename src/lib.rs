// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # fastmim
//!
//! Parallel pairwise mutual-information matrices over discretized variables, with
//! finite-sample bias-corrected discrete entropy estimators.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastmim::estimators::mutual_information::MutualInformation;
//! use ndarray::array;
//!
//! // 4 samples x 3 variables, 1-based bin codes
//! let data = array![[1, 2, 3], [3, 2, 1], [2, 3, 1], [1, 1, 2]];
//! let mim = MutualInformation::matrix_mle(data.view(), 2).unwrap();
//! assert_eq!(mim[[0, 1]], mim[[1, 0]]);
//! ```
//!
//! ## Estimators
//!
//! | Estimator | Correction | Negative MI clamped |
//! |-----------|------------|---------------------|
//! | Maximum likelihood | none | no |
//! | Miller–Madow | (K-1)/(2N) | yes |
//! | Chao–Shen | coverage + Horvitz–Thompson | yes |
//! | Shrinkage | James–Stein toward uniform | no |
//!
//! All entropies are in nats.
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: `MutualInformation` entry points and `MiMatrixBuilder`
//! 2. **Estimation Approaches**: discrete entropy estimators over empirical distributions
//! 3. **Core Infrastructure**: shared traits, pair enumeration and the code-matrix dataset
//!
//! ## Input convention
//!
//! Bin codes are 1-based by default, as produced by most analysis environments, and are
//! shifted to 0-based internally. Each variable is binned on its own observed range.
//! `MiMatrixBuilder::index_base` accepts 0-based codes instead.
//!
//! ## Logging
//!
//! Phase boundaries are reported through the `log` facade at `debug` level; install any
//! logger to see them.

pub mod error;
pub mod estimators;

pub use error::{Error, Result};
