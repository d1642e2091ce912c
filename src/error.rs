// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Contract violations reported by the mutual-information matrix builders.
///
/// Numerical degeneracies (zero shrinkage denominator, infinite Chao–Shen
/// correction factors, negative bias-corrected MI) are never errors; the
/// estimators absorb them into their formulas.
#[derive(Debug, Error)]
pub enum Error {
    #[error("empty input: {n_samples} samples x {n_variables} variables")]
    EmptyInput { n_samples: usize, n_variables: usize },

    #[error("thread count must be positive, got {0}")]
    InvalidThreadCount(usize),

    #[error("negative bin index {value} at sample {sample}, variable {variable} after index normalization")]
    NegativeBinIndex {
        sample: usize,
        variable: usize,
        value: i64,
    },

    #[error("variable index {index} out of range for {n_variables} variables")]
    VariableOutOfRange { index: usize, n_variables: usize },

    #[error("unknown estimator '{0}'")]
    UnknownEstimator(String),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
