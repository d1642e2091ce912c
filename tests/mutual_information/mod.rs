//! Pairwise mutual-information matrix tests.
mod mi_pair;
