//! Learning Reports - derived metrics over a spaced-repetition learning log
//!
//! The `burden`, `tolearn` and `learnstats` binaries are thin front ends over
//! the [`learn`] module.

pub mod learn;
