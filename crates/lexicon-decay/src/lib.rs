//! # lexicon-decay
//!
//! Exponential decay of usage weights over logical ticks.
//! Weights recorded at an older tick are normalized before two stores'
//! statistics are compared during a merge.

pub mod engine;
pub mod formula;

pub use engine::DecayEngine;
