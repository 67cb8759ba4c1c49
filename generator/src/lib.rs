//! Deterministic generation of map test fixtures.
//!
//! This crate turns a seed into the aggregate fixture document:
//!
//! - A small self-contained random source (no external RNG dependency)
//! - Builders for each element category
//! - Fixed per-category counts and cycling label assignment
//!
//! # Design Principles
//!
//! - **Reproducible** - The same seed always produces the same dataset,
//!   down to the serialized bytes.
//! - **Order-sensitive** - The random source is consumed in a fixed call
//!   order; that order is part of the output contract.

mod counts;
mod generate;
mod rng;

pub use counts::DatasetCounts;
pub use generate::{generate, Generator, DEFAULT_SEED, TRIANGLE_OFFSET};
pub use rng::Rng;
