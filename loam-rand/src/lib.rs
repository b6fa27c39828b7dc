//! Deterministic seeded randomness for procedural generation.
//!
//! The [`SeededRandom`] generator is the single source of entropy for
//! the workspace: a fixed seed and call sequence reproduce the exact
//! same draws on every platform. On top of it sit 1D sequence
//! generation with spectral shaping ([`filter`]) and simple point,
//! walk, and dice sampling helpers ([`sample`]).
//!
//! The generator is not cryptographically strong and a single instance
//! is not safe to share across threads without external
//! synchronization; it is owned by exactly one call chain at a time.

pub mod filter;
mod generator;
pub mod sample;
mod sequence;

pub use generator::SeededRandom;
