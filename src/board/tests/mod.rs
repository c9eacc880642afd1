//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Standard layout determinism and board value semantics
//! - `movegen.rs` - Per-kind pseudo-legal move properties
//! - `game.rs` - Legality filtering, atomicity, terminal detection
//! - `proptest.rs` - Property-based tests

mod proptest;
