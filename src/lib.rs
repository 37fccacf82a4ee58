//! accum: reduce a list of integers given on the command line.
//!
//! The library mirrors the binary's two halves: [`cli`] turns the raw
//! argument vector into a discrete parse outcome, [`accumulate`] applies
//! the selected reduction. Process exit and printing happen only in the
//! binary, so every outcome is observable from tests.

pub mod accumulate;
pub mod cli;
pub mod exitcode;
