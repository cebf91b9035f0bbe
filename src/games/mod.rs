//! Game implementations.

pub mod guessing;
