//! File output for production plans.

pub mod export;
