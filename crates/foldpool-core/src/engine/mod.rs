//! # Engine Module
//!
//! The stateful orchestration layer: everything between "a list of work
//! items" and "a list of terminal outcome records".
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - typed run parameters with validating
//!   builders
//! - **Batching** ([`batch`]) - order-preserving partition of work items
//!   into fixed-size units
//! - **Execution pool** ([`pool`]) - bounded fan-out with exclusive
//!   accelerator slots; submission never blocks, only collection waits
//! - **Worker units** (`tasks`) - the unit bodies, each converting every
//!   internal failure into outcome records instead of propagating it
//! - **Reduction** (`reduce`) - fan-in: await all handles, flatten batch
//!   outputs, account for aborted batches
//! - **Reporting** ([`report`]) - the terminal summary write
//! - **Progress** ([`progress`]) - callback seam for user-facing progress
//! - **Error Handling** ([`error`]) - engine-level error types
//!
//! Within one run the pool is the only shared mutable state; units are
//! internally sequential and independent of each other.

pub mod batch;
pub mod config;
pub mod error;
pub mod pool;
pub mod progress;
pub mod report;

pub(crate) mod reduce;
pub(crate) mod tasks;
