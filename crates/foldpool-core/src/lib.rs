//! # foldpool Core Library
//!
//! A distributed batch-execution engine for protein inference jobs. It fans
//! independent work items (structures awaiting sequence design, sequences
//! awaiting structure prediction) out across a shared worker pool, isolates
//! per-item failures at the unit boundary, and fans the per-item outcomes
//! back in to a single persisted run summary.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep the
//! orchestration logic testable and the model backends replaceable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (work items,
//!   outcome records, the run summary), file discovery and FASTA I/O, and
//!   the collaborator seams for the external inference models.
//!
//! - **[`engine`]: The Logic Core.** The stateful layer: run configuration,
//!   the batcher, the execution pool with its exclusive accelerator slots,
//!   the worker-unit bodies, the reducer, and the summary writer.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry points. Each
//!   workflow ties the engine and core together to execute one complete run:
//!   discover inputs, dispatch units, collect outcomes, write the summary.

pub mod core;
pub mod engine;
pub mod workflows;
