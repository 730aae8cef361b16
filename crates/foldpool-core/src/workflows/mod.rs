//! # Workflows Module
//!
//! The top-level entry points of the library. Each workflow executes one
//! complete, atomic run: discover the inputs once, dispatch every unit onto
//! the pool once, collect every outcome once, and close the run out with a
//! persisted summary. There is no intermediate persisted state, no retry,
//! and no cross-run resumption.
//!
//! - **Sequence design** ([`design`]) - one unit per input structure,
//!   sharing the worker pool freely.
//! - **Structure prediction** ([`predict`]) - sequences grouped into
//!   batches, each batch holding an exclusive accelerator slot while it
//!   runs.
//!
//! Both workflows always produce a run summary, including for an empty
//! input set; per-item failures are visible only through the summary's
//! counts and records, never as process-level errors.

pub mod design;
pub mod predict;
