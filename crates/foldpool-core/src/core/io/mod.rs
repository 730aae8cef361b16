//! File discovery and sequence-collection I/O.
//!
//! The engine only needs two things from the filesystem: a deterministic
//! enumeration of input artifacts ([`scan`]) and a codec for FASTA
//! sequence-collection files ([`fasta`]), which are both the prediction
//! pipeline's input format and the design pipeline's output format.

pub mod fasta;
pub mod scan;
