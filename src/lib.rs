//! # vuamc
//!
//! A converter for TEI-encoded, metaphor-annotated corpora.
//!
//! The library turns one corpus document into an ordered flat table of
//! per-token records, reconstituting multi-word metaphor expressions that
//! the annotation splits across several token nodes. See the [vuamc]
//! module for the pipeline pieces and the `vuamc` binary for the
//! command-line entry point.

pub mod vuamc;
