#![forbid(unsafe_code)]

//! `flagon` parses ASCII-art box diagrams into a navigable graph.
//!
//! ```text
//! [A]-AB-[B]
//! |
//! |
//! []
//! ```
//!
//! Nodes are bracketed boxes, edges are runs of `-` or `|` that may carry one inline label.
//! Every node and edge keeps its 1-based line/column. See [`parse`] and [`Graph`].
//!
//! Set `FLAGON_PARSE_TIMING=1` to print per-stage timings to stderr.

pub use flagon_core::*;
