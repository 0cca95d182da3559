#![forbid(unsafe_code)]

//! ASCII box-and-line diagram parser.
//!
//! Turns text such as
//!
//! ```text
//! [A]-AB-[B]
//! |
//! |
//! []
//! ```
//!
//! into a [`Graph`] of bracketed nodes and dash/pipe edges, keeping every element's 1-based
//! source line and column.
//!
//! Parsing runs in three stages: [`tokenize`] lexes the text, a shape pass recognizes nodes and
//! edges and indexes them by coordinate, and a connect pass links each node to the edges beside
//! it and validates the result. The first error of any stage aborts the parse.
//!
//! ```
//! let graph = flagon_core::parse("[A]-AB-[B]")?;
//! let a = graph.node_by_label("A").unwrap();
//! let ab = graph[a].right().unwrap();
//! assert_eq!(graph[ab].label(), Some("AB"));
//! # Ok::<(), flagon_core::Error>(())
//! ```

mod connect;
pub mod error;
pub mod graph;
pub mod lexer;
pub mod options;
mod shape;
mod spatial;
pub mod token;

pub use error::{Error, LexError, Result, SemanticError, SyntaxError};
pub use graph::{Direction, Edge, EdgeId, Graph, Node, NodeId, Orientation};
pub use lexer::{Lexer, tokenize, tokenize_with_options};
pub use options::{LabelChars, ParseOptions};
pub use token::{Position, Token, TokenKind};

fn parse_timing_enabled() -> bool {
    static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
    *ENABLED.get_or_init(|| match std::env::var("FLAGON_PARSE_TIMING").as_deref() {
        Ok("1") | Ok("true") => true,
        _ => false,
    })
}

/// Parses a diagram with [`ParseOptions::default`].
pub fn parse(text: &str) -> Result<Graph> {
    parse_with_options(text, ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Graph> {
    let _span = tracing::debug_span!("parse", input_bytes = text.len()).entered();

    let timing_enabled = parse_timing_enabled();
    let total_start = timing_enabled.then(std::time::Instant::now);

    let lex_start = timing_enabled.then(std::time::Instant::now);
    let tokens = tokenize_with_options(text, options)?;
    let lex = lex_start.map(|s| s.elapsed());

    let shape_start = timing_enabled.then(std::time::Instant::now);
    let shapes = shape::build_shapes(&tokens)?;
    let shape = shape_start.map(|s| s.elapsed());

    let connect_start = timing_enabled.then(std::time::Instant::now);
    let graph = connect::connect(shapes)?;
    let connect = connect_start.map(|s| s.elapsed());

    if let Some(start) = total_start {
        eprintln!(
            "[parse-timing] total={:?} lex={:?} shape={:?} connect={:?} tokens={} nodes={} edges={} input_bytes={}",
            start.elapsed(),
            lex.unwrap_or_default(),
            shape.unwrap_or_default(),
            connect.unwrap_or_default(),
            tokens.len(),
            graph.node_count(),
            graph.edge_count(),
            text.len(),
        );
    }
    Ok(graph)
}

#[cfg(test)]
mod tests;
