//! First pass: recognize node and edge shapes from the token stream.
//!
//! Grammar, where "next" means the nearest token to the right on the same line (horizontal) or
//! below in the same column (vertical):
//!
//! ```text
//! Node           -> OpenBracket [Label] CloseBracket
//! HorizontalEdge -> Dash {Dash} [Label Dash {Dash}]
//! VerticalEdge   -> Pipe {Pipe} [Label Pipe {Pipe}]
//! ```
//!
//! Tokens folded into a shape are marked consumed and skipped by the top-level scan, so a pipe
//! run that crosses later lines is not re-dispatched when the scan reaches those lines.

use crate::error::SyntaxError;
use crate::graph::{Edge, EdgeId, Node, NodeId, Orientation};
use crate::spatial::{SpatialIndex, TokenIndex};
use crate::token::{Token, TokenKind};

/// Nodes and edges in discovery order, plus the coordinate indices built while finding them.
#[derive(Debug, Clone)]
pub(crate) struct Shapes {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) index: SpatialIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Right,
    Down,
}

impl Axis {
    fn run_kind(self) -> TokenKind {
        match self {
            Axis::Right => TokenKind::Dash,
            Axis::Down => TokenKind::Pipe,
        }
    }

    fn missing_run_after_label(self, label: &Token) -> SyntaxError {
        let position = label.position();
        let label = label.text().to_string();
        match self {
            Axis::Right => SyntaxError::ExpectedDashAfterLabel { position, label },
            Axis::Down => SyntaxError::ExpectedPipeAfterLabel { position, label },
        }
    }
}

pub(crate) fn build_shapes(tokens: &[Token]) -> Result<Shapes, SyntaxError> {
    ShapeParser::new(tokens).run()
}

struct ShapeParser<'t> {
    tokens: &'t [Token],
    consumed: Vec<bool>,
    cursor: usize,
    token_index: TokenIndex,
    index: SpatialIndex,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'t> ShapeParser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            consumed: vec![false; tokens.len()],
            cursor: 0,
            token_index: TokenIndex::new(tokens),
            index: SpatialIndex::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Shapes, SyntaxError> {
        for start in 0..self.tokens.len() {
            if self.consumed[start] {
                continue;
            }
            self.move_to(start);

            let token = self.current();
            match token.kind() {
                TokenKind::OpenBracket => {
                    let node = self.parse_node()?;
                    self.add_node(node);
                }
                TokenKind::Dash => {
                    let edge = self.parse_edge(Axis::Right)?;
                    self.add_edge(edge);
                }
                TokenKind::Pipe => {
                    let edge = self.parse_edge(Axis::Down)?;
                    self.add_edge(edge);
                }
                kind => {
                    return Err(SyntaxError::UnexpectedToken {
                        position: token.position(),
                        kind,
                    });
                }
            }
        }

        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            horizontal_keys = self.index.horizontal_edges.len(),
            vertical_keys = self.index.vertical_edges.len(),
            "recognized shapes"
        );
        Ok(Shapes {
            nodes: self.nodes,
            edges: self.edges,
            index: self.index,
        })
    }

    fn current(&self) -> &'t Token {
        let tokens = self.tokens;
        &tokens[self.cursor]
    }

    fn move_to(&mut self, ix: usize) {
        self.cursor = ix;
        self.consumed[ix] = true;
    }

    fn accept(&mut self, axis: Axis, expected: TokenKind) -> bool {
        let token = self.current();
        let next = match axis {
            Axis::Right => self.token_index.next_right(token.line(), token.column()),
            Axis::Down => self.token_index.next_down(token.line(), token.column()),
        };
        match next {
            Some(ix) if self.tokens[ix].kind() == expected => {
                self.move_to(ix);
                true
            }
            _ => false,
        }
    }

    fn parse_node(&mut self) -> Result<Node, SyntaxError> {
        let open = self.current();
        let label = self
            .accept(Axis::Right, TokenKind::Label)
            .then(|| self.current().text().to_string());
        if !self.accept(Axis::Right, TokenKind::CloseBracket) {
            return Err(SyntaxError::UnterminatedNode {
                position: open.position(),
            });
        }
        let close = self.current();
        Ok(Node::new(open.line(), open.column(), close.column(), label))
    }

    fn parse_edge(&mut self, axis: Axis) -> Result<Edge, SyntaxError> {
        let run = axis.run_kind();
        let first = self.current();
        while self.accept(axis, run) {}

        let mut label = None;
        if self.accept(axis, TokenKind::Label) {
            let label_token = self.current();
            if !self.accept(axis, run) {
                return Err(axis.missing_run_after_label(label_token));
            }
            while self.accept(axis, run) {}
            label = Some(label_token.text().to_string());
        }

        let last = self.current();
        let mut edge = match axis {
            Axis::Right => Edge::horizontal(first.line(), first.column(), last.column()),
            Axis::Down => Edge::vertical(first.column(), first.line(), last.line()),
        };
        edge.label = label;
        Ok(edge)
    }

    fn add_node(&mut self, node: Node) {
        let id = NodeId(self.nodes.len());
        tracing::trace!(
            line = node.line,
            left = node.left_column,
            right = node.right_column,
            label = node.label.as_deref(),
            "node"
        );
        self.index.nodes.insert(node.line, node.left_column, id);
        self.nodes.push(node);
    }

    fn add_edge(&mut self, edge: Edge) {
        let id = EdgeId(self.edges.len());
        tracing::trace!(
            orientation = ?edge.orientation,
            top = edge.top_line,
            bottom = edge.bottom_line,
            left = edge.left_column,
            right = edge.right_column,
            label = edge.label.as_deref(),
            "edge"
        );
        match edge.orientation {
            Orientation::Horizontal => {
                let grid = &mut self.index.horizontal_edges;
                grid.insert(edge.top_line, edge.left_column, id);
                grid.insert(edge.top_line, edge.right_column, id);
            }
            Orientation::Vertical => {
                let grid = &mut self.index.vertical_edges;
                grid.insert(edge.top_line, edge.left_column, id);
                grid.insert(edge.bottom_line, edge.left_column, id);
            }
        }
        self.edges.push(edge);
    }
}
